use reqwest::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{json, Value};

use model::crew::CrewRecord;

use crate::fixtures::dynamodb::{dynamodb_fixture, DynamoDbFixture, TABLE_DEFINITION};
use crate::fixtures::lambda::{fixture, LambdaFixture};
use crate::helpers::dynamodb::{put_item, recreate_table};
use crate::helpers::lambda::{build_movie_event, LambdaResponse};
use crate::models::http_lambda_response::{HttpLambdaResponse, LambdaErrorResponse};

const FUNCTION_NAME: &str = "fetch_movie_crew";
const MOVIE_ID: i64 = 603;

type CrewMemberResponse = LambdaResponse<HttpLambdaResponse<Value>>;
type CrewResponse = LambdaResponse<HttpLambdaResponse<Vec<Value>>>;
type ErrorResponse = LambdaResponse<HttpLambdaResponse<LambdaErrorResponse>>;

struct LocalFixture;

#[fixture]
async fn local_fixture(dynamodb_fixture: &DynamoDbFixture) -> LocalFixture {
    recreate_table(
        &dynamodb_fixture.dynamodb_client,
        TABLE_DEFINITION,
        dynamodb_fixture.table_name.clone(),
    )
    .await;

    for (role, name) in [
        ("Director", "Lana Wachowski"),
        ("Producer", "Joel Silver"),
        ("Writer", "Lilly Wachowski"),
    ] {
        let record = CrewRecord::new(MOVIE_ID, role).with_attribute("name", name);
        put_item(
            &dynamodb_fixture.dynamodb_client,
            &dynamodb_fixture.table_name,
            &record,
        )
        .await;
    }

    LocalFixture
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_movie_crew_single_member(
    fixture: &LambdaFixture,
    #[future] local_fixture: LocalFixture,
) {
    local_fixture.await;

    let response: CrewMemberResponse = fixture
        .lambda
        .invoke(FUNCTION_NAME, build_movie_event("603", Some("Producer")))
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.status);
    assert_eq!(StatusCode::OK, response.body.status_code);
    assert_eq!(
        json!({ "movieId": MOVIE_ID, "role": "Producer", "name": "Joel Silver" }),
        response.body.body
    );
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_movie_crew_whole_crew(
    fixture: &LambdaFixture,
    #[future] local_fixture: LocalFixture,
) {
    local_fixture.await;

    let response: CrewResponse = fixture
        .lambda
        .invoke(FUNCTION_NAME, build_movie_event("603", None))
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.body.status_code);
    let roles: Vec<&str> = response
        .body
        .body
        .iter()
        .filter_map(|record| record["role"].as_str())
        .collect();
    assert_eq!(vec!["Director", "Producer", "Writer"], roles);
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_movie_crew_unknown_role(
    fixture: &LambdaFixture,
    #[future] local_fixture: LocalFixture,
) {
    local_fixture.await;

    let response: ErrorResponse = fixture
        .lambda
        .invoke(FUNCTION_NAME, build_movie_event("603", Some("Composer")))
        .await
        .unwrap();

    assert_eq!(StatusCode::NOT_FOUND, response.body.status_code);
    assert_eq!("Crew member not found", response.body.body.message);
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_movie_crew_unknown_movie_is_empty(
    fixture: &LambdaFixture,
    #[future] local_fixture: LocalFixture,
) {
    local_fixture.await;

    let response: CrewResponse = fixture
        .lambda
        .invoke(FUNCTION_NAME, build_movie_event("604", None))
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, response.body.status_code);
    assert!(response.body.body.is_empty());
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_movie_crew_invalid_movie_id(fixture: &LambdaFixture) {
    let response: ErrorResponse = fixture
        .lambda
        .invoke(FUNCTION_NAME, build_movie_event("the-matrix", None))
        .await
        .unwrap();

    assert_eq!(StatusCode::BAD_REQUEST, response.body.status_code);
    assert_eq!(
        "movieId path parameter has an invalid value",
        response.body.body.message
    );
}
