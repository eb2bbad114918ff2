use rstest::rstest;
use rusoto_dynamodb::DynamoDbClient;

use common::aws_clients::dynamodb::get_dynamodb_client;
use model::crew::CrewRecord;
use repositories::crew::crew_repository_impl::CrewRepositoryImpl;
use repositories::crew::CrewRepository;

use crate::fixtures::dynamodb::{dynamodb_fixture, DynamoDbFixture, TABLE_DEFINITION};
use crate::helpers::dynamodb::{put_item, recreate_table};

const MOVIE_ID: i64 = 78;

async fn seed(dynamodb_fixture: &DynamoDbFixture, records: &[CrewRecord]) {
    recreate_table(
        &dynamodb_fixture.dynamodb_client,
        TABLE_DEFINITION,
        dynamodb_fixture.table_name.clone(),
    )
    .await;

    for record in records {
        put_item(
            &dynamodb_fixture.dynamodb_client,
            &dynamodb_fixture.table_name,
            record,
        )
        .await;
    }
}

fn repository(dynamodb_fixture: &DynamoDbFixture) -> CrewRepositoryImpl<DynamoDbClient> {
    CrewRepositoryImpl::new(
        dynamodb_fixture.table_name.clone(),
        get_dynamodb_client().expect("unable to create DynamoDb client"),
    )
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn get_crew_member_reads_the_composite_key(dynamodb_fixture: &DynamoDbFixture) {
    let director = CrewRecord::new(MOVIE_ID, "Director").with_attribute("name", "Ridley Scott");
    let other_movie = CrewRecord::new(MOVIE_ID + 1, "Director").with_attribute("name", "Someone");
    seed(dynamodb_fixture, &[director.clone(), other_movie]).await;

    let repository = repository(dynamodb_fixture);

    let found = repository
        .get_crew_member(MOVIE_ID, "Director".to_owned())
        .await
        .unwrap();
    let missing = repository
        .get_crew_member(MOVIE_ID, "Editor".to_owned())
        .await
        .unwrap();

    assert_eq!(Some(director), found);
    assert_eq!(None, missing);
}

#[rstest]
#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn get_movie_crew_returns_only_that_movie(dynamodb_fixture: &DynamoDbFixture) {
    let crew: Vec<CrewRecord> = ["Cinematographer", "Director", "Producer"]
        .into_iter()
        .map(|role| CrewRecord::new(MOVIE_ID, role))
        .collect();
    let mut records = crew.clone();
    records.push(CrewRecord::new(MOVIE_ID + 1, "Director"));
    seed(dynamodb_fixture, &records).await;

    let found = repository(dynamodb_fixture)
        .get_movie_crew(MOVIE_ID)
        .await
        .unwrap();

    assert_eq!(crew, found);
}
