use std::sync::Arc;

use common::aws_clients::dynamodb::get_dynamodb_client;
use common::config::ConfigLoader;
use http::StatusCode;
use lambda_http::Request;
use movie_crew_lookup::dtos::requests::crew_lookup::CrewMemberRequest;
use movie_crew_lookup::http::errors::{
    not_found_response, unknown_error_response, CREW_MEMBER_NOT_FOUND_MESSAGE,
};
use movie_crew_lookup::http::lambda_proxy::LambdaProxyHttpResponse;
use movie_crew_lookup::http_lambda_main;
use movie_crew_lookup::lambda_structure::http_lambda_main::HttpLambdaResponse;
use movie_crew_lookup::result::error::LambdaError;
use repositories::crew::crew_repository_impl::CrewRepositoryImpl;
use repositories::crew::CrewRepository;

use crate::config::Config;

mod config;

pub struct State<CR: CrewRepository> {
    crew_repository: Arc<CR>,
}

http_lambda_main!(
    {
        let config = ConfigLoader::load_default::<Config>()?;
        let dynamodb_client = get_dynamodb_client()?;

        let crew_repository = Arc::new(CrewRepositoryImpl::new(
            config.movie_crew_table_name,
            dynamodb_client,
        ));

        State { crew_repository }
    },
    fetch_crew_member
);

/// `GET /movies/{movieId}?role={role}` with both parameters mandatory. Never lists a whole crew.
async fn fetch_crew_member(
    request: Request,
    state: &State<impl CrewRepository>,
) -> HttpLambdaResponse {
    let CrewMemberRequest { movie_id, role } = CrewMemberRequest::from_request(&request)?;

    let crew_member = state
        .crew_repository
        .get_crew_member(movie_id, role)
        .await
        .map_err(|e| unknown_error_response(LambdaError::from(e)))?
        .ok_or_else(|| not_found_response(CREW_MEMBER_NOT_FOUND_MESSAGE.to_owned()))?;

    LambdaProxyHttpResponse::json(StatusCode::OK, &crew_member)
}
