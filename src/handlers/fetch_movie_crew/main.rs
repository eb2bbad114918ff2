use std::sync::Arc;

use common::aws_clients::dynamodb::get_dynamodb_client;
use common::config::ConfigLoader;
use http::StatusCode;
use lambda_http::Request;
use movie_crew_lookup::dtos::requests::crew_lookup::CrewLookupRequest;
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
    fetch_movie_crew
);

/// `GET /movies/{movieId}?role={role}`: a single crew member when `role` is given, the whole
/// crew of the movie otherwise.
async fn fetch_movie_crew(
    request: Request,
    state: &State<impl CrewRepository>,
) -> HttpLambdaResponse {
    let CrewLookupRequest { movie_id, role } = CrewLookupRequest::from_request(&request)?;

    match role {
        Some(role) => {
            let crew_member = state
                .crew_repository
                .get_crew_member(movie_id, role)
                .await
                .map_err(|e| unknown_error_response(LambdaError::from(e)))?
                .ok_or_else(|| not_found_response(CREW_MEMBER_NOT_FOUND_MESSAGE.to_owned()))?;

            LambdaProxyHttpResponse::json(StatusCode::OK, &crew_member)
        }
        None => {
            let crew = state
                .crew_repository
                .get_movie_crew(movie_id)
                .await
                .map_err(|e| unknown_error_response(LambdaError::from(e)))?;

            LambdaProxyHttpResponse::json(StatusCode::OK, &crew)
        }
    }
}
