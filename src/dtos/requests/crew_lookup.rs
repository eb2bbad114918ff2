use http::Response;
use lambda_http::Request;

use crate::lambda_structure::http_lambda_main::RequestExtractor;

pub const MOVIE_ID_PATH_PARAM: &str = "movieId";
pub const ROLE_QUERY_PARAM: &str = "role";

/// `GET /movies/{movieId}?role={role}` where the role may be left out to list the whole crew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewLookupRequest {
    pub movie_id: i64,
    pub role: Option<String>,
}

impl CrewLookupRequest {
    pub fn from_request(request: &Request) -> Result<Self, Response<String>> {
        Ok(Self {
            movie_id: request.extract_path_param(MOVIE_ID_PATH_PARAM)?,
            role: request.extract_optional_query_param(ROLE_QUERY_PARAM)?,
        })
    }
}

/// `GET /movies/{movieId}?role={role}` where both parameters are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMemberRequest {
    pub movie_id: i64,
    pub role: String,
}

impl CrewMemberRequest {
    pub fn from_request(request: &Request) -> Result<Self, Response<String>> {
        Ok(Self {
            movie_id: request.extract_path_param(MOVIE_ID_PATH_PARAM)?,
            role: request.extract_query_param(ROLE_QUERY_PARAM)?,
        })
    }
}
