use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use lambda_http::Response;
use serde_json::json;

use crate::result::error::LambdaError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

// messages
pub const CREW_MEMBER_NOT_FOUND_MESSAGE: &str = "Crew member not found";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";

fn error_response(
    message: String,
    status_code: StatusCode,
    cause: Option<LambdaError>,
) -> Response<String> {
    if let Some(e) = cause {
        tracing::error!(error = ?e, "{:?}", e);
    }
    let mut response = Response::new(error_response_body(message));
    *response.status_mut() = status_code;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    response
}

pub fn error_response_body(message: String) -> String {
    json!({ "message": message }).to_string()
}

pub fn not_found_response(message: String) -> Response<String> {
    error_response(message, StatusCode::NOT_FOUND, None)
}

/// Every infrastructure failure collapses into the same 500; the cause is only logged.
pub fn unknown_error_response(cause: LambdaError) -> Response<String> {
    error_response(
        SERVER_ERROR_MESSAGE.to_owned(),
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(cause),
    )
}

/// Client input errors are expected outcomes and are not logged.
pub fn validation_error_response(message: String) -> Response<String> {
    error_response(message, StatusCode::BAD_REQUEST, None)
}
