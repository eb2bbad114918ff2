use crate::http::errors::{unknown_error_response, JSON_CONTENT_TYPE};
use crate::lambda_structure::http_lambda_main::HttpLambdaResponse;
use crate::result::error::LambdaError;
use anyhow::anyhow;
use http::header::CONTENT_TYPE;
use lambda_http::http::StatusCode;
use lambda_http::Response;
use serde::Serialize;
use std::collections::HashMap;

pub struct LambdaProxyHttpResponse {
    pub status_code: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl Default for LambdaProxyHttpResponse {
    fn default() -> Self {
        Self {
            status_code: StatusCode::OK,
            headers: HashMap::from([
                (CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_owned()),
                ("Access-Control-Allow-Origin".to_owned(), "*".to_owned()),
            ]),
            body: None,
        }
    }
}

impl LambdaProxyHttpResponse {
    /// Serializes `body` as the JSON payload of a response with the given status.
    pub fn json<T: Serialize + ?Sized>(status_code: StatusCode, body: &T) -> HttpLambdaResponse {
        let body = serde_json::to_string(body).map_err(|e| {
            unknown_error_response(LambdaError::Unknown(
                anyhow!(e).context("serializing response body"),
            ))
        })?;

        LambdaProxyHttpResponse {
            status_code,
            body: Some(body),
            ..LambdaProxyHttpResponse::default()
        }
        .try_into()
    }
}

impl TryFrom<LambdaProxyHttpResponse> for Response<String> {
    type Error = Response<String>;

    fn try_from(proxy_response: LambdaProxyHttpResponse) -> Result<Self, Self::Error> {
        let mut response = Response::builder().status(proxy_response.status_code);

        for (k, v) in proxy_response.headers {
            response = response.header(k, v);
        }

        response
            .body(proxy_response.body.unwrap_or_default())
            .map_err(|e| {
                unknown_error_response(LambdaError::Unknown(anyhow!(
                    "Error building response: {e}"
                )))
            })
    }
}
