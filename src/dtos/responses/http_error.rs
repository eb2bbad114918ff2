use serde::Deserialize;

/// Shape of the body returned with every 4xx/5xx response.
#[derive(Deserialize, Debug)]
pub struct LambdaErrorResponse {
    pub message: String,
}
