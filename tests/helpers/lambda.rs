use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Map, Value};

pub struct LambdaClient {
    lambda_watch_url: String,
    rest_client: reqwest::Client,
}

#[derive(Debug)]
pub enum LambdaError {
    RestError(reqwest::Error),
}

#[derive(Debug)]
pub struct LambdaResponse<R> {
    pub body: R,
    pub status: u16,
}

impl LambdaClient {
    pub fn new(lambda_watch_url: String) -> Self {
        Self {
            rest_client: reqwest::Client::new(),
            lambda_watch_url,
        }
    }

    pub async fn invoke<T: Serialize, R: DeserializeOwned>(
        &self,
        fn_name: &str,
        body: T,
    ) -> Result<LambdaResponse<R>, LambdaError> {
        let url = format!(
            "{}/2015-03-31/functions/{fn_name}/invocations",
            &self.lambda_watch_url
        );

        let response = self
            .rest_client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(LambdaError::RestError)?;

        Ok(LambdaResponse {
            status: response.status().into(),
            body: response.json::<R>().await.map_err(LambdaError::RestError)?,
        })
    }
}

/// API Gateway proxy event for `GET /movies/{movieId}`, with an optional `role` query string.
pub fn build_movie_event(movie_id: &str, role: Option<&str>) -> Value {
    let mut query_string_parameters = Map::new();
    if let Some(role) = role {
        query_string_parameters.insert("role".to_owned(), Value::String(role.to_owned()));
    }

    json!({
      "httpMethod": "GET",
      "path": format!("/movies/{movie_id}"),
      "resource": "/movies/{movieId}",
      "pathParameters": {
        "movieId": movie_id
      },
      "queryStringParameters": query_string_parameters,
      "requestContext": {
          "httpMethod": "GET",
          "requestTimeEpoch": 1589522
      },
      "body": null
    })
}
