use std::str::FromStr;

use http::Response;
use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};

use crate::http::errors::validation_error_response;

pub type HttpLambdaResponse = Result<Response<String>, Response<String>>;

// This macro is intended for lambdas that sit directly behind the ApiGateway (internally named
// 'http lambdas'). It is used to reduce boilerplate, to preserve state between executions and to
// take advantage of the `?` operator.
//
// The persisted block runs once per process: clients created there (the DynamoDB client inside a
// repository) are shared by reference with every invocation. The handler receives the request
// and a reference to that state, and returns `HttpLambdaResponse`, so an error can be returned
// as a HTTP response using the `?` operator.
//
// Example usage:
// ```
// http_lambda_main!(
//   { .. State },
//   main_fn
// )
// ```
#[macro_export]
macro_rules! http_lambda_main {
    ($persisted_block:block, $handler: ident) => {
        #[tokio::main]
        async fn main() -> $crate::result::error::LambdaRuntimeResult {
            use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
            use tracing_log::LogTracer;
            use tracing_subscriber::prelude::*;
            use $crate::config::GlobalConfig;
            use $crate::lambda_structure::http_lambda_main::log_inbound_request;

            LogTracer::init()?;

            let global_config = common::config::ConfigLoader::load_default::<GlobalConfig>()?;

            let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
            let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
            let bunyan_formatting_layer =
                BunyanFormattingLayer::new(app_name, non_blocking_writer);

            tracing_subscriber::registry()
                .with(global_config.level_filter())
                .with(JsonStorageLayer)
                .with(bunyan_formatting_layer)
                .init();

            let persisted = { $persisted_block };

            // Get a reference to avoid moving the persisted state into the service closure.
            let persisted = &persisted;

            let service = move |request: lambda_http::Request| async move {
                log_inbound_request(&request);

                let response = match $handler(request, persisted).await {
                    Ok(response) => response,
                    Err(response) => response,
                };

                Ok::<_, lambda_http::Error>(response)
            };

            lambda_http::run(lambda_http::service_fn(service)).await
        }
    };
}

/// Structured record of the inbound request, emitted before any validation runs.
pub fn log_inbound_request(request: &Request) {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        path_parameters = ?request.path_parameters(),
        query_string_parameters = ?request.query_string_parameters(),
        context = ?request.extensions().get::<RequestContext>(),
        "Execution started"
    );
}

pub trait RequestExtractor {
    /// Required path parameter. Absent and empty values are both reported as missing.
    fn extract_path_param<T: FromStr>(&self, param_name: &str)
        -> Result<T, RequestExtractorError>;

    /// Required query string parameter. Absent and empty values are both reported as missing.
    fn extract_query_param<T: FromStr>(
        &self,
        param_name: &str,
    ) -> Result<T, RequestExtractorError>;

    /// Optional query string parameter. An empty value (`?role=`) counts as absent.
    fn extract_optional_query_param<T: FromStr>(
        &self,
        param_name: &str,
    ) -> Result<Option<T>, RequestExtractorError>;
}

impl RequestExtractor for Request {
    fn extract_path_param<T: FromStr>(
        &self,
        param_name: &str,
    ) -> Result<T, RequestExtractorError> {
        let path_parameters = self.path_parameters();
        match path_parameters.first(param_name) {
            None | Some("") => Err(RequestExtractorError::PathParamNotFoundError(
                param_name.to_owned(),
            )),
            Some(value) => T::from_str(value).map_err(|_| {
                RequestExtractorError::PathParamWithWrongTypeError(param_name.to_owned())
            }),
        }
    }

    fn extract_query_param<T: FromStr>(
        &self,
        param_name: &str,
    ) -> Result<T, RequestExtractorError> {
        self.extract_optional_query_param(param_name)?
            .ok_or_else(|| RequestExtractorError::QueryParamNotFoundError(param_name.to_owned()))
    }

    fn extract_optional_query_param<T: FromStr>(
        &self,
        param_name: &str,
    ) -> Result<Option<T>, RequestExtractorError> {
        let query_parameters = self.query_string_parameters();
        match query_parameters.first(param_name) {
            None | Some("") => Ok(None),
            Some(value) => T::from_str(value).map(Some).map_err(|_| {
                RequestExtractorError::QueryParamWithWrongTypeError(param_name.to_owned())
            }),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RequestExtractorError {
    PathParamNotFoundError(String),
    PathParamWithWrongTypeError(String),
    QueryParamNotFoundError(String),
    QueryParamWithWrongTypeError(String),
}

impl From<RequestExtractorError> for Response<String> {
    fn from(error: RequestExtractorError) -> Self {
        let message = match error {
            RequestExtractorError::PathParamNotFoundError(param_name) => {
                format!("{param_name} path parameter is required")
            }
            RequestExtractorError::PathParamWithWrongTypeError(param_name) => {
                format!("{param_name} path parameter has an invalid value")
            }
            RequestExtractorError::QueryParamNotFoundError(param_name) => {
                format!("{param_name} query parameter is required")
            }
            RequestExtractorError::QueryParamWithWrongTypeError(param_name) => {
                format!("{param_name} query parameter has an invalid value")
            }
        };

        validation_error_response(message)
    }
}
