use lambda_http::aws_lambda_events::apigw::ApiGatewayProxyRequestContext;
use lambda_http::http::Method;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Request, RequestExt};
use std::collections::HashMap;

/// Builds a `GET` request as the API Gateway proxy integration would hand it to the lambda.
pub fn build_get_request(
    path_params: HashMap<String, String>,
    query_params: HashMap<String, String>,
) -> Request {
    let request_context = RequestContext::ApiGatewayV1(ApiGatewayProxyRequestContext::default());

    let mut request = Request::new(Body::Empty);
    *request.method_mut() = Method::GET;

    request
        .with_request_context(request_context)
        .with_path_parameters(path_params)
        .with_query_string_parameters(query_params)
}

/// Shortcut for the `/movies/{movieId}?role={role}` route.
pub fn build_movie_request(movie_id: Option<&str>, role: Option<&str>) -> Request {
    let path_params = movie_id
        .map(|id| HashMap::from([("movieId".to_owned(), id.to_owned())]))
        .unwrap_or_default();
    let query_params = role
        .map(|role| HashMap::from([("role".to_owned(), role.to_owned())]))
        .unwrap_or_default();

    build_get_request(path_params, query_params)
}
