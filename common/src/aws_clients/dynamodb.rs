use crate::config::aws_client_config::AwsClientConfig;
use crate::config::ConfigLoader;
use rusoto_dynamodb::DynamoDbClient;

/// Builds the DynamoDB client shared by every invocation of a lambda.
///
/// The client holds no mutable state, so it is created once during bootstrap and
/// borrowed by each request.
pub fn get_dynamodb_client() -> Result<DynamoDbClient, anyhow::Error> {
    let config = ConfigLoader::load_default::<AwsClientConfig>()?;
    Ok(DynamoDbClient::new(config.region()?))
}
