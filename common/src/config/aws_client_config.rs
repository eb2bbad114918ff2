use anyhow::anyhow;
use rusoto_core::region::Region;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Debug)]
pub struct AwsClientConfig {
    /// Current AWS region. The lambda runtime exports `AWS_REGION`; `REGION` is accepted too.
    #[serde(alias = "region")]
    aws_region: String,

    /// Only used for development. LocalStack endpoint
    #[serde(default)]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn new(aws_region: String, localstack_test_mode_endpoint: Option<String>) -> Self {
        Self {
            aws_region,
            localstack_test_mode_endpoint,
        }
    }

    pub fn region(&self) -> Result<Region, anyhow::Error> {
        if let Some(endpoint) = self.localstack_test_mode_endpoint.clone() {
            return Ok(Region::Custom {
                name: self.aws_region.clone(),
                endpoint,
            });
        }

        Region::from_str(&self.aws_region).map_err(|e| {
            anyhow!(e).context(format!(r#"unable to parse AWS region "{}""#, self.aws_region))
        })
    }
}
