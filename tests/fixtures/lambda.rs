use common::config::ConfigLoader;
use rstest::fixture;

use crate::fixtures::config::LambdaConfig;
use crate::helpers::lambda::LambdaClient;

pub struct LambdaFixture {
    pub lambda: LambdaClient,
}

#[fixture]
#[once]
pub fn fixture() -> LambdaFixture {
    let config = ConfigLoader::load_test::<LambdaConfig>()
        .unwrap_or_else(|e| panic!("unable to load lambda fixture: {e}"));

    LambdaFixture {
        lambda: LambdaClient::new(config.lambda_watch_url),
    }
}
