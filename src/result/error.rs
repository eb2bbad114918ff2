//! LambdaError is the cause attached to a failed HTTP response. It is logged server side and never
//! sent back to the caller.

use repositories::crew::CrewRepositoryError;

pub type LambdaRuntimeResult = std::result::Result<(), lambda_http::Error>;

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
}

impl From<CrewRepositoryError> for LambdaError {
    fn from(value: CrewRepositoryError) -> Self {
        match value {
            CrewRepositoryError::Unknown(e) => LambdaError::Unknown(e),
        }
    }
}
