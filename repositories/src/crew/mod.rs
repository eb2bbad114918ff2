pub mod crew_repository_impl;

use async_trait::async_trait;
use model::crew::CrewRecord;
use serde::Serialize;

#[cfg(feature = "test_mocks")]
use mockall::mock;

use crate::impl_unknown_error_trait;

/// Composite primary key of the movie crew table.
#[derive(Serialize, Clone, Debug)]
pub struct CrewPk {
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    pub role: String,
}

impl CrewPk {
    pub fn new(movie_id: i64, role: String) -> Self {
        Self { movie_id, role }
    }
}

/// Values bound to the placeholders of the movie crew key condition expression.
#[derive(Serialize)]
pub struct MovieIdCondition {
    #[serde(rename(serialize = ":movie_id"))]
    pub movie_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum CrewRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

impl From<anyhow::Error> for CrewRepositoryError {
    fn from(error: anyhow::Error) -> Self {
        CrewRepositoryError::Unknown(error)
    }
}

impl_unknown_error_trait!(CrewRepositoryError);

#[async_trait]
pub trait CrewRepository
where
    Self: Sync + Send,
{
    /// Point lookup by `(movie_id, role)`. `None` when no record exists for the pair.
    async fn get_crew_member(
        &self,
        movie_id: i64,
        role: String,
    ) -> Result<Option<CrewRecord>, CrewRepositoryError>;

    /// Every record of a movie, in sort key order. Empty when the movie has no crew.
    async fn get_movie_crew(&self, movie_id: i64) -> Result<Vec<CrewRecord>, CrewRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub CrewRepository {}

    #[async_trait]
    impl CrewRepository for CrewRepository {
        async fn get_crew_member(
            &self,
            movie_id: i64,
            role: String,
        ) -> Result<Option<CrewRecord>, CrewRepositoryError>;

        async fn get_movie_crew(&self, movie_id: i64) -> Result<Vec<CrewRecord>, CrewRepositoryError>;
    }
}
