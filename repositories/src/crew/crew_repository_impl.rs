use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use model::crew::{CrewRecord, MOVIE_ID_ATTRIBUTE};
use rusoto_dynamodb::{AttributeValue, DynamoDb, GetItemInput, QueryInput};

use crate::deserialize::{deserialize_all_from_dynamo, deserialize_from_dynamo};

use super::{CrewPk, CrewRepository, CrewRepositoryError, MovieIdCondition};

pub struct CrewRepositoryImpl<D: DynamoDb + Sync + Send> {
    table_name: String,
    dynamodb_client: D,
}

impl<D: DynamoDb + Sync + Send> CrewRepositoryImpl<D> {
    pub fn new(table_name: String, dynamodb_client: D) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }

    fn build_crew_member_input(
        &self,
        movie_id: i64,
        role: String,
    ) -> Result<GetItemInput, anyhow::Error> {
        let key: HashMap<String, AttributeValue> =
            serde_dynamo::to_item(CrewPk::new(movie_id, role))
                .map_err(|e| anyhow!(e).context("generate movie crew key"))?;

        Ok(GetItemInput {
            key,
            table_name: self.table_name.clone(),
            ..GetItemInput::default()
        })
    }

    fn build_movie_crew_query_input(&self, movie_id: i64) -> Result<QueryInput, anyhow::Error> {
        let key_condition_expression = format!("{MOVIE_ID_ATTRIBUTE} = :movie_id");

        let expression_attribute_values = serde_dynamo::to_item(MovieIdCondition { movie_id })
            .map_err(|e| anyhow!(e).context("Error building query for movie crew"))?;

        Ok(QueryInput {
            table_name: self.table_name.clone(),
            key_condition_expression: Some(key_condition_expression),
            expression_attribute_values: Some(expression_attribute_values),
            ..QueryInput::default()
        })
    }
}

#[async_trait]
impl<D: DynamoDb + Sync + Send> CrewRepository for CrewRepositoryImpl<D> {
    async fn get_crew_member(
        &self,
        movie_id: i64,
        role: String,
    ) -> Result<Option<CrewRecord>, CrewRepositoryError> {
        let input = self.build_crew_member_input(movie_id, role.clone())?;

        let item = self
            .dynamodb_client
            .get_item(input)
            .await
            .map_err(|e| {
                CrewRepositoryError::Unknown(anyhow!(e).context(format!(
                    "unable to get crew member for movie_id: {movie_id}, role: {role}"
                )))
            })?
            .item;

        match item {
            Some(item) => Ok(Some(deserialize_from_dynamo::<
                CrewRecord,
                CrewRepositoryError,
            >(item)?)),
            None => Ok(None),
        }
    }

    async fn get_movie_crew(&self, movie_id: i64) -> Result<Vec<CrewRecord>, CrewRepositoryError> {
        let mut input = self.build_movie_crew_query_input(movie_id)?;
        let mut crew = Vec::new();

        // A single query page is capped at 1MB, keep reading until the partition is exhausted.
        loop {
            let output = self
                .dynamodb_client
                .query(input.clone())
                .await
                .map_err(|e| {
                    CrewRepositoryError::Unknown(
                        anyhow!(e).context(format!("Error querying crew with movie_id: {movie_id}")),
                    )
                })?;

            if let Some(items) = output.items {
                crew.extend(deserialize_all_from_dynamo::<
                    CrewRecord,
                    CrewRepositoryError,
                >(items)?);
            }

            match output.last_evaluated_key {
                Some(last_key) if !last_key.is_empty() => {
                    tracing::debug!(movie_id, read = crew.len(), "fetching next movie crew page");
                    input.exclusive_start_key = Some(last_key);
                }
                _ => break,
            }
        }

        Ok(crew)
    }
}
