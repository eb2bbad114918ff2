use std::{collections::HashMap, error::Error};

use rusoto_dynamodb::AttributeValue;
use serde::de::DeserializeOwned;

pub trait UnknownError {
    fn unknown<E: Error + Sync + Send + 'static>(e: E, context: Option<&'static str>) -> Self;
}

#[macro_export]
macro_rules! impl_unknown_error_trait {
    ($struct: ident) => {
        impl $crate::deserialize::UnknownError for $struct {
            fn unknown<E: std::error::Error + Sync + Send + 'static>(
                e: E,
                context: Option<&'static str>,
            ) -> Self {
                if let Some(ctx) = context {
                    Self::Unknown(anyhow::anyhow!(e).context(ctx))
                } else {
                    Self::Unknown(anyhow::anyhow!(e))
                }
            }
        }
    };
}

pub fn deserialize_from_dynamo<O: DeserializeOwned, E: UnknownError>(
    dynamo_object: HashMap<String, AttributeValue>,
) -> Result<O, E> {
    serde_dynamo::from_item(dynamo_object)
        .map_err(|e| E::unknown(e, Some("Error deserializing record")))
}

/// Deserializes every item of a query page, failing on the first malformed one.
pub fn deserialize_all_from_dynamo<O: DeserializeOwned, E: UnknownError>(
    dynamo_objects: Vec<HashMap<String, AttributeValue>>,
) -> Result<Vec<O>, E> {
    dynamo_objects
        .into_iter()
        .map(deserialize_from_dynamo::<O, E>)
        .collect()
}
