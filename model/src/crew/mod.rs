mod attributes;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use attributes::deserialize_attributes;

/// Name of the partition key attribute of the movie crew table.
pub const MOVIE_ID_ATTRIBUTE: &str = "movieId";

/// One (movie, role) assignment stored in the movie crew table.
///
/// Only the composite key is typed. Every other attribute (actor name, credits, ...) is owned by
/// the loader that writes the table and is carried through untouched.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CrewRecord {
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    pub role: String,
    #[serde(flatten, deserialize_with = "deserialize_attributes")]
    pub attributes: Map<String, Value>,
}

impl CrewRecord {
    pub fn new(movie_id: i64, role: impl Into<String>) -> Self {
        Self {
            movie_id,
            role: role.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}
