use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Movie crew table. Deployments that only export `TABLE_NAME` are accepted too.
    #[serde(alias = "table_name")]
    pub movie_crew_table_name: String,
}
