use serde::{self, Deserialize};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Maximum level of the emitted logs (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl GlobalConfig {
    /// Unparsable levels fall back to `info` so a typo never silences the request log.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::INFO)
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
