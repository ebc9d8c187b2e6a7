use serde::Deserialize;

use crate::log::Level;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBackend {
    #[default]
    Line,
    Tracing,
}

#[serde_with::serde_as]
#[derive(Default, Debug, Clone, Deserialize)]
pub struct LogOptions {
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub backend: LogBackend,
    /// Absent reports every level, an empty list reports none.
    #[serde_as(deserialize_as = "Option<serde_with::OneOrMany<serde_with::DisplayFromStr>>")]
    #[serde(default)]
    pub levels: Option<Vec<Level>>,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    #[serde(rename = "disable-timestamp")]
    pub disable_timestamp: bool,
}
