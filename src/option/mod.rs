pub mod log;

pub use log::*;

use serde::Deserialize;


#[derive(Default, Debug, Clone, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub log: LogOptions,
}

impl Options {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|err| anyhow::anyhow!("failed to parse config file: {}", err))
    }
}
