#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::DispatchConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_RECOVERIES: u32 = 3;

fn default_max_recoveries() -> u32 {
    DEFAULT_MAX_RECOVERIES
}

/// Dispatch configuration loaded from a TOML file. The optional `[payload]`
/// table supplies the request body when no inline payload is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub endpoint: String,
    pub login_url: String,
    pub verify_url: String,
    #[serde(default = "default_max_recoveries")]
    pub max_recoveries: u32,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

impl FileConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl DispatchConfig for FileConfig {
    fn ajax_url(&self) -> &str {
        &self.endpoint
    }

    fn login_url(&self) -> &str {
        &self.login_url
    }

    fn verify_url(&self) -> &str {
        &self.verify_url
    }

    fn max_recoveries(&self) -> u32 {
        self.max_recoveries
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_url("login_url", &self.login_url)?;
        validate_url("verify_url", &self.verify_url)?;
        Ok(())
    }
}
