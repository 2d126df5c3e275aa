use crate::config::FileConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "widget-call")]
#[command(about = "Dispatch a widget AJAX call with login/captcha recovery")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, required_unless_present = "config")]
    pub endpoint: Option<String>,

    #[arg(long, required_unless_present = "config")]
    pub login_url: Option<String>,

    #[arg(long, required_unless_present = "config")]
    pub verify_url: Option<String>,

    #[arg(long, help = "Inline JSON payload (overrides the file's [payload] table)")]
    pub payload: Option<String>,

    #[arg(long, help = "Dialog-then-retry cycles per dispatch (default 3)")]
    pub max_recoveries: Option<u32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves flags and the optional config file into a dispatch config
    /// plus the request payload. Flags win over file values.
    pub fn resolve(&self) -> Result<(FileConfig, serde_json::Value)> {
        let mut config = match &self.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig {
                endpoint: self.endpoint.clone().unwrap_or_default(),
                login_url: self.login_url.clone().unwrap_or_default(),
                verify_url: self.verify_url.clone().unwrap_or_default(),
                max_recoveries: crate::config::DEFAULT_MAX_RECOVERIES,
                payload: None,
            },
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(login_url) = &self.login_url {
            config.login_url = login_url.clone();
        }
        if let Some(verify_url) = &self.verify_url {
            config.verify_url = verify_url.clone();
        }
        if let Some(max_recoveries) = self.max_recoveries {
            config.max_recoveries = max_recoveries;
        }

        let payload = match &self.payload {
            Some(raw) => serde_json::from_str(raw)?,
            None => config
                .payload
                .take()
                .unwrap_or(serde_json::Value::Object(Default::default())),
        };

        Ok((config, payload))
    }
}
