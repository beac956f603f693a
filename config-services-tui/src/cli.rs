//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::backend::AppConfig;

/// Terminal admin screen for Configuration Services
#[derive(Debug, Parser)]
#[command(name = "config-admin", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/config-services-tui/config.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Admin service root, overrides `base_url`
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Bearer token, overrides `api_token`
    #[arg(long, env = "CONFIG_ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Serve built-in sample records instead of calling the service
    #[arg(long)]
    pub demo: bool,

    /// Log filter, e.g. `debug` or `config_services_client=trace` (default: RUST_LOG, then info)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Overlay command line values on the file configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(token) = &self.token {
            config.api_token = Some(token.clone());
        }
    }
}
