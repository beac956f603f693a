//! Configuration service
//!
//! `AppConfig` lives in `<config_dir>/config-services-tui/config.json`.
//! A missing file means defaults; a malformed one is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use config_services_client::DEFAULT_CONFIGS_PATH;

use crate::model::columns::ColumnDef;
use crate::view::theme::Theme;

const APP_DIR: &str = "config-services-tui";
const CONFIG_FILE: &str = "config.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Admin service root, e.g. `https://config.example.com`
    pub base_url: String,
    pub configs_path: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub theme: Theme,
    /// `en-US` or `zh-CN`
    pub language: String,
    /// Grid columns; empty = derive from the records
    pub columns: Vec<ColumnDef>,
    /// Log file; defaults to `config-admin.log` in the config file's directory
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            configs_path: DEFAULT_CONFIGS_PATH.to_string(),
            api_token: None,
            timeout_secs: 30,
            max_retries: 2,
            theme: Theme::Dark,
            language: "en-US".to_string(),
            columns: Vec::new(),
            log_file: None,
        }
    }
}

/// Directory holding the default config file.
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Configuration service trait
pub trait ConfigService: Send + Sync {
    fn load(&self) -> Result<AppConfig>;

    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON file backed configuration
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
