//! Loading service configuration from TOML.
//!
//! See `HubConfig` for the expected schema. Every field is optional.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HubConfig {
  /// Backing file of the document store.
  pub data_path: String,
  /// SPA assets; `index.html` is served for unknown paths.
  pub static_dir: String,
  pub port: u16,
  /// Rows shown when previewing an upload.
  pub preview_rows: usize,
  pub max_upload_bytes: usize,
}

impl Default for HubConfig {
  fn default() -> Self {
    Self {
      data_path: "data.json".into(),
      static_dir: "./static".into(),
      port: 3000,
      preview_rows: 5,
      max_upload_bytes: 10 * 1024 * 1024,
    }
  }
}

/// Load `HubConfig` from HUB_CONFIG_PATH. Missing variable, unreadable file or
/// bad TOML all fall back to defaults (errors are logged).
pub fn load_config_from_env() -> HubConfig {
  let Ok(path) = std::env::var("HUB_CONFIG_PATH") else {
    return HubConfig::default();
  };
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "growth_hub", %path, "Loaded config (TOML)");
        cfg
      }
      Err(e) => {
        error!(target: "growth_hub", %path, error = %e, "Failed to parse TOML config");
        HubConfig::default()
      }
    },
    Err(e) => {
      error!(target: "growth_hub", %path, error = %e, "Failed to read TOML config file");
      HubConfig::default()
    }
  }
}

pub fn parse_config(s: &str) -> Result<HubConfig, toml::de::Error> {
  toml::from_str(s)
}
