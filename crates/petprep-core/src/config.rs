use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::HttpOptions;
use crate::relabel::RelabelMode;

/// Global configuration loaded from `~/.config/petprep/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetprepConfig {
    /// Directory downloads land in and archives extract into.
    /// None = the process current directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Overall transfer deadline in seconds. None = wait indefinitely.
    #[serde(default)]
    pub transfer_timeout_secs: Option<u64>,
    /// What to do with files that don't match the breed naming pattern.
    #[serde(default)]
    pub relabel_mode: RelabelMode,
    /// Restore numeric uid/gid when extracting archives (needs privileges).
    #[serde(default)]
    pub preserve_ownership: bool,
    /// Prediction service endpoint for `petprep score`.
    #[serde(default)]
    pub score_url: Option<String>,
}

impl Default for PetprepConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            connect_timeout_secs: 30,
            transfer_timeout_secs: None,
            relabel_mode: RelabelMode::default(),
            preserve_ownership: false,
            score_url: None,
        }
    }
}

impl PetprepConfig {
    /// HTTP options derived from the timeout fields.
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            transfer_timeout: self.transfer_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("petprep")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PetprepConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PetprepConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PetprepConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PetprepConfig::default();
        assert!(cfg.base_dir.is_none());
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert!(cfg.transfer_timeout_secs.is_none());
        assert_eq!(cfg.relabel_mode, RelabelMode::Lenient);
        assert!(!cfg.preserve_ownership);
        assert!(cfg.score_url.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PetprepConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PetprepConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.relabel_mode, cfg.relabel_mode);
        assert_eq!(parsed.preserve_ownership, cfg.preserve_ownership);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_dir = "/data/pets"
            connect_timeout_secs = 5
            transfer_timeout_secs = 600
            relabel_mode = "strict"
            preserve_ownership = true
            score_url = "http://scoring.internal/score"
        "#;
        let cfg: PetprepConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_dir.as_deref(), Some(std::path::Path::new("/data/pets")));
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.transfer_timeout_secs, Some(600));
        assert_eq!(cfg.relabel_mode, RelabelMode::Strict);
        assert!(cfg.preserve_ownership);
        assert_eq!(cfg.score_url.as_deref(), Some("http://scoring.internal/score"));
    }

    #[test]
    fn http_options_from_config() {
        let mut cfg = PetprepConfig::default();
        cfg.transfer_timeout_secs = Some(120);
        let http = cfg.http_options();
        assert_eq!(http.connect_timeout, Duration::from_secs(30));
        assert_eq!(http.transfer_timeout, Some(Duration::from_secs(120)));
    }
}
