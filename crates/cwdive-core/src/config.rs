use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/cwdive/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CwdiveConfig {
    /// Minutes either side of a log line's timestamp for derived queries.
    pub window_minutes: i64,
    /// Anchor `target` attribute written into rewritten rows.
    pub link_target: String,
}

impl Default for CwdiveConfig {
    fn default() -> Self {
        Self {
            window_minutes: 15,
            link_target: "_blank".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cwdive")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CwdiveConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CwdiveConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CwdiveConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CwdiveConfig::default();
        assert_eq!(cfg.window_minutes, 15);
        assert_eq!(cfg.link_target, "_blank");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CwdiveConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CwdiveConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.window_minutes, cfg.window_minutes);
        assert_eq!(parsed.link_target, cfg.link_target);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            window_minutes = 30
            link_target = "_self"
        "#;
        let cfg: CwdiveConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.window_minutes, 30);
        assert_eq!(cfg.link_target, "_self");
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: CwdiveConfig = toml::from_str("window_minutes = 5").unwrap();
        assert_eq!(cfg.window_minutes, 5);
        assert_eq!(cfg.link_target, "_blank");
    }
}
