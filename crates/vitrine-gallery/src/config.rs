//! Gallery configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/vitrine-gallery/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vitrine_widgets::SiteInfo;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GalleryConfig {
    /// Site identity and link targets for the top navigation
    pub site: SiteInfo,
    /// Display settings (theme, startup tab, accent)
    pub display: DisplayConfig,
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Dark theme enabled
    pub dark_mode: bool,
    /// Open demos on the Visualizer tab even when controls exist
    pub start_on_visualizer: bool,
    /// Accent color as a hex string (e.g. "#4DB3E6")
    pub accent: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            start_on_visualizer: false,
            accent: "#4DB3E6".to_string(),
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/vitrine-gallery/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vitrine-gallery")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> GalleryConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return GalleryConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<GalleryConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - Dark mode: {}, Start on visualizer: {}, {} versions",
                    config.display.dark_mode,
                    config.display.start_on_visualizer,
                    config.site.versions.len()
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                GalleryConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            GalleryConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &GalleryConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write config to {:?}", path))?;

    log::info!("save_config: Saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        let config = GalleryConfig::default();
        assert!(config.display.dark_mode);
        assert!(!config.display.start_on_visualizer);
        assert!(config.display.accent.starts_with('#'));
        assert!(!config.site.versions.is_empty());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = GalleryConfig::default();
        config.display.dark_mode = false;
        config.display.start_on_visualizer = true;
        config.site.name = "Acme UI".to_string();

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: GalleryConfig = serde_yaml::from_str(&yaml).unwrap();

        assert!(!parsed.display.dark_mode);
        assert!(parsed.display.start_on_visualizer);
        assert_eq!(parsed.site.name, "Acme UI");
        assert_eq!(parsed.site.versions, config.site.versions);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let parsed: GalleryConfig = serde_yaml::from_str("display:\n  dark_mode: false\n").unwrap();
        assert!(!parsed.display.dark_mode);
        // Everything unspecified falls back to defaults
        assert!(!parsed.display.start_on_visualizer);
        assert_eq!(parsed.site.name, SiteInfo::default().name);
    }
}
