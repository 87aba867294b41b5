use log::warn;
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{IconKind, Rgb};

fn default_icon() -> IconKind {
    IconKind::General
}

fn default_verbose() -> bool {
    false
}

/// Optional settings read from `mapmark.toml`
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Icon for dropped markers that do not name one
    #[serde(default = "default_icon")]
    pub default_icon: IconKind,
    /// Color for dropped markers; the icon's palette color when unset
    #[serde(default)]
    pub default_color: Option<Rgb>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_icon: default_icon(),
            default_color: None,
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Search the standard locations and return the first config that parses
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Marker style used when a drop does not specify one
    pub fn marker_style(&self) -> (IconKind, Rgb) {
        let color = self
            .default_color
            .unwrap_or_else(|| self.default_icon.default_color());
        (self.default_icon, color)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mapmark.toml"));
    paths.push(PathBuf::from(".mapmark.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mapmark").join("config.toml"));
        paths.push(config_dir.join("mapmark.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mapmark.toml"));
        paths.push(home.join(".config").join("mapmark").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_icon, IconKind::General);
        assert_eq!(config.default_color, None);
        assert!(!config.verbose);
        assert_eq!(
            config.marker_style(),
            (IconKind::General, IconKind::General.default_color())
        );
    }

    #[test]
    fn test_config_overrides() {
        let config: FileConfig = toml::from_str(
            r##"
default_icon = "base-station"
default_color = "#00AA00"
verbose = true
"##,
        )
        .unwrap();
        assert_eq!(
            config.marker_style(),
            (IconKind::BaseStation, Rgb::new(0x00, 0xAA, 0x00))
        );
        assert!(config.verbose);
    }

    #[test]
    fn test_config_rejects_unknown_icon() {
        assert!(toml::from_str::<FileConfig>(r#"default_icon = "pin""#).is_err());
    }

    #[test]
    fn test_config_paths_start_local() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("mapmark.toml"));
        assert_eq!(paths[1], PathBuf::from(".mapmark.toml"));
    }
}
