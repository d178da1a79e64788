// src/config/config_load.rs
//
// loading of config.toml

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub paths: PathConfig,
    #[serde(default)]
    pub text: TextConfig,
    pub colorful: ColorfulConfig,
    pub frequency: FrequencyConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_dir = exe_dir()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            debug!("loading config from {}", config_path.display());
            let content = fs::read_to_string(&config_path).ok()?;
            Self::from_toml_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self> {
        debug!("loading config from working directory");
        let content = fs::read_to_string("config.toml")?;
        Self::from_toml_str(&content)
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        resolve_path(&self.paths.output_directory)
    }

    pub fn resolve_font_file(&self) -> Option<PathBuf> {
        self.text.font_file.as_deref().map(resolve_path)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

// Relative paths resolve against the executable's directory when it is known
fn resolve_path(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else if let Some(dir) = exe_dir() {
        dir.join(path)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_CONFIG: &str = include_str!("../../config.toml");

    #[test]
    fn test_shipped_config_parses() {
        let config = Config::from_toml_str(SHIPPED_CONFIG).unwrap();

        assert_eq!(config.rendering.supersample, 2.0);
        assert_eq!(config.colorful.text, "Colorful!\nWonderful!");
        assert_eq!(config.colorful.font_size, 72);
        assert_eq!(config.colorful.start_phase.green, -4.3);
        assert_eq!(config.colorful.speed.blue, 0.0227);
        assert_eq!(config.frequency.num_colors, 32);
        assert_eq!(config.frequency.normalization, Normalization::Max);
        assert_eq!(config.frequency.hot, [255, 96, 0]);
        assert!(config.text.font_file.is_none());
    }

    #[test]
    fn test_normalization_names() {
        let with_mode = SHIPPED_CONFIG.replace(
            "normalization = \"max\"",
            "normalization = \"third-of-total\"",
        );
        let config = Config::from_toml_str(&with_mode).unwrap();
        assert_eq!(config.frequency.normalization, Normalization::ThirdOfTotal);

        let without_mode = SHIPPED_CONFIG.replace("normalization = \"max\"", "");
        let config = Config::from_toml_str(&without_mode).unwrap();
        assert_eq!(config.frequency.normalization, Normalization::Max);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let broken = SHIPPED_CONFIG.replace("[window]", "[windowz]");
        assert!(Config::from_toml_str(&broken).is_err());
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let absolute = if cfg!(windows) { "C:\\shots" } else { "/tmp/shots" };
        assert_eq!(resolve_path(absolute), PathBuf::from(absolute));
    }
}
