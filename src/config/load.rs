//! The main config loading module for colls.
//!
//! Handles loading and deserializing settings from `colls.toml`.
//!
//! Provides the main [Config] struct and the default config generation used by `colls --init`.

use crate::config::{Display, General};
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

const DEFAULT_TOML: &str = r##"# colls.toml - default configuration for colls
#
# Values here are defaults; the -l, -a and -r flags can only switch options on.

[general]
# long_format = false
# show_hidden = false
# reverse_order = false

[display]
# Append '/' to directory names in the long (-l) report
# dir_marker = true
# Grid width used when the terminal width cannot be determined
# fallback_width = 80
"##;

/// Main configuration struct for colls
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    general: General,
    display: Display,
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by the entry point once per run.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, with the same fallbacks as [Config::load].
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using internal defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                log::warn!("error parsing {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parses the contents of a config file.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Determine the default configuration file path.
    /// Checks the COLLS_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/colls/colls.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("COLLS_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("colls/colls.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/colls/colls.toml");
        }
        PathBuf::from("colls.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        log::info!("default config generated at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FALLBACK_WIDTH;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = Config::parse("[general]\nshow_hidden = true\n")?;
        assert!(cfg.general().show_hidden());
        assert!(!cfg.general().long_format());
        assert!(!cfg.general().reverse_order());
        assert!(cfg.display().dir_marker());
        assert_eq!(cfg.display().fallback_width(), FALLBACK_WIDTH);
        Ok(())
    }

    #[test]
    fn display_table() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = Config::parse("[display]\ndir_marker = false\nfallback_width = 0\n")?;
        assert!(!cfg.display().dir_marker());
        assert_eq!(cfg.display().fallback_width(), 1);
        Ok(())
    }

    #[test]
    fn invalid_file_falls_back() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("colls.toml");
        fs::write(&path, "[general\nshow_hidden = yes")?;
        assert_eq!(Config::load_from(&path), Config::default());
        Ok(())
    }

    #[test]
    fn missing_file_falls_back() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        assert_eq!(
            Config::load_from(&dir.path().join("absent.toml")),
            Config::default()
        );
        Ok(())
    }

    #[test]
    fn generated_default_parses_and_is_not_overwritten() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempdir()?;
        let path = dir.path().join("nested/colls/colls.toml");
        Config::generate_default(&path)?;
        assert_eq!(Config::load_from(&path), Config::default());

        let err = Config::generate_default(&path)
            .err()
            .ok_or("second generate should fail")?;
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        Ok(())
    }
}
