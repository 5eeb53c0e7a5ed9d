//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration:
//! the theme preference and optional hotkey overrides. Marketplace data is
//! never written to disk.

mod error;
mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{
    build_footer_text, default_hotkeys, format_hotkey_display, get_action_for_event,
    get_action_for_special_mode, matches_hotkey, Hotkey, HotkeyAction, SpecialMode,
    ViewHotkeys,
};

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/freelancehub-admin";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub hotkeys: Option<ViewHotkeys>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkeys: Option<ViewHotkeys>,
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            theme_name: default_theme_name(),
            hotkeys: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place; it is
    /// created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectory {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::Read {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::Malformed {
                    path: file_path.clone(),
                    message: e.to_string(),
                })?;
            self.theme_name = data.theme_name;
            self.hotkeys = data.hotkeys;
            log::debug!("Loaded configuration from {}", file_path.display());
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::Encode(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Hotkeys from the file, or the defaults.
    ///
    pub fn hotkeys_or_default(&self) -> ViewHotkeys {
        self.hotkeys.clone().unwrap_or_default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::NoHomeDirectory.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("nested");
        let mut config = Config::new();
        config.load(custom.to_str()).unwrap();
        assert!(custom.exists());
        assert_eq!(config.theme_name, "midnight");
        assert!(config.hotkeys.is_none());
        assert!(!config.file_path().unwrap().exists());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        let mut config = Config::new();
        config.load(Some(path)).unwrap();
        config.theme_name = "forest".to_string();
        config.hotkeys = Some(default_hotkeys());
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(path)).unwrap();
        assert_eq!(reloaded.theme_name, "forest");
        assert_eq!(reloaded.hotkeys, Some(default_hotkeys()));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "hotkeys:\n  sidebar: {}\n").unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "midnight");
        let hotkeys = config.hotkeys_or_default();
        assert!(hotkeys.sidebar.is_empty());
        assert_eq!(hotkeys.panel, default_hotkeys().panel);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme_name: [unclosed").unwrap();
        let mut config = Config::new();
        assert!(config.load(dir.path().to_str()).is_err());
    }

    #[test]
    fn save_without_load_fails() {
        assert!(Config::new().save().is_err());
    }
}
