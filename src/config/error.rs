use std::path::PathBuf;

/// Failures while reading or writing `config.yml`.
///
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file has not been loaded yet")]
    NotLoaded,

    #[error("Could not locate the home directory")]
    NoHomeDirectory,

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid YAML for this config shape.
    #[error("Malformed config in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Could not encode config: {0}")]
    Encode(String),

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create config directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn messages_name_the_file() {
        let error = ConfigError::Malformed {
            path: PathBuf::from("/tmp/fh/config.yml"),
            message: "theme_name: expected a string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed config in /tmp/fh/config.yml: theme_name: expected a string"
        );

        let error = ConfigError::Write {
            path: PathBuf::from("/tmp/fh/config.yml"),
            source: Error::new(ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(error.to_string().starts_with("Could not write /tmp/fh/config.yml"));
        assert!(error.to_string().ends_with("read-only"));
    }

    #[test]
    fn not_loaded_and_no_home() {
        assert_eq!(
            ConfigError::NotLoaded.to_string(),
            "Config file has not been loaded yet"
        );
        assert!(ConfigError::NoHomeDirectory.to_string().contains("home directory"));
    }
}
