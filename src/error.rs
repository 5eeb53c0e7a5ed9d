//! Top-level error type. Module errors convert into it with `?`; the binary
//! and the app loop wrap it in `anyhow`.

pub use crate::config::ConfigError;
pub use crate::marketplace::ValidationError;
pub use crate::state::StateError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Settings input that failed validation.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_errors_convert() {
        let error: AppError = ConfigError::NotLoaded.into();
        assert!(matches!(error, AppError::Config(ConfigError::NotLoaded)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Config file has not been loaded yet"
        );

        let error: AppError = StateError::NoLogEntry.into();
        assert!(matches!(error, AppError::State(_)));
        assert!(error.to_string().starts_with("State error: "));
    }

    #[test]
    fn validation_errors_keep_the_input() {
        let error: AppError = ValidationError::InvalidEmail("admin@".to_string()).into();
        assert!(matches!(error, AppError::Validation(_)));
        assert!(error.to_string().contains("admin@"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: AppError = io.into();
        assert_eq!(error.to_string(), "I/O error: gone");
    }
}
