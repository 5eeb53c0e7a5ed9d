//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No log entry under the debug cursor
    #[error("No log entry selected")]
    NoLogEntry,

    /// Clipboard could not be opened or written
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// The config saver is no longer listening
    #[error("Config save request failed: saver stopped")]
    ConfigSaverStopped,

    /// Theme name not among the built-in themes
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::NoLogEntry;
        assert!(error.to_string().contains("No log entry"));

        let error = StateError::Clipboard("no display".to_string());
        assert!(error.to_string().contains("Clipboard unavailable"));
        assert!(error.to_string().contains("no display"));

        let error = StateError::ConfigSaverStopped;
        assert!(error.to_string().contains("saver stopped"));

        let error = StateError::UnknownTheme("neon".to_string());
        assert!(error.to_string().contains("neon"));
    }
}
