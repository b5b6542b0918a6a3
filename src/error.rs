//! Error types for configuration handling.

use thiserror::Error;

/// Errors surfaced while assembling the extension from configuration text.
///
/// The hook operations themselves are total: every page text and every member
/// descriptor is accepted, so nothing in the event path returns an error.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Configuration text could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration parsed but contains malformed entries.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScrubError::ConfigError("bad yaml".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad yaml");

        let err = ScrubError::ValidationError("empty module name".to_string());
        assert_eq!(err.to_string(), "Validation error: empty module name");
    }
}
