//! Error types for Folio

use thiserror::Error;

/// Problems with the rotating-word configuration attached to the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotatorError {
    /// A `data-*` attribute the typewriter needs is absent
    #[error("Missing attribute: {0}")]
    MissingAttribute(&'static str),

    /// Attribute body is not a JSON array of strings
    #[error("Malformed {attribute}: {reason}")]
    Malformed {
        attribute: &'static str,
        reason: String,
    },

    /// Nothing left to rotate through after zipping words with colors
    #[error("Word list is empty")]
    EmptyWordList,
}

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Page configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Page configuration parsed but holds values the behaviors cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Rotating-word element is unusable
    #[error("Rotator error: {0}")]
    Rotator(#[from] RotatorError),

    /// Date string is not `YYYY-MM-DD`
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::InvalidConfig("reveal_threshold out of range".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: reveal_threshold out of range"
        );
    }

    #[test]
    fn test_error_from_rotator() {
        let err: FolioError = RotatorError::EmptyWordList.into();
        assert!(matches!(err, FolioError::Rotator(RotatorError::EmptyWordList)));
        assert_eq!(err.to_string(), "Rotator error: Word list is empty");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
