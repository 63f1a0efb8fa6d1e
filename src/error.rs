use thiserror::Error;

/// Unified error type for next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Invalid semver: {0}")]
    InvalidSemver(String),

    #[error("Invalid bump: {0}")]
    InvalidBump(String),

    #[error("Unsupported commit shape: {0}")]
    Commit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create an invalid-semver error for the offending text
    pub fn invalid_semver(text: impl Into<String>) -> Self {
        NextVersionError::InvalidSemver(text.into())
    }

    /// Create an invalid-bump error for the offending text
    pub fn invalid_bump(text: impl Into<String>) -> Self {
        NextVersionError::InvalidBump(text.into())
    }

    /// Create a commit-shape error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        NextVersionError::Commit(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NextVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_invalid_semver_display() {
        let err = NextVersionError::invalid_semver("1.2");
        assert_eq!(err.to_string(), "Invalid semver: 1.2");
    }

    #[test]
    fn test_invalid_bump_display() {
        let err = NextVersionError::invalid_bump("mega");
        assert_eq!(err.to_string(), "Invalid bump: mega");
    }

    #[test]
    fn test_commit_shape_display() {
        let err = NextVersionError::commit("array");
        assert_eq!(err.to_string(), "Unsupported commit shape: array");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NextVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: NextVersionError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (NextVersionError::invalid_semver("x"), "Invalid semver"),
            (NextVersionError::invalid_bump("x"), "Invalid bump"),
            (NextVersionError::commit("x"), "Unsupported commit shape"),
            (NextVersionError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            NextVersionError::invalid_semver(""),
            NextVersionError::invalid_bump(""),
            NextVersionError::commit(""),
            NextVersionError::config(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with \"double quotes\"",
            "message with \\ backslash",
        ];

        for msg in special_chars {
            let err = NextVersionError::invalid_semver(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Invalid semver"));
        }
    }
}
