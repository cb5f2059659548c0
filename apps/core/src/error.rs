use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    /// Represents data validation errors (e.g., empty prompt text).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pluggable capability (NER, sentiment, generative model) ran and failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// A pluggable capability was never configured.
    #[error("Capability unavailable: {0}")]
    Unavailable(String),

    /// Represents transport-level failures talking to an external service.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// A stored prompt could not be found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Provider(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::Validation("text must not be empty".to_string()).to_string(),
            "Validation error: text must not be empty"
        );
        assert_eq!(
            AppError::Unavailable("sentiment model".to_string()).to_string(),
            "Capability unavailable: sentiment model"
        );
    }

    #[test]
    fn test_url_error_is_config() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
