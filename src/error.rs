use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for userdir
#[derive(Error, Debug)]
pub enum UserDirError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("No user with id {0}")]
    UserNotFound(String),

    /// An action finished but left a message on the error banner
    #[error("{0}")]
    ActionFailed(String),
}

/// Errors raised while talking to the users API
///
/// Timeouts are classified by the client, which knows the configured limit.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    /// Non-success status. `message` is the `error` field of the body, if any.
    #[error("HTTP error: {status}{}", detail_suffix(.message))]
    Rejected { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" - {}", m))
        .unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::ConnectionRefused(err.to_string())
        } else if err.is_decode() {
            ApiError::ParseError(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Rejected {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}

impl ApiError {
    /// Collapse the error into the single line shown on the banner
    ///
    /// Only a rejected request whose body named an error surfaces that text;
    /// everything else becomes `fallback`.
    pub fn banner_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UserDirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_message_uses_server_error() {
        let error = ApiError::Rejected {
            status: 409,
            message: Some("email taken".to_string()),
        };
        assert_eq!(error.banner_message("Failed to save user"), "email taken");
    }

    #[test]
    fn test_banner_message_falls_back() {
        let without_body = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(without_body.banner_message("Failed to save user"), "Failed to save user");

        let blank = ApiError::Rejected {
            status: 400,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.banner_message("fallback"), "fallback");

        let refused = ApiError::ConnectionRefused("localhost:5000".to_string());
        assert_eq!(refused.banner_message("fallback"), "fallback");

        let parse = ApiError::ParseError("expected array".to_string());
        assert_eq!(parse.banner_message("fallback"), "fallback");
    }

    #[test]
    fn test_rejected_display() {
        let error = ApiError::Rejected {
            status: 404,
            message: Some("User not found".to_string()),
        };
        assert_eq!(error.to_string(), "HTTP error: 404 - User not found");

        let bare = ApiError::Rejected {
            status: 502,
            message: None,
        };
        assert_eq!(bare.to_string(), "HTTP error: 502");
    }

    #[test]
    fn test_user_dir_error_wraps_api_error() {
        let error: UserDirError = ApiError::Timeout(30).into();
        assert_eq!(error.to_string(), "API error: Request timeout after 30 seconds");
    }
}
