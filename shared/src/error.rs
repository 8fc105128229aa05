use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

/// Everything that can end a submission without a rendered report.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum ViewerError {
    #[error("Please enter a SteamID")]
    MissingSteamId,

    /// Non-2xx response carrying a structured `{ "error": ... }` body.
    #[error("{0}")]
    Api(String),

    /// Non-2xx response whose body could not be read as an error body.
    #[error("Failed to fetch data.")]
    ApiUnstructured,

    /// No response at all; the detail is only logged.
    #[error("Error fetching data.")]
    Transport(String),

    #[error("Received malformed data: {0}")]
    MalformedReport(String),
}

impl From<ValidationErrors> for ViewerError {
    fn from(errors: ValidationErrors) -> Self {
        Self::MalformedReport(errors.to_string())
    }
}

impl From<JsonError> for ViewerError {
    fn from(error: JsonError) -> Self {
        Self::MalformedReport(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ViewerError::MissingSteamId.to_string(), "Please enter a SteamID");
        assert_eq!(ViewerError::Api("Private profile".to_string()).to_string(), "Private profile");
        assert_eq!(ViewerError::ApiUnstructured.to_string(), "Failed to fetch data.");
        assert_eq!(
            ViewerError::Transport("connection refused".to_string()).to_string(),
            "Error fetching data."
        );
    }

    #[test]
    fn test_json_error_becomes_malformed_report() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let viewer_error = ViewerError::from(err);
        assert!(matches!(viewer_error, ViewerError::MalformedReport(_)));
        assert!(viewer_error.to_string().starts_with("Received malformed data: "));
    }
}
