//! Error translation at the command boundary.
//!
//! The client layer raises structured [`ApiError`] kinds; this module
//! maps them to terminal-appropriate messages with a documentation link
//! and a process exit code.

use quant_cloud_api::ApiError;

/// Documentation root linked from translated errors.
const DOCS_URL: &str = "https://www.quantconnect.com/docs/v2/cloud-platform";

/// A user-facing error: human message plus a documentation link.
#[derive(Debug)]
pub struct MoreInfoError {
    /// Message shown to the user.
    pub message: String,

    /// Where to read more.
    pub link: String,
}

impl MoreInfoError {
    /// Translates a client-layer error into a user-facing one. The
    /// structured kind and service message are preserved verbatim so the
    /// translation is lossless.
    pub fn from_api(err: &ApiError) -> Self {
        let (message, topic) = match err {
            ApiError::Authentication(_) => (
                format!("{err}\nCheck your user id and API token."),
                "organizations/getting-started",
            ),
            ApiError::NotFound { .. } => (err.to_string(), "projects/getting-started"),
            ApiError::Network(_) | ApiError::Timeout(_) => (
                format!("{err}\nThe platform could not be reached."),
                "organizations/getting-started",
            ),
            _ => (err.to_string(), "projects/getting-started"),
        };

        Self {
            message,
            link: format!("{DOCS_URL}/{topic}"),
        }
    }
}

impl std::fmt::Display for MoreInfoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\nMore info: {}", self.message, self.link)
    }
}

impl std::error::Error for MoreInfoError {}

/// Maps an error kind to the process exit code.
#[must_use]
pub fn exit_code_for(err: &ApiError) -> i32 {
    match err {
        ApiError::Authentication(_) => 1,
        ApiError::NotFound { .. } => 2,
        ApiError::Validation(_) | ApiError::Serialization(_) => 3,
        ApiError::Network(_) | ApiError::Timeout(_) | ApiError::Api { .. } => 4,
        ApiError::Configuration(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_kind() {
        assert_eq!(exit_code_for(&ApiError::Authentication("bad".into())), 1);
        assert_eq!(exit_code_for(&ApiError::not_found("project", "42")), 2);
        assert_eq!(exit_code_for(&ApiError::Validation("dup".into())), 3);
        assert_eq!(exit_code_for(&ApiError::Network("refused".into())), 4);
    }

    #[test]
    fn test_translation_preserves_message_and_adds_link() {
        let err = ApiError::not_found("project", "42");
        let translated = MoreInfoError::from_api(&err);
        assert!(translated.message.contains("project not found: 42"));
        assert!(translated.link.starts_with("https://"));
        assert!(translated.to_string().contains("More info:"));
    }

    #[test]
    fn test_authentication_translation_adds_hint() {
        let err = ApiError::Authentication("hash mismatch".into());
        let translated = MoreInfoError::from_api(&err);
        assert!(translated.message.contains("Check your user id"));
    }
}
