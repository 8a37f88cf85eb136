use thiserror::Error;

/// Generic retry message shown to end users when synthesis fails.
/// Internal detail never crosses the caller boundary.
pub const GENERIC_FAILURE_MESSAGE: &str = "تعذر توليد الرد، حاول مرة أخرى لاحقاً.";

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or empty conversation, or last turn not from the
    /// requester. The payload is already a localized, user-safe message.
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure while synthesizing content, e.g. a matched
    /// category with no template kit. Treated as a bug signal.
    #[error("generation failed: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }

    /// The message a caller may show to the end user.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Validation(message) => message.clone(),
            EngineError::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineError, GENERIC_FAILURE_MESSAGE};

    #[test]
    fn validation_message_passes_through() {
        let err = EngineError::Validation("المحادثة مطلوبة.".to_string());
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "المحادثة مطلوبة.");
    }

    #[test]
    fn internal_detail_is_hidden_from_users() {
        let err = EngineError::Internal("missing kit for Campaign".to_string());
        assert!(!err.is_validation());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.to_string().contains("missing kit"));
    }
}
