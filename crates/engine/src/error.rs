use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure taxonomy shared by all engine implementations.
///
/// Launch failures are fatal; everything else fails the specific operation
/// and leaves retry decisions to the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("navigation failed: {url}")]
    Navigation {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("timeout after {ms}ms waiting for: {what}")]
    Timeout { ms: u64, what: String },

    #[error("script evaluation failed: {0}")]
    Evaluation(String),

    #[error("screenshot failed: {path}")]
    Screenshot {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("engine protocol error: {0}")]
    Protocol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_includes_window_and_condition() {
        let err = EngineError::Timeout {
            ms: 5000,
            what: "#login".into(),
        };
        assert_eq!(err.to_string(), "timeout after 5000ms waiting for: #login");
    }

    #[test]
    fn element_not_found_names_selector() {
        let err = EngineError::ElementNotFound {
            selector: "button.submit".into(),
        };
        assert!(err.to_string().contains("button.submit"));
    }
}
