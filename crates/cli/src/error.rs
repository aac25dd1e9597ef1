use bp::SessionError;
use bp_engine::EngineError;
use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Command failed but the failure envelope has already been printed.
    /// Signals exit code 1 without additional output.
    #[error("")]
    OutputAlreadyPrinted,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// When true, the caller should exit with code 1 without printing more.
    pub fn is_output_already_printed(&self) -> bool {
        matches!(self, CliError::OutputAlreadyPrinted)
    }

    /// Converts this error to a stable-coded [`CommandError`] for the
    /// output envelope.
    pub fn to_command_error(&self) -> CommandError {
        let code = match self {
            CliError::OutputAlreadyPrinted => ErrorCode::InternalError,
            CliError::Session(err) => session_error_code(err),
            CliError::Io(_) => ErrorCode::IoError,
            CliError::Json(_) => ErrorCode::InternalError,
        };
        CommandError {
            code,
            message: self.to_string(),
        }
    }
}

fn session_error_code(err: &SessionError) -> ErrorCode {
    match err {
        SessionError::NotLaunched | SessionError::AlreadyLaunched | SessionError::Closed => {
            ErrorCode::SessionError
        }
        SessionError::Engine(engine) => match engine {
            EngineError::Launch(_) => ErrorCode::BrowserLaunchFailed,
            EngineError::Navigation { .. } => ErrorCode::NavigationFailed,
            EngineError::ElementNotFound { .. } => ErrorCode::SelectorNotFound,
            EngineError::Timeout { .. } => ErrorCode::Timeout,
            EngineError::Evaluation(_) => ErrorCode::JsEvalFailed,
            EngineError::Screenshot { .. } => ErrorCode::ScreenshotFailed,
            EngineError::Protocol(_) => ErrorCode::InternalError,
        },
        SessionError::Io(_) => ErrorCode::IoError,
        SessionError::Summary(_) => ErrorCode::InternalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_failures_map_to_selector_not_found() {
        let err = CliError::from(SessionError::from(EngineError::ElementNotFound {
            selector: "#missing".into(),
        }));
        let cmd_err = err.to_command_error();
        assert_eq!(cmd_err.code, ErrorCode::SelectorNotFound);
        assert!(cmd_err.message.contains("#missing"));
    }

    #[test]
    fn lifecycle_misuse_maps_to_session_error() {
        let err = CliError::from(SessionError::NotLaunched);
        assert_eq!(err.to_command_error().code, ErrorCode::SessionError);
    }

    #[test]
    fn launch_failures_map_to_browser_launch_failed() {
        let err = CliError::from(SessionError::from(EngineError::Launch(
            "no chrome".into(),
        )));
        assert_eq!(err.to_command_error().code, ErrorCode::BrowserLaunchFailed);
    }
}
