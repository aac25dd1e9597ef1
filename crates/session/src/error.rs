use bp_engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A page operation was called before `launch`.
    #[error("session not launched: call launch() first")]
    NotLaunched,

    /// `launch` was called on an already active session.
    #[error("session already launched")]
    AlreadyLaunched,

    /// A page operation was called after `close`.
    #[error("session closed")]
    Closed,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("page summary decode failed: {0}")]
    Summary(#[from] serde_json::Error),
}
