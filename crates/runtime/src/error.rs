//! Unified error type surfaced by the runtime API.
//!
//! Wraps engine validation failures, replay persistence problems and worker
//! coordination so clients can bubble them up with consistent context.

use clash_core::{BattleError, ErrorSeverity};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("replay serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error("replay file I/O failed")]
    Io(#[from] std::io::Error),

    #[error("unsupported replay format version {found} (expected {expected})")]
    UnsupportedReplayVersion { found: u32, expected: u32 },

    #[error("replay diverged: expected log digest {expected}, got {actual}")]
    ReplayMismatch { expected: String, actual: String },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Battle(err) => err.severity(),
            Self::WorkerJoin(_) | Self::ReplayMismatch { .. } => ErrorSeverity::Internal,
            Self::Serialization(_) | Self::Io(_) | Self::UnsupportedReplayVersion { .. } => {
                ErrorSeverity::Validation
            }
        }
    }
}
