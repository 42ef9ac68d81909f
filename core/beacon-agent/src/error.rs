//! Agent-side error types.

use std::path::PathBuf;

/// Errors surfaced by the agent at startup or during checks.
///
/// Delivery failures are not represented here: once the engine is running,
/// a failed send is logged and dropped, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Cannot determine home directory")]
    HomeDirUnavailable,

    #[error("Failed to read config: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    #[error("Sender command not runnable: {command}: {details}")]
    SenderUnavailable { command: String, details: String },

    #[error("Heartbeat delivery failed: {0}")]
    Send(#[from] beacon_core::SendError),
}

pub type Result<T> = std::result::Result<T, AgentError>;
