//! Outbound sender seam.
//!
//! The core never touches the telemetry transport itself; it hands each
//! accepted heartbeat to a [`HeartbeatSender`] and only cares about
//! success or failure. The agent binary plugs in a sender that shells out
//! to an external delivery command.

use crate::types::Heartbeat;

/// Delivers one heartbeat to the telemetry backend.
///
/// Implementations may block; the dispatcher always calls this from its
/// dedicated worker thread, never from the thread that produced the record.
pub trait HeartbeatSender {
    fn send(&self, heartbeat: &Heartbeat) -> Result<(), SendError>;
}

/// All the ways a delivery attempt can fail.
///
/// A failed send is logged and the record dropped: heartbeats are
/// best-effort, at-most-once. None of these errors ever reach the editor
/// event callbacks.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("Failed to spawn sender command: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Sender command failed: {command}: {details}")]
    CommandFailed { command: String, details: String },

    #[error("Transport error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}
