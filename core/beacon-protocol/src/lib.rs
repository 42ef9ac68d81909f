//! Editor event envelope for the Beacon agent.
//!
//! This crate is shared by the agent and the editor-side glue that feeds it,
//! to prevent schema drift. Events arrive as one JSON object per line on the
//! agent's stdin; the agent is the authority on validation, but frontends can
//! reuse the same types to construct valid events.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: u32 = 1;
pub const MAX_EVENT_BYTES: usize = 64 * 1024; // 64KB per line

/// Raw editor notifications the agent understands.
///
/// `FileOpened` and `FileEdited` are focus/edit signals subject to
/// coalescing; `FileSaved` marks an explicit write and always produces a
/// heartbeat; `WorkspaceOpened` only updates project context.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    FileOpened,
    FileEdited,
    FileSaved,
    WorkspaceOpened,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct EventEnvelope {
    pub event: EventKind,
    /// File the event refers to. Required for file events; blank values are
    /// tolerated and coalesced away downstream.
    #[serde(default)]
    pub file: Option<String>,
    /// Workspace path for `WorkspaceOpened` events.
    #[serde(default)]
    pub workspace: Option<String>,
    /// RFC3339 timestamp set by the frontend, informational only.
    #[serde(default)]
    pub recorded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Parses and validates one event line.
pub fn parse_event(line: &str) -> Result<EventEnvelope, ErrorInfo> {
    if line.len() > MAX_EVENT_BYTES {
        return Err(ErrorInfo::new(
            "event_too_large",
            format!("event line exceeds {} bytes", MAX_EVENT_BYTES),
        ));
    }

    let envelope: EventEnvelope = serde_json::from_str(line).map_err(|err| {
        ErrorInfo::new(
            "invalid_event",
            format!("event payload is invalid JSON: {}", err),
        )
    })?;
    envelope.validate()?;
    Ok(envelope)
}

impl EventEnvelope {
    pub fn validate(&self) -> Result<(), ErrorInfo> {
        if let Some(recorded_at) = &self.recorded_at {
            DateTime::parse_from_rfc3339(recorded_at).map_err(|err| {
                ErrorInfo::new(
                    "invalid_timestamp",
                    format!("recorded_at is not RFC3339: {}", err),
                )
            })?;
        }

        match self.event {
            EventKind::WorkspaceOpened => Ok(()),
            _ => require_present(&self.file, "file"),
        }
    }

    /// True when the event carries an explicit write.
    pub fn is_write(&self) -> bool {
        self.event == EventKind::FileSaved
    }
}

fn require_present(value: &Option<String>, field: &str) -> Result<(), ErrorInfo> {
    if value.is_some() {
        return Ok(());
    }
    Err(ErrorInfo::new(
        "missing_field",
        format!("{} is required", field),
    ))
}
