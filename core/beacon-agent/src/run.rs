//! The agent event loop.
//!
//! Reads one JSON event per line from stdin, feeds the engine, and shuts the
//! dispatcher down cleanly on EOF. A malformed line is logged and skipped;
//! nothing that happens on a single event may kill the stream, because the
//! editor glue on the other end treats this process as fire-and-forget.

use beacon_core::HeartbeatEngine;
use beacon_protocol::{parse_event, EventEnvelope, EventKind};
use std::io::{self, BufRead};
use tracing::{debug, info, warn};

use crate::cli_sender::CliSender;
use crate::config::AgentConfig;
use crate::error::Result;

pub fn run(config: AgentConfig) -> Result<()> {
    let editor = config.editor_info();
    info!(identity = %editor.identity(), "Initializing Beacon agent v{}", env!("CARGO_PKG_VERSION"));

    let sender = CliSender::from_config(&config.sender);
    let mut engine = HeartbeatEngine::new(&editor, sender);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "Event stream read failed; shutting down");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_event(&line) {
            Ok(envelope) => apply_event(&mut engine, &envelope),
            Err(err) => {
                debug!(error = %err, "Skipping malformed event");
            }
        }
    }

    info!("Event stream closed; draining dispatcher");
    engine.shutdown();
    Ok(())
}

fn apply_event(engine: &mut HeartbeatEngine, envelope: &EventEnvelope) {
    match envelope.event {
        EventKind::FileOpened => engine.on_file_opened(envelope.file.as_deref().unwrap_or("")),
        EventKind::FileEdited => engine.on_file_edited(envelope.file.as_deref().unwrap_or("")),
        EventKind::FileSaved => engine.on_file_saved(envelope.file.as_deref().unwrap_or("")),
        EventKind::WorkspaceOpened => {
            engine.on_workspace_opened(envelope.workspace.as_deref().unwrap_or(""));
        }
    }
}
