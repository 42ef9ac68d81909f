//! HeartbeatEngine - the main entry point for Beacon frontends.
//!
//! Ties one [`ActivityTracker`] to one [`HeartbeatDispatcher`] and exposes
//! the editor-facing surface: file opened/edited/saved and workspace opened.
//! Every method returns immediately; delivery failures surface in the log,
//! never to the caller. One engine per editor session, torn down with
//! [`HeartbeatEngine::shutdown`].
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use beacon_core::{EditorInfo, HeartbeatEngine};
//!
//! let editor = EditorInfo::new("monodevelop", "8.1", "beacon-monodevelop", "0.1.0");
//! let engine = HeartbeatEngine::new(&editor, sender);
//! engine.on_workspace_opened("/repo/MyProj.sln");
//! engine.on_file_saved("/repo/src/main.rs");
//! engine.shutdown();
//! ```

use crate::clock::Clock;
use crate::dispatch::HeartbeatDispatcher;
use crate::sender::HeartbeatSender;
use crate::tracker::{ActivityTracker, Decision};
use crate::types::EditorInfo;

pub struct HeartbeatEngine {
    tracker: ActivityTracker,
    dispatcher: HeartbeatDispatcher,
}

impl HeartbeatEngine {
    pub fn new(editor: &EditorInfo, sender: impl HeartbeatSender + Send + 'static) -> Self {
        Self {
            tracker: ActivityTracker::new(editor),
            dispatcher: HeartbeatDispatcher::spawn(sender),
        }
    }

    /// Engine with an injected clock, for deterministic tests.
    pub fn with_clock(
        editor: &EditorInfo,
        sender: impl HeartbeatSender + Send + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            tracker: ActivityTracker::with_clock(editor, clock),
            dispatcher: HeartbeatDispatcher::spawn(sender),
        }
    }

    /// A file gained focus or was opened.
    pub fn on_file_opened(&mut self, file: &str) {
        self.record(file, false);
    }

    /// A file was edited without an explicit save.
    pub fn on_file_edited(&mut self, file: &str) {
        self.record(file, false);
    }

    /// A file was explicitly saved. Never coalesced.
    pub fn on_file_saved(&mut self, file: &str) {
        self.record(file, true);
    }

    /// The editor opened a workspace (solution, project container).
    pub fn on_workspace_opened(&mut self, path: &str) {
        self.tracker.on_workspace_opened(path);
    }

    pub fn project_name(&self) -> Option<String> {
        self.tracker.project_name()
    }

    /// Drains any queued delivery and stops the dispatch worker.
    pub fn shutdown(self) {
        self.dispatcher.shutdown();
    }

    fn record(&mut self, file: &str, is_write: bool) {
        if let Decision::Emit(heartbeat) = self.tracker.record_activity(file, is_write) {
            self.dispatcher.dispatch(heartbeat);
        }
    }
}
