//! Activity tracking and heartbeat coalescing.
//!
//! The tracker turns a noisy stream of "file touched" notifications into the
//! occasional heartbeat worth reporting. Policy, first match wins:
//!
//! ```text
//! blank file                                        → suppress
//! non-write, same file, last accept < 60s ago       → suppress
//! anything else (every write included)              → emit
//! ```
//!
//! Writes are never debounced: a save is rare and user-intentional, so every
//! one is reported. Tracker state updates on the calling thread at accept
//! time; delivery latency never delays the next debounce decision.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::types::{EditorInfo, Heartbeat};

/// Interval during which repeated non-write activity on the same file is
/// coalesced into the first heartbeat.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_secs(60);

/// Outcome of a `record_activity` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Event accepted; the heartbeat is ready for dispatch.
    Emit(Heartbeat),
    /// Event coalesced away. Not an error.
    Suppress,
}

/// Per-session activity state: the debouncer plus the workspace context.
///
/// Owned by one editor session and mutated only through its own methods.
/// Not internally locked; callers invoking it from multiple threads must add
/// their own exclusion.
pub struct ActivityTracker {
    clock: Box<dyn Clock>,
    plugin: String,
    last_file: Option<String>,
    last_heartbeat_at: Option<Instant>,
    workspace_path: Option<PathBuf>,
}

impl ActivityTracker {
    pub fn new(editor: &EditorInfo) -> Self {
        Self::with_clock(editor, SystemClock)
    }

    pub fn with_clock(editor: &EditorInfo, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            plugin: editor.identity(),
            last_file: None,
            last_heartbeat_at: None,
            workspace_path: None,
        }
    }

    /// Applies the coalescing policy to one raw activity event.
    ///
    /// Never panics and never returns an error: malformed input is treated
    /// as [`Decision::Suppress`]. On emit, `last_file` and the heartbeat
    /// timestamp are updated unconditionally before returning.
    pub fn record_activity(&mut self, file: &str, is_write: bool) -> Decision {
        if file.trim().is_empty() {
            tracing::debug!("Skipping activity event (blank file)");
            return Decision::Suppress;
        }

        if !is_write && self.last_file.as_deref() == Some(file) && !self.window_elapsed() {
            tracing::debug!(file, "Coalesced repeat activity within debounce window");
            return Decision::Suppress;
        }

        let heartbeat = Heartbeat {
            file: file.to_string(),
            is_write,
            plugin: self.plugin.clone(),
            project: self.project_name(),
        };

        self.last_file = Some(file.to_string());
        self.last_heartbeat_at = Some(self.clock.now());

        Decision::Emit(heartbeat)
    }

    /// Records the workspace (solution/project container) the editor opened.
    ///
    /// A blank path is a no-op: the last known project is kept across
    /// transient empty signals, never cleared.
    pub fn on_workspace_opened(&mut self, path: &str) {
        if path.trim().is_empty() {
            return;
        }
        self.workspace_path = Some(PathBuf::from(path));
    }

    /// Project name derived from the last known workspace path, or `None`
    /// if no workspace has ever been reported.
    pub fn project_name(&self) -> Option<String> {
        self.workspace_path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
    }

    fn window_elapsed(&self) -> bool {
        match self.last_heartbeat_at {
            Some(at) => self.clock.now().duration_since(at) >= DEBOUNCE_WINDOW,
            None => true,
        }
    }
}
