//! # beacon-core
//!
//! Core library for Beacon, providing the activity-heartbeat coalescing and
//! dispatch logic shared by all frontends (editor plugins, the stdin agent).
//!
//! ## Design Principles
//!
//! - **Synchronous API**: `record_activity` and `on_workspace_opened` never
//!   block; they are safe to call from an editor's event loop. Only the
//!   dispatcher's delivery worker touches the external sender.
//! - **Not thread-safe**: callers that invoke the tracker from multiple
//!   threads provide their own synchronization (`Mutex`, `RwLock`).
//! - **Graceful degradation**: an unknown project yields a heartbeat with no
//!   project, never an error; a failed delivery is logged and dropped.
//! - **No hidden clocks**: time comes through the [`Clock`] trait so the
//!   debounce window is testable and immune to wall-clock jumps.

// Public modules
pub mod clock;
pub mod dispatch;
pub mod engine;
pub mod sender;
pub mod tracker;
pub mod types;

// Re-export commonly used items at crate root
pub use clock::{Clock, SystemClock};
pub use dispatch::HeartbeatDispatcher;
pub use engine::HeartbeatEngine;
pub use sender::{HeartbeatSender, SendError};
pub use tracker::{ActivityTracker, Decision, DEBOUNCE_WINDOW};
pub use types::{EditorInfo, Heartbeat};
