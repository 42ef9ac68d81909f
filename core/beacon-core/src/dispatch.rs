//! Heartbeat delivery pipeline.
//!
//! One dedicated worker thread owns the sender and drains a single-slot
//! channel. That gives every guarantee the delivery path needs with no
//! locking: at most one send in flight, sends happen in dispatch order with
//! no overlap, and the producing thread never waits on transport latency
//! (it can only block when the worker is mid-send *and* the slot already
//! holds the next record).
//!
//! Per-record lifecycle: `Created → Queued → Sending → {Delivered | Dropped}`.
//! There is no retry and no queue growth; a failed send is logged with the
//! file context and the record is dropped.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::sender::HeartbeatSender;
use crate::types::Heartbeat;

pub struct HeartbeatDispatcher {
    tx: Option<SyncSender<Heartbeat>>,
    worker: Option<JoinHandle<()>>,
}

impl HeartbeatDispatcher {
    /// Starts the delivery worker that owns `sender`.
    pub fn spawn(sender: impl HeartbeatSender + Send + 'static) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        let worker = thread::Builder::new()
            .name("beacon-dispatch".to_string())
            .spawn(move || delivery_loop(rx, sender));

        match worker {
            Ok(handle) => Self {
                tx: Some(tx),
                worker: Some(handle),
            },
            Err(err) => {
                // Without a worker every dispatch becomes a logged drop;
                // the editor side keeps running either way.
                tracing::error!(error = %err, "Failed to start dispatch worker");
                Self {
                    tx: None,
                    worker: None,
                }
            }
        }
    }

    /// Queues one heartbeat for delivery. Fire-and-forget: failures surface
    /// in the log, never here.
    pub fn dispatch(&self, heartbeat: Heartbeat) {
        let Some(tx) = &self.tx else {
            tracing::warn!(heartbeat = %heartbeat, "No dispatch worker; heartbeat dropped");
            return;
        };
        if tx.send(heartbeat).is_err() {
            tracing::warn!("Dispatch worker exited; heartbeat dropped");
        }
    }

    /// Stops the worker after it drains anything already queued.
    pub fn shutdown(mut self) {
        self.join_worker();
    }

    fn join_worker(&mut self) {
        // Closing the channel ends the delivery loop once the slot is empty.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Dispatch worker panicked");
            }
        }
    }
}

impl Drop for HeartbeatDispatcher {
    fn drop(&mut self) {
        self.join_worker();
    }
}

fn delivery_loop(rx: Receiver<Heartbeat>, sender: impl HeartbeatSender) {
    while let Ok(heartbeat) = rx.recv() {
        match sender.send(&heartbeat) {
            Ok(()) => {
                tracing::debug!(heartbeat = %heartbeat, "Heartbeat delivered");
            }
            Err(err) => {
                tracing::error!(
                    heartbeat = %heartbeat,
                    error = %err,
                    "Heartbeat delivery failed; record dropped"
                );
            }
        }
    }
}
