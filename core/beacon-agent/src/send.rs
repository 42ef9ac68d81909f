//! One-shot heartbeat delivery, bypassing the debouncer.

use beacon_core::{Heartbeat, HeartbeatSender};

use crate::cli_sender::CliSender;
use crate::config;
use crate::error::Result;

pub fn run(file: &str, write: bool, project: Option<String>) -> Result<()> {
    let config = config::load()?;
    let sender = CliSender::from_config(&config.sender);

    let heartbeat = Heartbeat {
        file: file.to_string(),
        is_write: write,
        plugin: config.editor_info().identity(),
        project,
    };

    sender.send(&heartbeat)?;
    println!("sent: {}", heartbeat);
    Ok(())
}
