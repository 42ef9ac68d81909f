//! Startup check: surfaces configuration and sender problems once, before
//! the agent is wired into an editor.

use std::process::{Command, Stdio};

use crate::config;
use crate::error::{AgentError, Result};

pub fn run() -> Result<()> {
    let path = config::config_path()?;
    let config = config::load()?;

    if path.exists() {
        println!("config: {}", path.display());
    } else {
        println!("config: {} (not found, using defaults)", path.display());
    }
    println!(
        "editor: {} ({})",
        config.editor.name,
        config.editor_info().identity()
    );
    println!(
        "api key: {}",
        if config.sender.api_key.is_some() {
            "set"
        } else {
            "not set"
        }
    );

    verify_sender(&config.sender.command)?;
    println!("sender: {} (ok)", config.sender.command);
    Ok(())
}

fn verify_sender(command: &str) -> Result<()> {
    let status = Command::new(command)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(AgentError::SenderUnavailable {
            command: command.to_string(),
            details: format!("--version exited with {}", status),
        }),
        Err(err) => Err(AgentError::SenderUnavailable {
            command: command.to_string(),
            details: err.to_string(),
        }),
    }
}
