//! Heartbeat delivery via an external command.
//!
//! Each accepted heartbeat becomes one invocation of the configured sender
//! command (wakatime-cli by default). The wire format behind that command is
//! opaque here; exit status is the only signal the agent reads.

use beacon_core::{Heartbeat, HeartbeatSender, SendError};
use std::process::{Command, Stdio};

use crate::config::SenderConfig;

pub struct CliSender {
    command: String,
    base_args: Vec<String>,
    api_key: Option<String>,
    proxy: Option<String>,
}

impl CliSender {
    pub fn from_config(config: &SenderConfig) -> Self {
        Self {
            command: config.command.clone(),
            base_args: config.args.clone(),
            api_key: config.api_key.clone(),
            proxy: config.proxy.clone(),
        }
    }

    fn build_args(&self, heartbeat: &Heartbeat) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.push("--file".to_string());
        args.push(heartbeat.file.clone());
        args.push("--plugin".to_string());
        args.push(heartbeat.plugin.clone());
        if heartbeat.is_write {
            args.push("--write".to_string());
        }
        if let Some(project) = &heartbeat.project {
            args.push("--project".to_string());
            args.push(project.clone());
        }
        if let Some(key) = &self.api_key {
            args.push("--key".to_string());
            args.push(key.clone());
        }
        if let Some(proxy) = &self.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }
        args
    }
}

impl HeartbeatSender for CliSender {
    fn send(&self, heartbeat: &Heartbeat) -> Result<(), SendError> {
        let output = Command::new(&self.command)
            .args(self.build_args(heartbeat))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|err| SendError::Spawn {
                command: self.command.clone(),
                source: err,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SendError::CommandFailed {
                command: self.command.clone(),
                details: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        Ok(())
    }
}
