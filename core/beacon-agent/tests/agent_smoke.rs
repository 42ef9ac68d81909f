//! End-to-end smoke test: spawn the real agent binary, feed it editor events
//! on stdin, and observe the sender invocations through a capture script.
#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

struct AgentGuard {
    child: Child,
}

impl Drop for AgentGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Writes a fake sender script that appends its arguments to `capture`.
fn write_sender_script(dir: &Path, capture: &Path) -> PathBuf {
    let script_path = dir.join("fake-sender.sh");
    let script = format!("#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then exit 0; fi\necho \"$@\" >> \"{}\"\n", capture.display());
    fs::write(&script_path, script).expect("Failed to write sender script");
    let mut perms = fs::metadata(&script_path)
        .expect("Failed to stat sender script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).expect("Failed to chmod sender script");
    script_path
}

fn write_config(dir: &Path, sender_command: &Path) -> PathBuf {
    let config_path = dir.join("config.toml");
    let config = format!(
        "[sender]\ncommand = \"{}\"\n\n[editor]\nname = \"testeditor\"\nversion = \"1.0\"\n",
        sender_command.display()
    );
    fs::write(&config_path, config).expect("Failed to write config");
    config_path
}

fn spawn_agent(home: &Path, config: &Path) -> Child {
    Command::new(env!("CARGO_BIN_EXE_beacon-agent"))
        .arg("run")
        .env("HOME", home)
        .env("BEACON_CONFIG", config)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn beacon-agent")
}

fn capture_lines(capture: &Path) -> Vec<String> {
    match fs::read_to_string(capture) {
        Ok(content) => content.lines().map(|line| line.to_string()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn agent_debounces_and_delivers_in_order() {
    let home = tempfile::tempdir().expect("Failed to create temp HOME");
    let capture = home.path().join("capture.txt");
    let script = write_sender_script(home.path(), &capture);
    let config = write_config(home.path(), &script);

    let mut child = spawn_agent(home.path(), &config);
    {
        let stdin = child.stdin.as_mut().expect("Agent stdin missing");
        writeln!(
            stdin,
            r#"{{"event":"workspace_opened","workspace":"/repo/MyProj.sln"}}"#
        )
        .expect("write event");
        writeln!(stdin, r#"{{"event":"file_opened","file":"a.txt"}}"#).expect("write event");
        // Same file again inside the debounce window: coalesced.
        writeln!(stdin, r#"{{"event":"file_edited","file":"a.txt"}}"#).expect("write event");
        // Malformed line must not kill the stream.
        writeln!(stdin, "not json at all").expect("write event");
        writeln!(stdin, r#"{{"event":"file_saved","file":"a.txt"}}"#).expect("write event");
    }
    // Closing stdin ends the run; the agent drains pending deliveries first.
    drop(child.stdin.take());
    let mut guard = AgentGuard { child };
    let status = guard.child.wait().expect("Failed to wait for agent");
    assert!(status.success(), "agent exited with {}", status);

    let lines = capture_lines(&capture);
    assert_eq!(lines.len(), 2, "expected 2 deliveries, got: {:?}", lines);

    assert!(lines[0].contains("--file a.txt"));
    assert!(lines[0].contains("--plugin testeditor/1.0 beacon-agent/"));
    assert!(lines[0].contains("--project MyProj"));
    assert!(!lines[0].contains("--write"));

    assert!(lines[1].contains("--file a.txt"));
    assert!(lines[1].contains("--write"));
}

#[test]
fn failing_sender_does_not_break_the_agent() {
    let home = tempfile::tempdir().expect("Failed to create temp HOME");
    let capture = home.path().join("capture.txt");

    // Sender that fails for b.txt and records everything else.
    let script_path = home.path().join("flaky-sender.sh");
    let script = format!(
        "#!/bin/sh\ncase \"$*\" in *b.txt*) exit 1;; esac\necho \"$@\" >> \"{}\"\n",
        capture.display()
    );
    fs::write(&script_path, script).expect("Failed to write sender script");
    let mut perms = fs::metadata(&script_path)
        .expect("Failed to stat sender script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).expect("Failed to chmod sender script");

    let config = write_config(home.path(), &script_path);
    let mut child = spawn_agent(home.path(), &config);
    {
        let stdin = child.stdin.as_mut().expect("Agent stdin missing");
        writeln!(stdin, r#"{{"event":"file_saved","file":"a.txt"}}"#).expect("write event");
        writeln!(stdin, r#"{{"event":"file_saved","file":"b.txt"}}"#).expect("write event");
        writeln!(stdin, r#"{{"event":"file_saved","file":"c.txt"}}"#).expect("write event");
    }
    drop(child.stdin.take());
    let mut guard = AgentGuard { child };
    let status = guard.child.wait().expect("Failed to wait for agent");
    assert!(status.success(), "agent exited with {}", status);

    let lines = capture_lines(&capture);
    assert_eq!(lines.len(), 2, "expected 2 deliveries, got: {:?}", lines);
    assert!(lines[0].contains("a.txt"));
    assert!(lines[1].contains("c.txt"));
}

#[test]
fn check_reports_missing_sender() {
    let home = tempfile::tempdir().expect("Failed to create temp HOME");
    let config_path = home.path().join("config.toml");
    fs::write(
        &config_path,
        "[sender]\ncommand = \"/nonexistent/beacon-sender\"\n",
    )
    .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_beacon-agent"))
        .arg("check")
        .env("HOME", home.path())
        .env("BEACON_CONFIG", &config_path)
        .output()
        .expect("Failed to run check");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sender command not runnable"), "{}", stderr);
}
