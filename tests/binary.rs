//! Process-level tests for the `ping-server` binary.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

mod common;

const BIN: &str = env!("CARGO_BIN_EXE_ping-server");

fn spawn(port: u16) -> Child {
    Command::new(BIN)
        .args(["--port", &port.to_string()])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("failed to spawn binary")
}

/// Read the startup line and return the announced port.
async fn read_port(child: &mut Child) -> u16 {
    let stdout = child.stdout.take().unwrap();
    let mut lines = BufReader::new(stdout).lines();

    let line = tokio::time::timeout(Duration::from_secs(5), lines.next_line())
        .await
        .expect("no startup line within 5s")
        .unwrap()
        .expect("stdout closed before startup line");

    let port = line
        .strip_prefix("Server running on port ")
        .unwrap_or_else(|| panic!("unexpected startup line: {:?}", line));
    port.trim().parse().unwrap()
}

#[tokio::test]
async fn test_binary_serves_ping_and_exits_on_kill() {
    let mut child = spawn(0);
    let port = read_port(&mut child).await;

    let res = common::client()
        .get(format!("http://127.0.0.1:{}/ping", port))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), r#"{"message":"pong"}"#);

    let res = common::client()
        .get(format!("http://127.0.0.1:{}/unknown", port))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    child.start_kill().unwrap();
    tokio::time::timeout(Duration::from_secs(2), child.wait())
        .await
        .expect("process did not exit within 2s")
        .unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_binary_exits_cleanly_on_sigterm() {
    let mut child = spawn(0);
    let _port = read_port(&mut child).await;

    let pid = child.id().unwrap();
    let status = Command::new("kill")
        .args(["-TERM", &pid.to_string()])
        .status()
        .await
        .unwrap();
    assert!(status.success());

    let status = tokio::time::timeout(Duration::from_secs(2), child.wait())
        .await
        .expect("process did not exit within 2s")
        .unwrap();
    assert!(status.success(), "exit status after SIGTERM: {:?}", status);
}

#[tokio::test]
async fn test_binary_fails_when_port_in_use() {
    let server = common::start_server().await;

    let mut child = spawn(server.port());
    let status = tokio::time::timeout(Duration::from_secs(5), child.wait())
        .await
        .expect("binary kept running on a taken port")
        .unwrap();
    assert!(!status.success());

    server.shutdown().await.unwrap();
}
