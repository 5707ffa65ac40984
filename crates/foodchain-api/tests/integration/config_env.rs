//! Environment-variable configuration of the `foodchain` binary.
//!
//! The database path points at a directory so the server logs its
//! configuration and then exits before binding.

use std::process::{Command, Output};

fn run_with_env(vars: &[(&str, &str)]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_foodchain"));
    cmd.env("FOODCHAIN_DATABASE", dir.path())
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1");
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

#[test]
fn test_port_and_admin_gate_from_env() {
    let output = run_with_env(&[("PORT", "7321"), ("FOODCHAIN_GATE_ADMIN", "true")]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 7321"), "{stdout}");
    assert!(stdout.contains("gate_admin: true"), "{stdout}");
    assert!(!stdout.contains("Admin listing is public"), "{stdout}");
}

#[test]
fn test_admin_gate_env_false_keeps_admin_public() {
    let output = run_with_env(&[("PORT", "7322"), ("FOODCHAIN_GATE_ADMIN", "false")]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 7322"), "{stdout}");
    assert!(stdout.contains("gate_admin: false"), "{stdout}");
    assert!(stdout.contains("Admin listing is public"), "{stdout}");
}
