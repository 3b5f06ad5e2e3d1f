//! Shared integration-test helpers for running the `aadarsh-site` binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Runs the binary with the given arguments and waits for it to exit.
pub fn spawn_command(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_aadarsh-site");
    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to spawn aadarsh-site")
}

/// Like [`spawn_command`], but with the working directory set.
pub fn spawn_command_in(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_aadarsh-site");
    Command::new(bin)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn aadarsh-site")
}
