//! xtask run - launch the desktop simulator
//!
//! Builds and runs the `call-bell` binary with the `emulator` feature. A
//! config file, when given, is handed over through `CALL_BELL_CONFIG`.

use anyhow::{Context, Result};
use colored::Colorize;
use platform::config;
use std::path::Path;
use std::process::Command;

pub fn run(config_path: Option<&Path>, release: bool) -> Result<()> {
    print_banner();

    let mut command = Command::new("cargo");
    command.args([
        "run",
        "-p",
        "firmware",
        "--bin",
        "call-bell",
        "--features",
        "emulator",
    ]);
    if release {
        command.arg("--release");
    }

    if let Some(path) = config_path {
        let path = path
            .canonicalize()
            .with_context(|| format!("Config file not found: {}", path.display()))?;
        println!("{}", format!("Config: {}", path.display()).dimmed());
        command.env("CALL_BELL_CONFIG", path);
    }

    println!("{}", "Close the window to exit.".dimmed());
    println!();

    let status = command.status().context("Failed to start simulator")?;
    if !status.success() {
        anyhow::bail!("Simulator exited with {status}");
    }
    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        format!("{} v{}", config::dev_banner(), config::APP_VERSION)
            .cyan()
            .bold()
    );
    println!("{}", "Click the button or press any key to call a nurse".dimmed());
    println!();
}
