use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{cargo, OnFailure};

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking call bell builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // The HAL and screen-state layers must stay no_std.
    cargo(
        "Platform crate (no_std)",
        &["check", "-p", "platform", "--no-default-features"],
        OnFailure::Fail,
    )?;
    cargo("UI crate (no_std)", &["check", "-p", "ui"], OnFailure::Fail)?;
    cargo(
        "Simulator build",
        &["check", "-p", "firmware", "--features", "emulator"],
        OnFailure::Fail,
    )?;
    cargo(
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;
    if cargo("Formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
