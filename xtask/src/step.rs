//! One cargo invocation with a timed, colored status line.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// How a failing step affects the overall task.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Abort the task.
    Fail,
    /// Print a warning and carry on.
    Warn,
}

/// Run `cargo <args>` and report it under `label`.
///
/// Returns the captured output when the step succeeded.
pub fn cargo(label: &str, args: &[&str], on_failure: OnFailure) -> Result<Option<Output>> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if output.status.success() {
        let summary = extract_test_summary(&String::from_utf8_lossy(&output.stdout));
        println!(
            "{}",
            format!(
                "  ✓ {label} passed{summary} in {:.2}s",
                start.elapsed().as_secs_f64()
            )
            .green()
        );
        println!();
        return Ok(Some(output));
    }

    match on_failure {
        OnFailure::Fail => {
            eprintln!("{}", format!("  ✗ {label} failed").red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{label} failed");
        }
        OnFailure::Warn => {
            eprintln!("{}", format!("  ⚠ {label} reported problems").yellow().bold());
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            println!();
            Ok(None)
        }
    }
}

/// Pull " (ok. 5 passed; ...)" out of libtest output, or nothing.
fn extract_test_summary(output: &str) -> String {
    // Look for lines like "test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out"
    output
        .lines()
        .filter_map(|line| line.split("test result:").nth(1))
        .last()
        .map(|summary| format!(" ({})", summary.trim()))
        .unwrap_or_default()
}
