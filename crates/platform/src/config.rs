//! Application configuration and constants
//!
//! This module defines central configuration values used across the application.
//! All naming, wording and timing should reference these constants
//! rather than hardcoding values.

/// The application name, shown as the screen title
pub const APP_NAME: &str = "Hospital Call Bell";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label of the primary call button
pub const CALL_NURSE_LABEL: &str = "Call Nurse";

/// Banner text shown after a nurse call is raised
pub const NURSE_CALL_SENT: &str = "Nurse Call Sent";

/// How long the confirmation banner stays up (milliseconds)
pub const CONFIRMATION_DISPLAY_MS: u64 = 3_000;

/// Depth of the queues between the UI and the transmitter task
pub const CALL_QUEUE_DEPTH: usize = 4;

/// Default panel size (portrait handset)
pub const DEFAULT_DISPLAY_WIDTH: u32 = 480;

/// Default panel size (portrait handset)
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 800;

/// Smallest panel the call screen layout supports
pub const MIN_DISPLAY_WIDTH: u32 = 240;

/// Smallest panel the call screen layout supports
pub const MIN_DISPLAY_HEIGHT: u32 = 320;

/// Development mode banner
pub const fn dev_banner() -> &'static str {
    "Hospital Call Bell - Simulator"
}
