//! Runtime configuration.
//!
//! Defaults come from [`platform::config`]. Desktop builds can override them
//! with a JSON file named by the `CALL_BELL_CONFIG` environment variable:
//!
//! ```json
//! {
//!     "title": "Hospital Call Bell",
//!     "confirmation_ms": 3000,
//!     "dismiss_policy": "restart",
//!     "display_width": 480,
//!     "display_height": 800,
//!     "scale": 1,
//!     "log_filter": "info"
//! }
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use embassy_time::Duration;
use embedded_graphics::prelude::Size;
use heapless::String;
use platform::config::{
    APP_NAME, CONFIRMATION_DISPLAY_MS, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH,
    MIN_DISPLAY_HEIGHT, MIN_DISPLAY_WIDTH,
};
use ui::DismissPolicy;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "CALL_BELL_CONFIG";

/// Longest accepted title, in bytes.
pub const TITLE_CAPACITY: usize = 48;

/// Longest accepted log filter directive, in bytes.
pub const LOG_FILTER_CAPACITY: usize = 64;

/// Settings for one run of the call bell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AppConfig {
    /// Screen title.
    pub title: String<TITLE_CAPACITY>,
    /// How long the confirmation banner stays up.
    pub confirmation_ms: u64,
    /// Behavior when the call button is pressed again while the banner is up.
    pub dismiss_policy: DismissPolicy,
    /// Panel width in pixels.
    pub display_width: u32,
    /// Panel height in pixels.
    pub display_height: u32,
    /// Simulator window pixel scale.
    pub scale: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String<LOG_FILTER_CAPACITY>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: bounded(APP_NAME),
            confirmation_ms: CONFIRMATION_DISPLAY_MS,
            dismiss_policy: DismissPolicy::default(),
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            scale: 1,
            log_filter: bounded("info"),
        }
    }
}

impl AppConfig {
    /// Reject settings the call screen cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.confirmation_ms == 0 {
            return Err(ConfigError::ZeroConfirmation);
        }
        if self.display_width < MIN_DISPLAY_WIDTH || self.display_height < MIN_DISPLAY_HEIGHT {
            return Err(ConfigError::DisplayTooSmall {
                width: self.display_width,
                height: self.display_height,
                min_width: MIN_DISPLAY_WIDTH,
                min_height: MIN_DISPLAY_HEIGHT,
            });
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        Ok(())
    }

    /// Banner display duration.
    pub fn confirmation_duration(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }

    /// Panel size.
    pub fn display_size(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate the file at `path`.
    #[cfg(feature = "std")]
    pub fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or use defaults when
    /// the variable is unset.
    #[cfg(feature = "std")]
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(std::path::Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

/// Invalid or unreadable configuration.
#[derive(Debug, thiserror_no_std::Error)]
pub enum ConfigError {
    /// The banner would never be visible.
    #[error("confirmation_ms must be greater than zero")]
    ZeroConfirmation,
    /// The panel cannot fit the call screen.
    #[error("display {width}x{height} is smaller than the supported minimum of {min_width}x{min_height}")]
    DisplayTooSmall {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
        /// Smallest supported width.
        min_width: u32,
        /// Smallest supported height.
        min_height: u32,
    },
    /// The simulator window would have no pixels.
    #[error("scale must be at least 1")]
    ZeroScale,
    /// The config file could not be read.
    #[cfg(feature = "std")]
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`AppConfig`].
    #[cfg(feature = "std")]
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

fn bounded<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
