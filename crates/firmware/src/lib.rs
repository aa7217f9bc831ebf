//! Hospital Call Bell application
//!
//! Bedside call screen: one large "Call Nurse" button, a transient
//! confirmation banner, and a transmitter task that carries call signals to
//! the hospital call system.
//!
//! # Architecture
//!
//! This crate follows a layered architecture:
//!
//! ```text
//! Application Layer (app, transmit, view, main.rs)
//!         ↓
//! Screen state (ui crate)
//!         ↓
//! Platform HAL (platform crate: traits, call types, mocks)
//!         ↓
//! Simulator window / handset hardware
//! ```
//!
//! # Features
//!
//! - `std` (default) - JSON configuration, `tracing` logging, std time driver
//! - `emulator` - Desktop simulator binary (`embedded-graphics-simulator`, tokio)
//! - `defmt` - defmt derives on platform types for on-target logging
//!
//! The `no_std` layers are `platform` and `ui`; this crate is the host-side
//! application and always links `std`.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p firmware --bin call-bell --features emulator
//! CALL_BELL_CONFIG=ward7.json cargo run -p firmware --bin call-bell --features emulator
//! ```

// Upgrade relevant warns to deny; keep pedantic as warn
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(async_fn_in_trait)]

pub mod app;
pub mod config;
pub mod display;
pub mod transmit;
pub mod view;

// Re-export key types
pub use app::{AppError, AppEvent, CallBellApp};
pub use config::{AppConfig, ConfigError};
pub use transmit::{transmit_one, transmit_task, CallChannel, ChannelDispatcher, OutcomeChannel};
pub use view::CallScreenView;

#[cfg(feature = "emulator")]
pub use display::{SimulatorInput, SimulatorPanel};
