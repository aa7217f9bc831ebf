//! Hardware Abstraction Layer (HAL) for the hospital call bell
//!
//! This crate provides trait-based abstractions for every collaborator the
//! call screen talks to, enabling development and testing without a handset
//! or a hospital call system.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate)
//!         ↓
//! Feature Layer (ui)
//!         ↓
//! Platform HAL (this crate - trait abstractions + domain types)
//!         ↓
//! Hardware / simulator
//! ```
//!
//! # Abstractions
//!
//! - [`SignalTransmitter`] - Delivers call signals to the hospital call system
//! - [`DiagnosticLog`] - Injected logging capability
//! - [`DisplayDriver`] - Panel refresh control
//! - [`InputDevice`] - Call button and touch input
//!
//! # Features
//!
//! - `std`: Enable standard library support (mocks, `tracing` log backend)
//! - `defmt`: Enable defmt derives for on-target logging
//!
//! # Example
//!
//! ```no_run
//! use platform::{CallType, NullLog, PlaceholderTransmitter, SignalTransmitter};
//!
//! async fn example() {
//!     let mut tx = PlaceholderTransmitter::new(NullLog);
//!     let ack = tx.send(CallType::NurseAssistance).await;
//!     assert!(ack.is_ok());
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded UI loop, Send bounds not needed

pub mod call_types;
pub mod config;
pub mod display;
pub mod input;
pub mod log;
pub mod mocks;
pub mod transmitter;

// Re-export main high-level traits and types
pub use call_types::CallType;
pub use display::{DisplayDriver, DisplayError, RefreshMode};
pub use input::{Button, InputDevice, InputEvent};
pub use log::{DiagnosticLog, LogLevel, NullLog};
pub use transmitter::{
    Ack, PlaceholderTransmitter, SignalTransmitter, TransmissionError, TransmissionOutcome,
};

#[cfg(feature = "std")]
pub use log::TracingLog;
