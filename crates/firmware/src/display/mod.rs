//! Display back-ends for the call bell.
//!
//! The application draws through [`platform::DisplayDriver`]; this module
//! provides the desktop simulator panel and its input device. Headless tests use
//! `platform::mocks::MockDisplay` instead.

#[cfg(feature = "emulator")]
pub mod simulator;

#[cfg(feature = "emulator")]
pub use simulator::{SimulatorInput, SimulatorPanel};
