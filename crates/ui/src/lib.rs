//! Call screen state: controls, layout and the confirmation banner.
//!
//! This crate is `no_std` by default; it only uses `core`, `heapless`,
//! `embassy-time` instants and `embedded-graphics` geometry. Nothing here
//! draws or sleeps, so every behavior is testable against explicit instants.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod call_request;
pub mod confirmation;
pub mod controls;
pub mod layout;

pub use call_request::{CallDispatcher, CallRequestScreen};
pub use confirmation::{ConfirmationBanner, ConfirmationState, DismissPolicy};
pub use controls::Control;
pub use layout::CallScreenLayout;
