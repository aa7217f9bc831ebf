//! Injected diagnostics.
//!
//! Components take a [`DiagnosticLog`] instead of reaching for a global
//! logger, so tests can capture or silence output deterministically and the
//! on-target build can route lines to whatever transport it has.

use core::fmt;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    /// Something went wrong and was not recovered.
    Error,
    /// Normal operational event.
    Info,
    /// Developer detail.
    Debug,
}

/// Sink for diagnostic lines.
pub trait DiagnosticLog {
    /// Record one line at `level`.
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);

    /// Record an informational line.
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Record a debug line.
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Record an error line.
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

impl<L: DiagnosticLog + ?Sized> DiagnosticLog for &L {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).log(level, args);
    }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl DiagnosticLog for NullLog {
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}
}

/// Forwards lines to the `tracing` crate under the `call_bell` target.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

#[cfg(feature = "std")]
impl DiagnosticLog for TracingLog {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        match level {
            LogLevel::Error => tracing::error!(target: "call_bell", "{}", args),
            LogLevel::Info => tracing::info!(target: "call_bell", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "call_bell", "{}", args),
        }
    }
}
