//! Signal transmitter abstraction
//!
//! The transmitter is the only path from the bedside to hospital
//! infrastructure. A real integration (hospital API, BLE relay, vendor SDK)
//! implements [`SignalTransmitter`]; this crate ships only
//! [`PlaceholderTransmitter`], which records the attempt and succeeds.

use core::fmt;

use crate::call_types::CallType;
use crate::log::DiagnosticLog;

/// Acknowledgement that a call signal left the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ack {
    /// The call that was acknowledged.
    pub call: CallType,
}

/// Result of one transmission attempt, delivered after the send completes.
pub type TransmissionOutcome = Result<Ack, TransmissionError>;

/// Transmission failures a real integration may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmissionError {
    /// No link to the hospital call system.
    NotConnected,
    /// The call system refused the request.
    Rejected {
        /// Vendor-specific status code.
        code: u16,
    },
    /// No answer within the integration's deadline.
    Timeout,
}

#[cfg(feature = "std")]
impl std::error::Error for TransmissionError {}

impl fmt::Display for TransmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "Call system not connected"),
            Self::Rejected { code } => write!(f, "Call rejected by call system (code {code})"),
            Self::Timeout => write!(f, "Call system did not answer in time"),
        }
    }
}

/// Delivers call signals to the hospital call system.
pub trait SignalTransmitter {
    /// Send one call signal.
    ///
    /// The result arrives asynchronously; callers must not assume the call
    /// has completed when this future is created.
    async fn send(&mut self, call: CallType) -> Result<Ack, TransmissionError>;
}

/// Stand-in transmitter used until a site-specific integration exists.
///
/// It never fails and never waits: every call is logged and immediately
/// acknowledged. Replace it with a real [`SignalTransmitter`] for the
/// hospital's call system before deployment.
#[derive(Debug)]
pub struct PlaceholderTransmitter<L> {
    log: L,
    attempts: u32,
}

impl<L: DiagnosticLog> PlaceholderTransmitter<L> {
    /// Create a placeholder that reports through `log`.
    pub fn new(log: L) -> Self {
        Self { log, attempts: 0 }
    }

    /// Number of calls passed to [`SignalTransmitter::send`] so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl<L: DiagnosticLog> SignalTransmitter for PlaceholderTransmitter<L> {
    async fn send(&mut self, call: CallType) -> Result<Ack, TransmissionError> {
        self.attempts = self.attempts.saturating_add(1);
        self.log
            .info(format_args!("Attempting to send call signal: {}", call.as_str()));
        self.log.debug(format_args!(
            "Placeholder transmitter: no call system attached, {} not delivered",
            call.as_str()
        ));
        Ok(Ack { call })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::NullLog;

    #[tokio::test]
    async fn test_placeholder_acknowledges_every_call_type() {
        let mut tx = PlaceholderTransmitter::new(NullLog);
        for call in CallType::ALL {
            assert_eq!(tx.send(call).await, Ok(Ack { call }));
        }
        assert_eq!(tx.attempts(), 3);
    }

    #[test]
    fn test_transmission_error_display() {
        assert_eq!(
            TransmissionError::Rejected { code: 503 }.to_string(),
            "Call rejected by call system (code 503)"
        );
        assert_eq!(
            TransmissionError::NotConnected.to_string(),
            "Call system not connected"
        );
    }
}
