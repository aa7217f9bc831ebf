//! Transmitter task and the queues that connect it to the UI.
//!
//! ```text
//! CallRequestScreen --ChannelDispatcher--> CallChannel --> transmit_task
//!        ^                                                      |
//!        +------------------ OutcomeChannel <-------------------+
//! ```
//!
//! The UI side only ever uses `try_send`, so a slow or stalled call system
//! never freezes the screen.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender, TrySendError};
use platform::config::CALL_QUEUE_DEPTH;
use platform::{CallType, SignalTransmitter, TransmissionOutcome};
use ui::CallDispatcher;

/// Calls waiting for the transmitter.
pub type CallChannel = Channel<CriticalSectionRawMutex, CallType, CALL_QUEUE_DEPTH>;

/// Results travelling back to the UI.
pub type OutcomeChannel = Channel<CriticalSectionRawMutex, TransmissionOutcome, CALL_QUEUE_DEPTH>;

/// Sending half of a [`CallChannel`].
pub type CallSender<'a> = Sender<'a, CriticalSectionRawMutex, CallType, CALL_QUEUE_DEPTH>;

/// Receiving half of a [`CallChannel`].
pub type CallReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, CallType, CALL_QUEUE_DEPTH>;

/// Sending half of an [`OutcomeChannel`].
pub type OutcomeSender<'a> =
    Sender<'a, CriticalSectionRawMutex, TransmissionOutcome, CALL_QUEUE_DEPTH>;

/// Receiving half of an [`OutcomeChannel`].
pub type OutcomeReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, TransmissionOutcome, CALL_QUEUE_DEPTH>;

/// Queues calls for [`transmit_task`] without waiting.
#[derive(Clone, Copy)]
pub struct ChannelDispatcher<'a> {
    calls: CallSender<'a>,
}

impl<'a> ChannelDispatcher<'a> {
    /// Dispatch into `calls`.
    pub fn new(calls: CallSender<'a>) -> Self {
        Self { calls }
    }
}

impl CallDispatcher for ChannelDispatcher<'_> {
    fn dispatch(&mut self, call: CallType) -> Result<(), CallType> {
        self.calls.try_send(call).map_err(|TrySendError::Full(call)| call)
    }
}

/// Send one call and report its outcome.
pub async fn transmit_one<T: SignalTransmitter>(
    transmitter: &mut T,
    call: CallType,
    outcomes: &OutcomeSender<'_>,
) {
    let outcome = transmitter.send(call).await;
    outcomes.send(outcome).await;
}

/// Drain `calls` through `transmitter`. Never returns.
pub async fn transmit_task<T: SignalTransmitter>(
    mut transmitter: T,
    calls: CallReceiver<'_>,
    outcomes: OutcomeSender<'_>,
) {
    loop {
        let call = calls.receive().await;
        transmit_one(&mut transmitter, call, &outcomes).await;
    }
}
