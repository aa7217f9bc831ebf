//! Call Request Screen.
//!
//! The screen turns patient input into call signals and keeps the
//! confirmation banner in step with the clock. It never blocks: signals are
//! handed to a [`CallDispatcher`] and the transmitter runs elsewhere.
//! Transmission results come back through
//! [`CallRequestScreen::on_transmission_result`] and are only logged, so the
//! banner confirms that the call was raised, not that it was delivered.

use embassy_time::Instant;
use embedded_graphics::prelude::*;
use platform::{CallType, DiagnosticLog, InputEvent, TransmissionOutcome};

use crate::confirmation::{ConfirmationBanner, ConfirmationState};
use crate::controls::Control;
use crate::layout::CallScreenLayout;

/// Non-blocking hand-off of call signals to the transmitter.
pub trait CallDispatcher {
    /// Queue `call` for transmission.
    ///
    /// Returns the call back when it could not be queued.
    fn dispatch(&mut self, call: CallType) -> Result<(), CallType>;
}

impl<D: CallDispatcher + ?Sized> CallDispatcher for &mut D {
    fn dispatch(&mut self, call: CallType) -> Result<(), CallType> {
        (**self).dispatch(call)
    }
}

/// State of the single call screen.
pub struct CallRequestScreen<L> {
    layout: CallScreenLayout,
    banner: ConfirmationBanner,
    log: L,
}

impl<L: DiagnosticLog> CallRequestScreen<L> {
    /// Create the screen for a panel of `size`.
    pub fn new(size: Size, banner: ConfirmationBanner, log: L) -> Self {
        Self {
            layout: CallScreenLayout::for_size(size),
            banner,
            log,
        }
    }

    /// The patient pressed "Call Nurse".
    pub fn on_call_nurse_tapped<D: CallDispatcher>(&mut self, now: Instant, dispatcher: &mut D) {
        self.log.info(format_args!("Call Nurse button tapped"));
        self.activate(Control::CallNurse, now, dispatcher);
    }

    fn activate<D: CallDispatcher>(&mut self, control: Control, now: Instant, dispatcher: &mut D) {
        let call = control.call_type();
        if let Err(dropped) = dispatcher.dispatch(call) {
            self.log.error(format_args!(
                "Call queue full, {} not queued for transmission",
                dropped.as_str()
            ));
        }
        self.show_confirmation(control.confirmation_message(), now);
    }

    /// Put `message` in the banner and start its dismissal timer.
    pub fn show_confirmation(&mut self, message: &str, now: Instant) {
        self.log.debug(format_args!("Showing confirmation: {message}"));
        self.banner.show(message, now);
    }

    /// Route one input event. Returns `true` when the screen changed.
    pub fn handle_input<D: CallDispatcher>(
        &mut self,
        event: InputEvent,
        now: Instant,
        dispatcher: &mut D,
    ) -> bool {
        let control = match event {
            InputEvent::ButtonPress(button) => Some(Control::for_button(button)),
            InputEvent::Touch { x, y } => self.layout.hit_test(Point::new(x, y)),
            InputEvent::ButtonRelease(_) => None,
        };

        match control {
            Some(Control::CallNurse) => {
                self.on_call_nurse_tapped(now, dispatcher);
                true
            }
            None => false,
        }
    }

    /// Advance the banner clock. Returns `true` when the banner was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.banner.poll(now)
    }

    /// When [`Self::tick`] next needs to run.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.banner.next_deadline()
    }

    /// Current banner contents.
    pub fn confirmation(&self) -> &ConfirmationState {
        self.banner.state()
    }

    /// Screen geometry.
    pub fn layout(&self) -> &CallScreenLayout {
        &self.layout
    }

    /// Record the result of an earlier transmission.
    pub fn on_transmission_result(&mut self, outcome: TransmissionOutcome) {
        match outcome {
            Ok(ack) => self
                .log
                .debug(format_args!("Call system acknowledged {}", ack.call.as_str())),
            Err(error) => self
                .log
                .error(format_args!("Call signal transmission failed: {error}")),
        }
    }
}

impl<L> core::fmt::Debug for CallRequestScreen<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CallRequestScreen")
            .field("layout", &self.layout)
            .field("banner", &self.banner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::RecordingLog;
    use platform::{Ack, Button, LogLevel, TransmissionError};
    use std::vec::Vec;

    #[derive(Default)]
    struct VecDispatcher {
        calls: Vec<CallType>,
        full: bool,
    }

    impl CallDispatcher for VecDispatcher {
        fn dispatch(&mut self, call: CallType) -> Result<(), CallType> {
            if self.full {
                return Err(call);
            }
            self.calls.push(call);
            Ok(())
        }
    }

    fn screen(log: RecordingLog) -> CallRequestScreen<RecordingLog> {
        CallRequestScreen::new(Size::new(480, 800), ConfirmationBanner::default(), log)
    }

    #[test]
    fn test_tap_dispatches_and_confirms() {
        let log = RecordingLog::new();
        let mut screen = screen(log.clone());
        let mut dispatcher = VecDispatcher::default();

        screen.on_call_nurse_tapped(Instant::from_millis(0), &mut dispatcher);

        assert_eq!(dispatcher.calls, [CallType::NurseAssistance]);
        assert!(screen.confirmation().visible());
        assert_eq!(screen.confirmation().message(), "Nurse Call Sent");
        assert!(log.contains(LogLevel::Info, "Call Nurse button tapped"));
        assert!(log.contains(LogLevel::Debug, "Showing confirmation: Nurse Call Sent"));
    }

    #[test]
    fn test_full_queue_still_confirms() {
        let log = RecordingLog::new();
        let mut screen = screen(log.clone());
        let mut dispatcher = VecDispatcher {
            full: true,
            ..Default::default()
        };

        screen.on_call_nurse_tapped(Instant::from_millis(0), &mut dispatcher);

        assert!(dispatcher.calls.is_empty());
        assert!(screen.confirmation().visible());
        assert!(log.contains(LogLevel::Error, "NURSE_ASSISTANCE"));
    }

    #[test]
    fn test_touch_outside_button_is_ignored() {
        let mut screen = screen(RecordingLog::new());
        let mut dispatcher = VecDispatcher::default();

        let changed = screen.handle_input(
            InputEvent::Touch { x: 1, y: 1 },
            Instant::from_millis(0),
            &mut dispatcher,
        );

        assert!(!changed);
        assert!(dispatcher.calls.is_empty());
        assert!(!screen.confirmation().visible());
    }

    #[test]
    fn test_touch_on_button_raises_call() {
        let mut screen = screen(RecordingLog::new());
        let mut dispatcher = VecDispatcher::default();
        let center = screen.layout().call_button().center();

        let changed = screen.handle_input(
            InputEvent::Touch {
                x: center.x,
                y: center.y,
            },
            Instant::from_millis(0),
            &mut dispatcher,
        );

        assert!(changed);
        assert_eq!(dispatcher.calls, [CallType::NurseAssistance]);
    }

    #[test]
    fn test_button_release_is_ignored() {
        let mut screen = screen(RecordingLog::new());
        let mut dispatcher = VecDispatcher::default();
        assert!(!screen.handle_input(
            InputEvent::ButtonRelease(Button::CallNurse),
            Instant::from_millis(0),
            &mut dispatcher,
        ));
        assert!(dispatcher.calls.is_empty());
    }

    #[test]
    fn test_transmission_failure_logged_banner_untouched() {
        let log = RecordingLog::new();
        let mut screen = screen(log.clone());
        let mut dispatcher = VecDispatcher::default();
        screen.on_call_nurse_tapped(Instant::from_millis(0), &mut dispatcher);

        screen.on_transmission_result(Err(TransmissionError::NotConnected));

        assert!(screen.confirmation().visible());
        assert_eq!(screen.confirmation().message(), "Nurse Call Sent");
        assert!(log.contains(LogLevel::Error, "Call system not connected"));
    }

    #[test]
    fn test_transmission_ack_logged_at_debug() {
        let log = RecordingLog::new();
        let mut screen = screen(log.clone());
        screen.on_transmission_result(Ok(Ack {
            call: CallType::NurseAssistance,
        }));
        assert!(log.contains(LogLevel::Debug, "acknowledged NURSE_ASSISTANCE"));
        assert!(!screen.confirmation().visible());
    }
}
