//! Application event loop.
//!
//! [`CallBellApp::handle`] is the synchronous core: it takes one event and
//! the current instant and reports whether the screen must be redrawn.
//! [`CallBellApp::run`] drives that core on an embassy-style executor by
//! waiting on input, the banner deadline and transmitter outcomes at once.

use embassy_futures::select::{select, select3, Either, Either3};
use embassy_time::{Instant, Timer};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use heapless::String;
use platform::{
    DiagnosticLog, DisplayDriver, InputDevice, InputEvent, RefreshMode, TransmissionOutcome,
};
use ui::{CallDispatcher, CallRequestScreen, ConfirmationBanner};

use crate::config::{AppConfig, ConfigError, TITLE_CAPACITY};
use crate::transmit::OutcomeReceiver;
use crate::view::CallScreenView;

/// Everything the event loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Patient input.
    Input(InputEvent),
    /// A banner deadline may have passed.
    Tick,
    /// The transmitter finished a call.
    Transmission(TransmissionOutcome),
}

/// Event loop failures.
#[derive(Debug, thiserror_no_std::Error)]
pub enum AppError {
    /// Drawing into the framebuffer failed.
    #[error("drawing the call screen failed")]
    Draw,
    /// The panel rejected a refresh.
    #[error("display refresh failed")]
    Refresh,
    /// Startup configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The call bell application.
pub struct CallBellApp<L> {
    title: String<TITLE_CAPACITY>,
    screen: CallRequestScreen<L>,
}

impl<L: DiagnosticLog> CallBellApp<L> {
    /// Build the app from validated settings.
    pub fn new(config: &AppConfig, log: L) -> Result<Self, AppError> {
        config.validate()?;
        let banner = ConfirmationBanner::new(config.confirmation_duration(), config.dismiss_policy);
        Ok(Self {
            title: config.title.clone(),
            screen: CallRequestScreen::new(config.display_size(), banner, log),
        })
    }

    /// Apply one event at `now`. Returns `true` when a redraw is needed.
    pub fn handle<D: CallDispatcher>(
        &mut self,
        event: AppEvent,
        now: Instant,
        dispatcher: &mut D,
    ) -> bool {
        // Expire stale deadlines first so a late wakeup cannot leave an old
        // banner on screen.
        let dismissed = self.screen.tick(now);
        let changed = match event {
            AppEvent::Input(input) => self.screen.handle_input(input, now, dispatcher),
            AppEvent::Tick => false,
            AppEvent::Transmission(outcome) => {
                self.screen.on_transmission_result(outcome);
                false
            }
        };
        dismissed || changed
    }

    /// Draw the current state.
    pub fn render<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        CallScreenView::new(&self.title).render(display, &self.screen)
    }

    /// Screen state.
    pub fn screen(&self) -> &CallRequestScreen<L> {
        &self.screen
    }

    /// Screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run the event loop. Returns only on a display failure.
    pub async fn run<D, I, C>(
        &mut self,
        display: &mut D,
        input: &mut I,
        dispatcher: &mut C,
        outcomes: OutcomeReceiver<'_>,
    ) -> Result<(), AppError>
    where
        D: DisplayDriver<Color = Gray4>,
        I: InputDevice,
        C: CallDispatcher,
    {
        let mut mode = RefreshMode::Full;
        loop {
            self.render(display).map_err(|_| AppError::Draw)?;
            display.refresh(mode).await.map_err(|_| AppError::Refresh)?;
            mode = RefreshMode::Partial;

            // Wait until something on screen changes.
            loop {
                let deadline = self.screen.next_deadline().unwrap_or(Instant::MAX);
                let event = match select3(
                    input.wait_for_event(),
                    Timer::at(deadline),
                    outcomes.receive(),
                )
                .await
                {
                    Either3::First(event) => AppEvent::Input(event),
                    Either3::Second(()) => AppEvent::Tick,
                    Either3::Third(outcome) => AppEvent::Transmission(outcome),
                };

                if self.handle(event, Instant::now(), dispatcher) {
                    break;
                }
            }
        }
    }

    /// Run the event loop until `stop` completes.
    ///
    /// Returns `Ok(())` once `stop` fires; a display failure ends the loop
    /// first with an error.
    pub async fn run_until<D, I, C, S>(
        &mut self,
        display: &mut D,
        input: &mut I,
        dispatcher: &mut C,
        outcomes: OutcomeReceiver<'_>,
        stop: S,
    ) -> Result<(), AppError>
    where
        D: DisplayDriver<Color = Gray4>,
        I: InputDevice,
        C: CallDispatcher,
        S: core::future::Future<Output = ()>,
    {
        match select(self.run(display, input, dispatcher, outcomes), stop).await {
            Either::First(result) => result,
            Either::Second(()) => Ok(()),
        }
    }
}

impl<L> core::fmt::Debug for CallBellApp<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CallBellApp")
            .field("title", &self.title)
            .field("screen", &self.screen)
            .finish()
    }
}
