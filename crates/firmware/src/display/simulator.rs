//! Desktop simulator panel and input.
//!
//! Wraps an `embedded-graphics-simulator` window. Drawing goes to an
//! off-screen framebuffer; a refresh pushes it to the window. The window is
//! shared with [`SimulatorInput`], which pumps its event queue: mouse clicks
//! become touches and any key press stands in for the physical call button.
//! Both sides implement the `platform` traits, so the application loop is
//! the same one that runs against the hardware drivers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use platform::{Button, DisplayDriver, DisplayError, InputDevice, InputEvent};

/// Window poll interval while waiting for input (~60 Hz).
const POLL_INTERVAL_MS: u64 = 16;

type CloseSignal = Signal<CriticalSectionRawMutex, ()>;

struct SharedWindow {
    window: Window,
    // `Window::events` needs a window opened by at least one `update`.
    shown: bool,
    closed: bool,
}

/// Simulator window plus its framebuffer.
pub struct SimulatorPanel {
    framebuffer: SimulatorDisplay<Gray4>,
    window: Rc<RefCell<SharedWindow>>,
    close: Rc<CloseSignal>,
}

impl SimulatorPanel {
    /// Open a `size` panel titled `title`, magnified by `scale`.
    pub fn new(title: &str, size: Size, scale: u32) -> Self {
        let settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
        Self {
            framebuffer: SimulatorDisplay::new(size),
            window: Rc::new(RefCell::new(SharedWindow {
                window: Window::new(title, &settings),
                shown: false,
                closed: false,
            })),
            close: Rc::new(Signal::new()),
        }
    }

    /// Input device reading this panel's window.
    pub fn input(&self) -> SimulatorInput {
        SimulatorInput {
            window: Rc::clone(&self.window),
            close: Rc::clone(&self.close),
            pending: VecDeque::new(),
        }
    }

    /// Completes once the window has been closed.
    pub fn closed(&self) -> impl core::future::Future<Output = ()> + 'static {
        let close = Rc::clone(&self.close);
        async move { close.wait().await }
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        let mut shared = self
            .window
            .try_borrow_mut()
            .map_err(|_| DisplayError::Busy)?;
        if shared.closed {
            return Err(DisplayError::Closed);
        }
        shared.window.update(&self.framebuffer);
        shared.shown = true;
        Ok(())
    }
}

impl DrawTarget for SimulatorPanel {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.clear(color)
    }
}

impl OriginDimensions for SimulatorPanel {
    fn size(&self) -> Size {
        self.framebuffer.size()
    }
}

impl DisplayDriver for SimulatorPanel {
    type DriverError = DisplayError;

    async fn refresh_full(&mut self) -> Result<(), Self::DriverError> {
        tracing::debug!("Simulator: full refresh");
        self.present()
    }

    async fn refresh_partial(&mut self) -> Result<(), Self::DriverError> {
        tracing::trace!("Simulator: partial refresh");
        self.present()
    }
}

/// Window events as [`InputEvent`]s.
///
/// Created by [`SimulatorPanel::input`]. Closing the window stops the event
/// stream and fires [`SimulatorPanel::closed`].
pub struct SimulatorInput {
    window: Rc<RefCell<SharedWindow>>,
    close: Rc<CloseSignal>,
    pending: VecDeque<InputEvent>,
}

impl SimulatorInput {
    fn pump(&mut self) {
        let Ok(mut shared) = self.window.try_borrow_mut() else {
            return;
        };
        if !shared.shown || shared.closed {
            return;
        }

        let mut quit = false;
        for event in shared.window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                quit = true;
            } else if let Some(input) = map_event(&event) {
                self.pending.push_back(input);
            }
        }

        if quit {
            tracing::info!("Window closed");
            shared.closed = true;
            self.pending.clear();
            self.close.signal(());
        }
    }
}

impl InputDevice for SimulatorInput {
    async fn wait_for_event(&mut self) -> InputEvent {
        loop {
            if let Some(event) = self.poll_event() {
                return event;
            }
            Timer::after_millis(POLL_INTERVAL_MS).await;
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.pending.is_empty() {
            self.pump();
        }
        self.pending.pop_front()
    }
}

/// Map one window event to patient input. `Quit` is handled by the caller.
fn map_event(event: &SimulatorEvent) -> Option<InputEvent> {
    match *event {
        SimulatorEvent::MouseButtonDown { point, .. } => Some(InputEvent::Touch {
            x: point.x,
            y: point.y,
        }),
        SimulatorEvent::KeyDown { repeat: false, .. } => {
            Some(InputEvent::ButtonPress(Button::CallNurse))
        }
        SimulatorEvent::KeyUp { .. } => Some(InputEvent::ButtonRelease(Button::CallNurse)),
        _ => None,
    }
}
