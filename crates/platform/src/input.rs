//! Input device abstraction

/// Input device trait for the bedside button and touch panel
pub trait InputDevice {
    /// Wait for next input event (async, power-efficient)
    fn wait_for_event(&mut self) -> impl core::future::Future<Output = InputEvent>;

    /// Poll for event (non-blocking)
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Input events from the physical button and the touch panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button pressed
    ButtonPress(Button),
    /// Button released
    ButtonRelease(Button),
    /// Touch or click at a display coordinate
    Touch {
        /// Horizontal position in pixels from the left edge
        x: i32,
        /// Vertical position in pixels from the top edge
        y: i32,
    },
}

/// Physical buttons
///
/// The handset carries a single large key. Water and pain-medication requests
/// have no physical key on this hardware revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Call Nurse key
    CallNurse,
}
