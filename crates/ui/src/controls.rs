//! Interactive controls on the call screen.
//!
//! The screen exposes exactly one control. [`CallType::WaterRequest`] and
//! [`CallType::PainMedication`] are valid call types, but no control emits
//! them on this screen.

use platform::config::{CALL_NURSE_LABEL, NURSE_CALL_SENT};
use platform::{Button, CallType};

/// Every control a patient can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The large "Call Nurse" button.
    CallNurse,
}

impl Control {
    /// All controls on the screen, top to bottom.
    pub const ALL: [Control; 1] = [Control::CallNurse];

    /// Call type raised when this control is activated.
    #[must_use]
    pub const fn call_type(self) -> CallType {
        match self {
            Control::CallNurse => CallType::NurseAssistance,
        }
    }

    /// Text drawn on the control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Control::CallNurse => CALL_NURSE_LABEL,
        }
    }

    /// Banner text shown after activation.
    #[must_use]
    pub const fn confirmation_message(self) -> &'static str {
        match self {
            Control::CallNurse => NURSE_CALL_SENT,
        }
    }

    /// Control bound to a physical key.
    #[must_use]
    pub const fn for_button(button: Button) -> Control {
        match button {
            Button::CallNurse => Control::CallNurse,
        }
    }

    /// Control that raises `call`, if the screen has one.
    #[must_use]
    pub fn for_call_type(call: CallType) -> Option<Control> {
        Self::ALL.into_iter().find(|c| c.call_type() == call)
    }
}
