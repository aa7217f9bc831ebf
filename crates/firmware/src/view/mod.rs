//! Call screen rendering.
//!
//! Pure `embedded-graphics` drawing of a [`CallRequestScreen`] into any
//! `Gray4` target. Geometry comes from the screen's
//! [`CallScreenLayout`](ui::CallScreenLayout), so what is drawn and what is
//! hit-tested never drift apart.

// Display coordinates are at most a few thousand pixels; the casts and
// offsets below cannot overflow i32.
#![allow(
    clippy::cast_possible_wrap,
    clippy::arithmetic_side_effects,
)]

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X18, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use platform::DiagnosticLog;
use ui::{CallRequestScreen, Control};

/// Page background.
pub const BACKGROUND: Gray4 = Gray4::WHITE;
/// Call button fill.
pub const BUTTON_FILL: Gray4 = Gray4::new(0x3);
/// Call button label and glyph.
pub const BUTTON_INK: Gray4 = Gray4::WHITE;
/// Confirmation banner fill.
pub const BANNER_FILL: Gray4 = Gray4::new(0xC);
/// Title and banner text.
pub const INK: Gray4 = Gray4::BLACK;

const CORNER_RADIUS: u32 = 16;
const BELL_SIZE: u32 = 36;

/// Renders the call screen.
#[derive(Debug, Clone, Copy)]
pub struct CallScreenView<'a> {
    title: &'a str,
}

impl<'a> CallScreenView<'a> {
    /// View with `title` above the call button.
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Draw the whole screen.
    ///
    /// # Errors
    ///
    /// Returns `D::Error` if any drawing operation fails.
    pub fn render<D, L>(&self, display: &mut D, screen: &CallRequestScreen<L>) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        L: DiagnosticLog,
    {
        display.clear(BACKGROUND)?;

        let layout = screen.layout();
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(
            self.title,
            layout.title_anchor(),
            MonoTextStyle::new(&FONT_9X18_BOLD, INK),
            centered,
        )
        .draw(display)?;

        let button = layout.call_button();
        RoundedRectangle::with_equal_corners(button, Size::new(CORNER_RADIUS, CORNER_RADIUS))
            .into_styled(PrimitiveStyle::with_fill(BUTTON_FILL))
            .draw(display)?;

        // Bell above the label, both centered in the button.
        let center = button.center();
        draw_bell(display, center - Point::new(0, BELL_SIZE as i32 / 2 + 8))?;
        Text::with_text_style(
            Control::CallNurse.label(),
            center + Point::new(0, BELL_SIZE as i32 / 2 + 8),
            MonoTextStyle::new(&FONT_10X20, BUTTON_INK),
            centered,
        )
        .draw(display)?;

        let confirmation = screen.confirmation();
        if confirmation.visible() {
            let banner = layout.banner();
            RoundedRectangle::with_equal_corners(banner, Size::new(CORNER_RADIUS, CORNER_RADIUS))
                .into_styled(PrimitiveStyle::with_fill(BANNER_FILL))
                .draw(display)?;
            Text::with_text_style(
                confirmation.message(),
                banner.center(),
                MonoTextStyle::new(&FONT_9X18, INK),
                centered,
            )
            .draw(display)?;
        }

        Ok(())
    }
}

/// Bell glyph centered on `center`: dome, flared lip and clapper.
fn draw_bell<D>(display: &mut D, center: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let fill = PrimitiveStyle::with_fill(BUTTON_INK);
    let half = BELL_SIZE as i32 / 2;
    let dome = BELL_SIZE * 2 / 3;

    Circle::with_center(center - Point::new(0, half / 3), dome)
        .into_styled(fill)
        .draw(display)?;
    Triangle::new(
        center + Point::new(0, -half / 2),
        center + Point::new(-half, half / 2),
        center + Point::new(half, half / 2),
    )
    .into_styled(fill)
    .draw(display)?;
    Rectangle::with_center(center + Point::new(0, half / 2), Size::new(BELL_SIZE, 4))
        .into_styled(fill)
        .draw(display)?;
    Circle::with_center(center + Point::new(0, half / 2 + 5), 7)
        .into_styled(fill)
        .draw(display)?;
    Ok(())
}
