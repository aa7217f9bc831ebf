//! Call screen geometry.
//!
//! Positions are derived from the panel size so the same screen works on the
//! handset panel and in a resizable simulator window. The renderer draws into
//! these rectangles and input hit-testing reads them, so a touch always lands
//! on what the patient sees.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::controls::Control;

/// Horizontal margin around the call button and banner.
pub const SIDE_MARGIN: u32 = 40;

/// Preferred minimum height of the call button.
pub const MIN_BUTTON_HEIGHT: u32 = 200;

/// Height of the confirmation banner.
pub const BANNER_HEIGHT: u32 = 56;

/// Resolved positions of every element on the call screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallScreenLayout {
    size: Size,
    title_anchor: Point,
    call_button: Rectangle,
    banner: Rectangle,
}

impl CallScreenLayout {
    /// Lay the screen out for a panel of `size`.
    #[must_use]
    pub fn for_size(size: Size) -> Self {
        let width = size.width;
        let height = size.height;
        let inner_width = width.saturating_sub(SIDE_MARGIN.saturating_mul(2));

        let title_y = percent(height, 18);

        let button_top = percent(height, 30);
        let button_height = percent(height, 30)
            .max(MIN_BUTTON_HEIGHT)
            .min(percent(height, 45));

        let banner_top = percent(height, 78);

        Self {
            size,
            title_anchor: Point::new(to_i32(width / 2), to_i32(title_y)),
            call_button: Rectangle::new(
                Point::new(to_i32(SIDE_MARGIN), to_i32(button_top)),
                Size::new(inner_width, button_height),
            ),
            banner: Rectangle::new(
                Point::new(to_i32(SIDE_MARGIN), to_i32(banner_top)),
                Size::new(inner_width, BANNER_HEIGHT),
            ),
        }
    }

    /// Panel size this layout was computed for.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Horizontal center and text baseline of the title.
    #[must_use]
    pub fn title_anchor(&self) -> Point {
        self.title_anchor
    }

    /// Bounds of the call button.
    #[must_use]
    pub fn call_button(&self) -> Rectangle {
        self.call_button
    }

    /// Bounds of the confirmation banner.
    #[must_use]
    pub fn banner(&self) -> Rectangle {
        self.banner
    }

    /// Control under `point`, if any. The banner and title are not interactive.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Control> {
        self.call_button.contains(point).then_some(Control::CallNurse)
    }
}

fn percent(value: u32, pct: u32) -> u32 {
    value.saturating_mul(pct) / 100
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_layout() {
        let layout = CallScreenLayout::for_size(Size::new(480, 800));
        assert_eq!(layout.title_anchor(), Point::new(240, 144));
        assert_eq!(
            layout.call_button(),
            Rectangle::new(Point::new(40, 240), Size::new(400, 240))
        );
        assert_eq!(
            layout.banner(),
            Rectangle::new(Point::new(40, 624), Size::new(400, BANNER_HEIGHT))
        );
    }

    #[test]
    fn test_elements_do_not_overlap_on_smallest_panel() {
        let layout = CallScreenLayout::for_size(Size::new(240, 320));
        let button = layout.call_button();
        let banner = layout.banner();
        let button_bottom = button.bottom_right().unwrap();
        assert!(button_bottom.y < banner.top_left.y);
        let banner_bottom = banner.bottom_right().unwrap();
        assert!(banner_bottom.y < 320);
        assert!(layout.title_anchor().y < button.top_left.y);
    }

    #[test]
    fn test_button_is_tall_on_default_panel() {
        let layout = CallScreenLayout::for_size(Size::new(480, 800));
        assert!(layout.call_button().size.height >= MIN_BUTTON_HEIGHT);
    }

    #[test]
    fn test_hit_test_inside_button() {
        let layout = CallScreenLayout::for_size(Size::new(480, 800));
        let center = layout.call_button().center();
        assert_eq!(layout.hit_test(center), Some(Control::CallNurse));
        assert_eq!(layout.hit_test(Point::new(40, 240)), Some(Control::CallNurse));
    }

    #[test]
    fn test_hit_test_outside_button() {
        let layout = CallScreenLayout::for_size(Size::new(480, 800));
        assert_eq!(layout.hit_test(Point::new(10, 10)), None);
        assert_eq!(layout.hit_test(layout.banner().center()), None);
        assert_eq!(layout.hit_test(layout.title_anchor()), None);
        assert_eq!(layout.hit_test(Point::new(-5, 300)), None);
    }
}
