//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use std::string::String;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::*;
use embedded_graphics::{pixelcolor::Gray4, prelude::*};

/// Mock display implementation backed by a full Gray4 framebuffer
pub struct MockDisplay {
    width: u32,
    height: u32,
    refresh_count: usize,
    full_refresh_count: usize,
    pixels: Vec<Gray4>,
}

impl MockDisplay {
    /// Create new mock display, cleared to white
    pub fn new(width: u32, height: u32) -> Self {
        let len = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        Self {
            width,
            height,
            refresh_count: 0,
            full_refresh_count: 0,
            pixels: std::vec![Gray4::WHITE; len],
        }
    }

    /// Total refreshes (full + partial)
    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }

    /// Full refreshes only
    pub fn full_refresh_count(&self) -> usize {
        self.full_refresh_count
    }

    /// Color at `(x, y)`, or `None` outside the panel
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Gray4> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index_of(x, y)?).copied()
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        let index = u64::from(y)
            .checked_mul(u64::from(self.width))?
            .checked_add(u64::from(x))?;
        usize::try_from(index).ok()
    }

    /// Number of pixels in `area` that are not white
    pub fn dark_pixels_in(&self, area: &embedded_graphics::primitives::Rectangle) -> usize {
        area.points()
            .filter_map(|p| {
                let x = u32::try_from(p.x).ok()?;
                let y = u32::try_from(p.y).ok()?;
                self.pixel_at(x, y)
            })
            .filter(|c| *c != Gray4::WHITE)
            .count()
    }
}

impl DrawTarget for MockDisplay {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x >= self.width || y >= self.height {
                continue;
            }
            if let Some(slot) = self
                .index_of(x, y)
                .and_then(|i| self.pixels.get_mut(i))
            {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for MockDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DisplayDriver for MockDisplay {
    type DriverError = core::convert::Infallible;

    async fn refresh_full(&mut self) -> Result<(), Self::DriverError> {
        self.refresh_count = self.refresh_count.saturating_add(1);
        self.full_refresh_count = self.full_refresh_count.saturating_add(1);
        Ok(())
    }

    async fn refresh_partial(&mut self) -> Result<(), Self::DriverError> {
        self.refresh_count = self.refresh_count.saturating_add(1);
        Ok(())
    }
}

/// Mock input device
pub struct MockInput {
    events: heapless::Deque<InputEvent, 16>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: heapless::Deque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.events.push_back(event)
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    async fn wait_for_event(&mut self) -> InputEvent {
        loop {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            embassy_time::Timer::after_millis(10).await;
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Mock transmitter that records every call and can be scripted to fail
#[derive(Debug, Default)]
pub struct MockTransmitter {
    sent: Vec<CallType>,
    fail_with: Option<TransmissionError>,
}

impl MockTransmitter {
    /// Create a transmitter that acknowledges every call
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transmitter that fails every call with `error`
    pub fn failing(error: TransmissionError) -> Self {
        Self {
            sent: Vec::new(),
            fail_with: Some(error),
        }
    }

    /// Calls received so far, in order
    pub fn sent(&self) -> &[CallType] {
        &self.sent
    }
}

impl SignalTransmitter for MockTransmitter {
    async fn send(&mut self, call: CallType) -> Result<Ack, TransmissionError> {
        self.sent.push(call);
        match self.fail_with {
            Some(error) => Err(error),
            None => Ok(Ack { call }),
        }
    }
}

/// One captured diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity
    pub level: LogLevel,
    /// Formatted message
    pub message: String,
}

/// Log sink that keeps every line in memory
///
/// Clones share the same buffer, so a test can hand one clone to the code
/// under test and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLog {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every captured line
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// True when a line at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    /// Drop every captured line
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl DiagnosticLog for RecordingLog {
    fn log(&self, level: LogLevel, args: core::fmt::Arguments<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                level,
                message: std::fmt::format(args),
            });
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_display() {
        let mut display = MockDisplay::new(400, 300);

        display.refresh_full().await.unwrap();
        assert_eq!(display.refresh_count(), 1);
        assert_eq!(display.full_refresh_count(), 1);

        display.refresh_partial().await.unwrap();
        assert_eq!(display.refresh_count(), 2);
        assert_eq!(display.full_refresh_count(), 1);
    }

    #[test]
    fn test_mock_display_stores_and_clips_pixels() {
        let mut display = MockDisplay::new(10, 10);
        display
            .draw_iter([
                Pixel(Point::new(2, 3), Gray4::BLACK),
                Pixel(Point::new(-1, 3), Gray4::BLACK),
                Pixel(Point::new(10, 0), Gray4::BLACK),
            ])
            .unwrap();
        assert_eq!(display.pixel_at(2, 3), Some(Gray4::BLACK));
        assert_eq!(display.pixel_at(0, 0), Some(Gray4::WHITE));
        assert_eq!(display.pixel_at(10, 0), None);
    }

    #[tokio::test]
    async fn test_mock_input() {
        let mut input = MockInput::new();

        input
            .add_event(InputEvent::ButtonPress(Button::CallNurse))
            .unwrap();
        input.add_event(InputEvent::Touch { x: 5, y: 7 }).unwrap();

        assert_eq!(
            input.poll_event(),
            Some(InputEvent::ButtonPress(Button::CallNurse))
        );
        assert_eq!(input.wait_for_event().await, InputEvent::Touch { x: 5, y: 7 });
        assert_eq!(input.poll_event(), None);
    }

    #[tokio::test]
    async fn test_mock_transmitter_failure_is_scripted() {
        let mut tx = MockTransmitter::failing(TransmissionError::Timeout);
        assert_eq!(
            tx.send(CallType::NurseAssistance).await,
            Err(TransmissionError::Timeout)
        );
        assert_eq!(tx.sent(), &[CallType::NurseAssistance]);
    }

    #[test]
    fn test_recording_log_clones_share_buffer() {
        let log = RecordingLog::new();
        let handle = log.clone();
        log.info(format_args!("hello {}", 42));
        assert!(handle.contains(LogLevel::Info, "hello 42"));
        assert!(!handle.contains(LogLevel::Debug, "hello"));
        handle.clear();
        assert!(log.records().is_empty());
    }
}
