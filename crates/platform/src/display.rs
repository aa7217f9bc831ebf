//! Display abstraction layer

use embedded_graphics::draw_target::DrawTarget;

/// Display driver trait for the bedside panel
pub trait DisplayDriver: DrawTarget {
    /// Error type for display operations
    type DriverError: core::fmt::Debug;

    /// Perform full display refresh (slow, redraws every pixel)
    fn refresh_full(&mut self)
        -> impl core::future::Future<Output = Result<(), Self::DriverError>>;

    /// Perform partial refresh (fast, only changed regions)
    fn refresh_partial(
        &mut self,
    ) -> impl core::future::Future<Output = Result<(), Self::DriverError>>;

    /// Refresh using `mode`
    fn refresh(
        &mut self,
        mode: RefreshMode,
    ) -> impl core::future::Future<Output = Result<(), Self::DriverError>> {
        async move {
            match mode {
                RefreshMode::Full => self.refresh_full().await,
                RefreshMode::Partial => self.refresh_partial().await,
            }
        }
    }
}

/// Refresh modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full refresh - best quality
    Full,
    /// Partial refresh - fast
    Partial,
}

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error
    Communication,
    /// Display busy
    Busy,
    /// Display window was closed
    Closed,
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Communication => write!(f, "Display communication error"),
            Self::Busy => write!(f, "Display is busy"),
            Self::Closed => write!(f, "Display window was closed"),
        }
    }
}
