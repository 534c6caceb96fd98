//! Swipe configuration
//!
//! Caller-supplied, read-only to the widget. Validated once at
//! construction; the gesture math assumes a positive page width and a
//! sensitivity percentage inside `1..=100`.

use thiserror::Error;

/// Default flip sensitivity when the caller does not specify one.
pub const DEFAULT_FLIP_SENSITIVITY: u8 = 50;

/// Configuration errors surfaced when building a swiper.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwipeError {
    #[error("page width must be positive, got {width}")]
    InvalidWidth { width: f32 },

    #[error("flip sensitivity must be in 1..=100, got {sensitivity}")]
    InvalidSensitivity { sensitivity: u8 },
}

/// Configuration for swipe behavior.
///
/// `width` is the pixel width of one page (and of the visible viewport).
/// `flip_sensitivity` is the percentage of the page width a gesture must
/// travel before the page flips; higher values make flipping harder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeConfig {
    /// Pixel width of one page / the visible viewport
    pub width: f32,
    /// Percentage of page width that must be crossed to flip (1-100)
    pub flip_sensitivity: u8,
}

impl SwipeConfig {
    /// Create a config with the default flip sensitivity.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            flip_sensitivity: DEFAULT_FLIP_SENSITIVITY,
        }
    }

    /// Set the flip sensitivity percentage (1-100).
    pub fn with_flip_sensitivity(mut self, sensitivity: u8) -> Self {
        self.flip_sensitivity = sensitivity;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SwipeError> {
        if !(self.width > 0.0) {
            return Err(SwipeError::InvalidWidth { width: self.width });
        }
        if self.flip_sensitivity == 0 || self.flip_sensitivity > 100 {
            return Err(SwipeError::InvalidSensitivity {
                sensitivity: self.flip_sensitivity,
            });
        }
        Ok(())
    }

    /// Fraction of the page width a gesture must cross to flip.
    pub fn threshold_fraction(&self) -> f32 {
        f32::from(self.flip_sensitivity) / 100.0
    }
}
