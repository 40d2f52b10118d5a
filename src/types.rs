//! Core types shared across the crate.

/// The states of the polled application state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// One-time hardware bring-up. Entered exactly once at boot.
    Init,

    /// Idle between ticks. Left only through an external transition request.
    Wait,

    /// One LED/ADC/display service pass. Returns to `Wait` when done.
    ServiceTasks,
}

/// An identifier for an LED within the panel.
///
/// This is a simple wrapper around `usize` that provides type safety for LED
/// identifiers. The meaning of an id (which pin, which port bit) is decided by
/// the [`LedDriver`](crate::chaser::LedDriver) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedId(pub usize);

impl From<usize> for LedId {
    fn from(id: usize) -> Self {
        LedId(id)
    }
}

impl From<LedId> for usize {
    fn from(id: LedId) -> Self {
        id.0
    }
}

/// Electrical polarity of the LED drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// A logically-on LED drives its pin high.
    ActiveHigh,

    /// A logically-on LED drives its pin low.
    ActiveLow,
}

/// The most recent sample of both analog channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcReading {
    /// Channel 0 conversion result.
    pub channel0: u16,

    /// Channel 1 conversion result.
    pub channel1: u16,
}

/// Chaser sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChaserError {
    /// No LEDs provided.
    EmptySequence,

    /// Sequence capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ChaserError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChaserError::EmptySequence => {
                write!(f, "chaser sequence must have at least one LED")
            }
            ChaserError::CapacityExceeded => {
                write!(f, "chaser sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChaserError {}
