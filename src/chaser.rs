//! LED chaser sequencing with hardware abstraction.
//!
//! Provides [`Chaser`] which maps a circular step index to a single lit LED
//! within a fixed, ordered sequence. Also defines the [`LedDriver`] trait for
//! hardware abstraction.

use crate::types::{ChaserError, LedId};
use heapless::Vec;

/// Trait for abstracting the LED bank hardware.
///
/// Implement this for your LED hardware (GPIO pins, port registers, shift
/// registers, etc.) to allow the chaser and the application state machine to
/// control it. Handle any hardware errors internally - these methods cannot
/// fail.
///
/// Two ready-made implementations are provided in [`crate::led`]: one GPIO pin
/// per LED, and masked writes over two 16-bit port registers.
pub trait LedDriver {
    /// Sets a single LED to the given logical on/off state.
    ///
    /// Implementations should silently ignore ids they do not map.
    fn set(&mut self, led: LedId, on: bool);

    /// Turns every LED of the bank on.
    fn all_on(&mut self);

    /// Turns every LED of the bank off.
    fn all_off(&mut self);

    /// Turns a single LED on.
    fn on(&mut self, led: LedId) {
        self.set(led, true);
    }

    /// Turns a single LED off.
    fn off(&mut self, led: LedId) {
        self.set(led, false);
    }
}

/// Maps a circular step index to a single-LED-lit pattern.
///
/// The chaser owns its position and an ordered list of LED identifiers. Each
/// [`advance`](Chaser::advance) moves one step forward, wrapping at the end of
/// the sequence; [`apply`](Chaser::apply) turns all LEDs off and then lights
/// exactly the LED at the current position. Turning off before on avoids any
/// intermediate pattern with two LEDs lit.
///
/// # Type Parameters
/// * `N` - Maximum number of LEDs in the sequence
#[derive(Debug, Clone)]
pub struct Chaser<const N: usize> {
    sequence: Vec<LedId, N>,
    position: usize,
}

impl<const N: usize> Chaser<N> {
    /// Creates a new chaser builder.
    pub fn builder() -> ChaserBuilder<N> {
        ChaserBuilder::new()
    }

    /// Creates a chaser over the identity order `LedId(0) .. LedId(N - 1)`.
    pub fn ascending() -> Self {
        let mut sequence = Vec::new();
        for id in 0..N {
            // Cannot overflow: exactly N pushes into a Vec of capacity N.
            let _ = sequence.push(LedId(id));
        }
        Self {
            sequence,
            position: 0,
        }
    }

    /// Advances the position by one step, wrapping at the sequence end.
    ///
    /// A position that was forced out of range recovers to the start of the
    /// sequence on the next advance.
    pub fn advance(&mut self) {
        if self.sequence.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.sequence.len();
    }

    /// Applies the current pattern: all LEDs off, then exactly the LED at the
    /// current position on.
    ///
    /// An out-of-range position leaves all LEDs off. That path is unreachable
    /// when the position is only moved through [`advance`](Chaser::advance);
    /// it exists as the safe fallback for a corrupted or forced position.
    pub fn apply<L: LedDriver>(&self, leds: &mut L) {
        leds.all_off();
        if let Some(&led) = self.sequence.get(self.position) {
            leds.on(led);
        }
    }

    /// Returns the current step position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Overwrites the position without range checking.
    ///
    /// Deliberately permissive: any caller may force any position, including
    /// one outside the sequence, which then renders as all-LEDs-off. Normal
    /// operation never calls this.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns the number of LEDs in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the sequence holds no LEDs.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the LED id at the given step, if in range.
    pub fn led_at(&self, position: usize) -> Option<LedId> {
        self.sequence.get(position).copied()
    }
}

/// Builder for constructing validated chaser sequences.
#[derive(Debug)]
pub struct ChaserBuilder<const N: usize> {
    sequence: Vec<LedId, N>,
    overflowed: bool,
}

impl<const N: usize> ChaserBuilder<N> {
    /// Creates a new empty chaser builder.
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            overflowed: false,
        }
    }

    /// Appends an LED to the sequence.
    ///
    /// Appending beyond the capacity is reported by
    /// [`build`](ChaserBuilder::build), not here.
    pub fn led(mut self, id: LedId) -> Self {
        if self.sequence.push(id).is_err() {
            self.overflowed = true;
        }
        self
    }

    /// Builds and validates the chaser, starting at position 0.
    ///
    /// # Errors
    /// * `EmptySequence` - No LEDs were added
    /// * `CapacityExceeded` - More than `N` LEDs were added
    pub fn build(self) -> Result<Chaser<N>, ChaserError> {
        if self.overflowed {
            return Err(ChaserError::CapacityExceeded);
        }
        if self.sequence.is_empty() {
            return Err(ChaserError::EmptySequence);
        }

        Ok(Chaser {
            sequence: self.sequence,
            position: 0,
        })
    }
}

impl<const N: usize> Default for ChaserBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
