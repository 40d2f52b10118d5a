//! LED driver backends.
//!
//! Two interchangeable implementations of [`LedDriver`]: [`PinLeds`] drives
//! one GPIO pin per LED through `embedded-hal`, [`PortLeds`] drives a possibly
//! non-contiguous set of bits spread over two 16-bit port registers with
//! precomputed masks. The chaser's logical contract (exactly one LED lit,
//! advancing circularly) is identical either way.

use crate::chaser::LedDriver;
use crate::types::{LedId, Polarity};
use embedded_hal::digital::OutputPin;

/// One GPIO pin per LED.
///
/// Pin errors are handled internally (discarded) - the [`LedDriver`] contract
/// cannot fail. LED `LedId(i)` maps to `pins[i]`; ids at or beyond `N` are
/// ignored.
pub struct PinLeds<P: OutputPin, const N: usize> {
    pins: [P; N],
    polarity: Polarity,
}

impl<P: OutputPin, const N: usize> PinLeds<P, N> {
    /// Creates a driver over the given pins, all LEDs turned off.
    pub fn new(pins: [P; N], polarity: Polarity) -> Self {
        let mut leds = Self { pins, polarity };
        leds.all_off();
        leds
    }

    /// Consumes the driver and returns the pins.
    pub fn release(self) -> [P; N] {
        self.pins
    }

    /// Returns the pins without releasing them.
    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }

    fn drive(pin: &mut P, polarity: Polarity, on: bool) {
        let high = (polarity == Polarity::ActiveHigh) == on;
        if high {
            let _ = pin.set_high();
        } else {
            let _ = pin.set_low();
        }
    }
}

impl<P: OutputPin, const N: usize> LedDriver for PinLeds<P, N> {
    fn set(&mut self, led: LedId, on: bool) {
        if let Some(pin) = self.pins.get_mut(led.0) {
            Self::drive(pin, self.polarity, on);
        }
    }

    fn all_on(&mut self) {
        for pin in &mut self.pins {
            Self::drive(pin, self.polarity, true);
        }
    }

    fn all_off(&mut self) {
        for pin in &mut self.pins {
            Self::drive(pin, self.polarity, false);
        }
    }
}

/// One of the two 16-bit hardware ports carrying LED pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// The first LED port register.
    A,

    /// The second LED port register.
    B,
}

/// Raw bit-level access to the two LED port registers.
///
/// Implement this over your platform's port registers. `set_bits` drives the
/// masked pins high, `clear_bits` drives them low; logical on/off and polarity
/// are resolved by [`PortLeds`] before these are called. Handle any hardware
/// errors internally - these methods cannot fail.
pub trait PortWriter {
    /// Drives the masked pins of `port` high.
    fn set_bits(&mut self, port: Port, mask: u16);

    /// Drives the masked pins of `port` low.
    fn clear_bits(&mut self, port: Port, mask: u16);
}

/// LEDs addressed through precomputed bit masks on two port registers.
///
/// Each LED is described by its port and bit mask. The all-LEDs masks for both
/// ports are computed once at construction, so [`all_on`](LedDriver::all_on)
/// and [`all_off`](LedDriver::all_off) are two register writes each. LED
/// `LedId(i)` maps to `pins[i]`; ids at or beyond `N` are ignored.
pub struct PortLeds<W: PortWriter, const N: usize> {
    writer: W,
    pins: [(Port, u16); N],
    mask_a: u16,
    mask_b: u16,
    polarity: Polarity,
}

impl<W: PortWriter, const N: usize> PortLeds<W, N> {
    /// Creates a driver over the given pin map, all LEDs turned off.
    pub fn new(writer: W, pins: [(Port, u16); N], polarity: Polarity) -> Self {
        let mut mask_a = 0;
        let mut mask_b = 0;
        for &(port, mask) in &pins {
            match port {
                Port::A => mask_a |= mask,
                Port::B => mask_b |= mask,
            }
        }

        let mut leds = Self {
            writer,
            pins,
            mask_a,
            mask_b,
            polarity,
        };
        leds.all_off();
        leds
    }

    /// Consumes the driver and returns the port writer.
    pub fn release(self) -> W {
        self.writer
    }

    /// Returns the combined mask of LED pins on the given port.
    pub fn port_mask(&self, port: Port) -> u16 {
        match port {
            Port::A => self.mask_a,
            Port::B => self.mask_b,
        }
    }

    fn write(&mut self, port: Port, mask: u16, on: bool) {
        let high = (self.polarity == Polarity::ActiveHigh) == on;
        if high {
            self.writer.set_bits(port, mask);
        } else {
            self.writer.clear_bits(port, mask);
        }
    }
}

impl<W: PortWriter, const N: usize> LedDriver for PortLeds<W, N> {
    fn set(&mut self, led: LedId, on: bool) {
        if let Some(&(port, mask)) = self.pins.get(led.0) {
            self.write(port, mask, on);
        }
    }

    fn all_on(&mut self) {
        let (mask_a, mask_b) = (self.mask_a, self.mask_b);
        self.write(Port::A, mask_a, true);
        self.write(Port::B, mask_b, true);
    }

    fn all_off(&mut self) {
        let (mask_a, mask_b) = (self.mask_a, self.mask_b);
        self.write(Port::A, mask_a, false);
        self.write(Port::B, mask_b, false);
    }
}
