//! Shared test infrastructure for chaser-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use chaser_panel::{
    AdcReading, AdcSource, LedDriver, LedId, Port, PortWriter, StatusDisplay, TickTimer,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

// ============================================================================
// Mock LED bank
// ============================================================================

#[derive(Default)]
struct LedBankState {
    lit: [bool; 8],
    all_on_calls: usize,
    all_off_calls: usize,
}

/// Mock LED bank with shared, inspectable state.
///
/// Clones share the same underlying state, so a test can keep a handle while
/// the application owns the driver.
#[derive(Clone, Default)]
pub struct MockLeds {
    state: Rc<RefCell<LedBankState>>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the LEDs currently lit, in ascending order.
    pub fn lit_ids(&self) -> Vec<usize> {
        self.state
            .borrow()
            .lit
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn all_on_calls(&self) -> usize {
        self.state.borrow().all_on_calls
    }

    pub fn all_off_calls(&self) -> usize {
        self.state.borrow().all_off_calls
    }
}

impl LedDriver for MockLeds {
    fn set(&mut self, led: LedId, on: bool) {
        if let Some(slot) = self.state.borrow_mut().lit.get_mut(led.0) {
            *slot = on;
        }
    }

    fn all_on(&mut self) {
        let mut state = self.state.borrow_mut();
        state.lit = [true; 8];
        state.all_on_calls += 1;
    }

    fn all_off(&mut self) {
        let mut state = self.state.borrow_mut();
        state.lit = [false; 8];
        state.all_off_calls += 1;
    }
}

// ============================================================================
// Mock ADC
// ============================================================================

#[derive(Default)]
struct AdcState {
    scripted: VecDeque<AdcReading>,
    last: AdcReading,
    init_calls: usize,
    read_calls: usize,
}

/// Mock ADC returning scripted readings.
///
/// Scripted readings are consumed in order; once exhausted, the last one
/// repeats.
#[derive(Clone, Default)]
pub struct MockAdc {
    state: Rc<RefCell<AdcState>>,
}

impl MockAdc {
    pub fn new(channel0: u16, channel1: u16) -> Self {
        let adc = Self::default();
        adc.push_reading(channel0, channel1);
        adc
    }

    /// Appends a reading to the script.
    pub fn push_reading(&self, channel0: u16, channel1: u16) {
        self.state
            .borrow_mut()
            .scripted
            .push_back(AdcReading { channel0, channel1 });
    }

    pub fn init_calls(&self) -> usize {
        self.state.borrow().init_calls
    }

    pub fn read_calls(&self) -> usize {
        self.state.borrow().read_calls
    }
}

impl AdcSource for MockAdc {
    fn init(&mut self) {
        self.state.borrow_mut().init_calls += 1;
    }

    fn read_all(&mut self) -> AdcReading {
        let mut state = self.state.borrow_mut();
        state.read_calls += 1;
        if let Some(reading) = state.scripted.pop_front() {
            state.last = reading;
        }
        state.last
    }
}

// ============================================================================
// Mock display
// ============================================================================

#[derive(Default)]
struct DisplayState {
    cursor: (u8, u8),
    writes: Vec<((u8, u8), String)>,
    init_calls: usize,
    backlight_calls: usize,
}

/// Mock display recording every write together with its cursor position.
#[derive(Clone, Default)]
pub struct MockDisplay {
    state: Rc<RefCell<DisplayState>>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far as `((col, row), text)` pairs.
    pub fn writes(&self) -> Vec<((u8, u8), String)> {
        self.state.borrow().writes.clone()
    }

    /// The most recent write, if any.
    pub fn last_write(&self) -> Option<((u8, u8), String)> {
        self.state.borrow().writes.last().cloned()
    }

    pub fn init_calls(&self) -> usize {
        self.state.borrow().init_calls
    }

    pub fn backlight_calls(&self) -> usize {
        self.state.borrow().backlight_calls
    }
}

impl StatusDisplay for MockDisplay {
    fn init(&mut self) {
        self.state.borrow_mut().init_calls += 1;
    }

    fn backlight_on(&mut self) {
        self.state.borrow_mut().backlight_calls += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.state.borrow_mut().cursor = (col, row);
    }

    fn write_str(&mut self, text: &str) {
        let mut state = self.state.borrow_mut();
        let cursor = state.cursor;
        state.writes.push((cursor, text.to_string()));
    }
}

// ============================================================================
// Mock tick timer
// ============================================================================

#[derive(Default)]
struct TimerState {
    started_with: Option<u32>,
    start_calls: usize,
}

/// Mock tick timer recording start calls.
#[derive(Clone, Default)]
pub struct MockTimer {
    state: Rc<RefCell<TimerState>>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_with(&self) -> Option<u32> {
        self.state.borrow().started_with
    }

    pub fn start_calls(&self) -> usize {
        self.state.borrow().start_calls
    }
}

impl TickTimer for MockTimer {
    fn start(&mut self, period_ms: u32) {
        let mut state = self.state.borrow_mut();
        state.started_with = Some(period_ms);
        state.start_calls += 1;
    }
}

// ============================================================================
// Mock GPIO pin (for the PinLeds backend)
// ============================================================================

/// Mock output pin that remembers its level.
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    pub high: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

// ============================================================================
// Mock port pair (for the PortLeds backend)
// ============================================================================

#[derive(Default)]
struct PortState {
    port_a: u16,
    port_b: u16,
}

/// Mock 16-bit port pair mirroring register bits, with shared state.
#[derive(Clone, Default)]
pub struct MockPorts {
    state: Rc<RefCell<PortState>>,
}

impl MockPorts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn port(&self, port: Port) -> u16 {
        let state = self.state.borrow();
        match port {
            Port::A => state.port_a,
            Port::B => state.port_b,
        }
    }
}

impl PortWriter for MockPorts {
    fn set_bits(&mut self, port: Port, mask: u16) {
        let mut state = self.state.borrow_mut();
        match port {
            Port::A => state.port_a |= mask,
            Port::B => state.port_b |= mask,
        }
    }

    fn clear_bits(&mut self, port: Port, mask: u16) {
        let mut state = self.state.borrow_mut();
        match port {
            Port::A => state.port_a &= !mask,
            Port::B => state.port_b &= !mask,
        }
    }
}
