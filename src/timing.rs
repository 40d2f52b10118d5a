//! Tick counting, the startup settle delay, and ISR-to-loop state handoff.
//!
//! The periodic tick callback runs in interrupt context; the state machine is
//! polled from the main loop. [`TickGate`] turns the raw tick stream into a
//! one-time settle delay followed by a service request per tick, and
//! [`StateSignal`] carries those requests across the interrupt boundary as a
//! single overwriting slot.

use crate::types::AppState;
use core::cell::Cell;
use critical_section::Mutex;

/// Tick period the panel is designed around, in milliseconds.
pub const TICK_PERIOD_MS: u32 = 100;

/// Default number of ticks before the first service pass.
///
/// At the 100 ms tick this is roughly a three second settle delay after boot.
pub const SETTLE_TICKS: u32 = 29;

/// Converts the periodic tick into a settle delay followed by a steady stream
/// of service requests.
///
/// Until the configured number of ticks has elapsed, [`on_tick`](TickGate::on_tick)
/// only counts. On the tick that reaches the threshold it latches the settled
/// flag and emits the first [`AppState::ServiceTasks`] request; every tick
/// after that emits another one, unconditionally. The flag is never cleared
/// and the counter stops once it has served its purpose.
#[derive(Debug, Clone)]
pub struct TickGate {
    ticks: u32,
    settled: bool,
    settle_ticks: u32,
}

impl TickGate {
    /// Creates a gate that settles after the given number of ticks.
    pub const fn new(settle_ticks: u32) -> Self {
        Self {
            ticks: 0,
            settled: false,
            settle_ticks,
        }
    }

    /// Processes one tick and returns the transition to request, if any.
    pub fn on_tick(&mut self) -> Option<AppState> {
        if !self.settled {
            self.ticks += 1;
            if self.ticks < self.settle_ticks {
                return None;
            }
            self.settled = true;
        }
        Some(AppState::ServiceTasks)
    }

    /// Processes one tick and posts the resulting request into `signal`.
    ///
    /// Convenience form of [`on_tick`](TickGate::on_tick) for tick callbacks
    /// that deliver straight into a shared [`StateSignal`].
    pub fn tick(&mut self, signal: &StateSignal) {
        if let Some(state) = self.on_tick() {
            signal.request(state);
        }
    }

    /// Returns true once the settle delay has elapsed.
    pub fn has_settled(&self) -> bool {
        self.settled
    }

    /// Returns the number of ticks counted during the settle delay.
    pub fn tick_count(&self) -> u32 {
        self.ticks
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new(SETTLE_TICKS)
    }
}

/// A single-slot transition request shared between the tick callback and the
/// polled run loop.
///
/// The tick callback writes requests with [`request`](StateSignal::request);
/// the run loop is the sole consumer through [`take`](StateSignal::take). A
/// new request overwrites an unconsumed one, so requests arriving faster than
/// the loop polls are dropped silently - skipped chaser steps are accepted
/// rather than compensated for.
///
/// Interior mutability is protected by a critical section, making the slot
/// safe to share with interrupt context on targets without atomicity
/// guarantees for word writes.
pub struct StateSignal {
    request: Mutex<Cell<Option<AppState>>>,
}

impl StateSignal {
    /// Creates an empty signal. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            request: Mutex::new(Cell::new(None)),
        }
    }

    /// Posts a transition request, replacing any unconsumed one.
    pub fn request(&self, state: AppState) {
        critical_section::with(|cs| self.request.borrow(cs).set(Some(state)));
    }

    /// Takes the pending request, leaving the slot empty.
    pub fn take(&self) -> Option<AppState> {
        critical_section::with(|cs| self.request.borrow(cs).take())
    }
}

impl Default for StateSignal {
    fn default() -> Self {
        Self::new()
    }
}
