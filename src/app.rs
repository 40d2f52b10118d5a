//! Polled application state machine.
//!
//! [`App`] ties the chaser, the analog inputs and the character display
//! together: a host run loop calls [`tasks`](App::tasks) unconditionally and
//! as frequently as possible, while the periodic tick callback feeds
//! transition requests through a [`StateSignal`]. No state body blocks or
//! yields; one call executes exactly one state body.

use crate::chaser::{Chaser, LedDriver};
use crate::timing::{StateSignal, TICK_PERIOD_MS};
use crate::types::{AdcReading, AppState};
use core::fmt::Write;
use heapless::String;

/// Trait for abstracting the analog input hardware.
///
/// Both channels are converted synchronously; a blocking implementation is
/// acceptable. Handle any hardware errors internally - these methods cannot
/// fail.
pub trait AdcSource {
    /// One-time initialization of the analog subsystem.
    fn init(&mut self);

    /// Samples both channels now.
    fn read_all(&mut self) -> AdcReading;
}

/// Trait for abstracting the character display hardware.
///
/// Coordinates are 1-based (column 1, row 1 is the top-left cell). No call
/// returns a value to consult; handle any hardware errors internally.
pub trait StatusDisplay {
    /// One-time initialization of the display.
    fn init(&mut self);

    /// Turns the backlight on.
    fn backlight_on(&mut self);

    /// Positions the cursor at the given 1-based column and row.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Writes text at the current cursor position.
    fn write_str(&mut self, text: &str);
}

/// Trait for starting the periodic tick source.
///
/// The platform invokes the registered tick callback at the configured period
/// once started; only the start operation matters to the state machine.
pub trait TickTimer {
    /// Starts the periodic tick at the given period.
    fn start(&mut self, period_ms: u32);
}

/// Static text and timing configuration for the panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelConfig {
    /// Identification text shown on display row 1 during startup.
    pub title: &'static str,

    /// Author line shown on display row 2 during startup.
    pub author: &'static str,

    /// Period handed to [`TickTimer::start`] at the end of startup.
    pub tick_period_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "TP0 LED+AD 2024-25",
            author: "Mendes Leo",
            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}

/// The application state machine.
///
/// Owns all application context explicitly (no process-wide statics): the
/// current state, the chaser, the most recent ADC reading and the
/// first-service flag, plus the hardware facades it drives. Constructing the
/// machine is the one-time initialization step; it starts in
/// [`AppState::Init`] and performs hardware bring-up on the first
/// [`tasks`](App::tasks) call.
///
/// # Type Parameters
/// * `'s` - Lifetime of the shared transition signal
/// * `L` - LED driver implementation
/// * `A` - ADC implementation
/// * `D` - Display implementation
/// * `T` - Tick timer implementation
/// * `N` - Maximum number of LEDs in the chaser sequence
pub struct App<'s, L, A, D, T, const N: usize>
where
    L: LedDriver,
    A: AdcSource,
    D: StatusDisplay,
    T: TickTimer,
{
    signal: &'s StateSignal,
    state: AppState,
    chaser: Chaser<N>,
    leds: L,
    adc: A,
    display: D,
    timer: T,
    config: PanelConfig,
    adc_reading: AdcReading,
    first_service: bool,
}

impl<'s, L, A, D, T, const N: usize> App<'s, L, A, D, T, N>
where
    L: LedDriver,
    A: AdcSource,
    D: StatusDisplay,
    T: TickTimer,
{
    /// Creates the state machine in its initial state.
    ///
    /// Call exactly once before the first [`tasks`](App::tasks) call. The
    /// `signal` reference is shared with the tick callback, which posts
    /// transition requests into it.
    pub fn new(
        signal: &'s StateSignal,
        leds: L,
        adc: A,
        display: D,
        timer: T,
        chaser: Chaser<N>,
        config: PanelConfig,
    ) -> Self {
        Self {
            signal,
            state: AppState::Init,
            chaser,
            leds,
            adc,
            display,
            timer,
            config,
            adc_reading: AdcReading::default(),
            first_service: true,
        }
    }

    /// Drives one step of application behavior.
    ///
    /// The host run loop calls this unconditionally and frequently; the
    /// machine does no internal waiting. Pending transition requests from the
    /// tick callback are consumed first (this poll is their sole consumer),
    /// then exactly one state body runs:
    ///
    /// - `Init`: one-time startup - display bring-up and identification text,
    ///   ADC init, all LEDs on, tick timer start - then `Wait`.
    /// - `Wait`: no-op. Keeps service work gated on the tick, not on the
    ///   polling frequency.
    /// - `ServiceTasks`: first entry ever turns all LEDs off without touching
    ///   the chaser; every later entry advances the chaser one step and
    ///   applies its pattern. Both paths then sample the ADC, render the
    ///   reading on row 3, and return to `Wait`.
    pub fn tasks(&mut self) {
        if let Some(requested) = self.signal.take() {
            self.state = requested;
        }

        match self.state {
            AppState::Init => self.init_body(),
            AppState::Wait => {}
            AppState::ServiceTasks => self.service_body(),
        }
    }

    /// Unconditionally overwrites the current state.
    ///
    /// No validation and no transition-table enforcement: any caller may
    /// request any state. This permissiveness is deliberate - the tick
    /// callback path and the state bodies are the only intended callers, but
    /// the escape hatch also allows states unreachable through the documented
    /// transition diagram (for instance forcing `ServiceTasks` before `Init`
    /// has completed).
    pub fn update_state(&mut self, state: AppState) {
        self.state = state;
    }

    /// Returns the current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Returns the most recent ADC reading.
    pub fn adc_reading(&self) -> AdcReading {
        self.adc_reading
    }

    /// Returns the chaser.
    pub fn chaser(&self) -> &Chaser<N> {
        &self.chaser
    }

    fn init_body(&mut self) {
        self.display.init();
        self.display.backlight_on();
        self.display.set_cursor(1, 1);
        self.display.write_str(self.config.title);
        self.display.set_cursor(1, 2);
        self.display.write_str(self.config.author);

        self.adc.init();
        self.leds.all_on();
        self.timer.start(self.config.tick_period_ms);

        self.update_state(AppState::Wait);
    }

    fn service_body(&mut self) {
        if self.first_service {
            self.leds.all_off();
            self.first_service = false;
        } else {
            self.chaser.advance();
            self.chaser.apply(&mut self.leds);
        }

        self.adc_reading = self.adc.read_all();

        let mut line: String<20> = String::new();
        let _ = write!(
            line,
            "Ch0 {:4} Ch1 {:4}",
            self.adc_reading.channel0, self.adc_reading.channel1
        );
        self.display.set_cursor(1, 3);
        self.display.write_str(&line);

        self.update_state(AppState::Wait);
    }
}
