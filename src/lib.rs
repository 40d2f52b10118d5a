#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`App`**: the polled application state machine (`Init` → `Wait` ⇄ `ServiceTasks`)
//! - **`Chaser`**: maps a circular step index to exactly one lit LED in a fixed order
//! - **`TickGate`**: counts ticks through the startup settle delay, then requests one service pass per tick
//! - **`StateSignal`**: single-slot transition handoff between the tick callback and the run loop
//! - **`LedDriver`**, **`AdcSource`**, **`StatusDisplay`**, **`TickTimer`**: traits to implement for your hardware
//! - **`PinLeds`** / **`PortLeds`**: ready-made LED backends (one GPIO pin per LED, or masked port-register writes)
//!
//! The crate contains no hardware access of its own and is fully testable on
//! the host; all pin, ADC, LCD and timer work happens behind the traits.

pub mod app;
pub mod chaser;
pub mod led;
pub mod timing;
pub mod types;

pub use app::{AdcSource, App, PanelConfig, StatusDisplay, TickTimer};
pub use chaser::{Chaser, ChaserBuilder, LedDriver};
pub use led::{PinLeds, Port, PortLeds, PortWriter};
pub use timing::{SETTLE_TICKS, StateSignal, TICK_PERIOD_MS, TickGate};
pub use types::{AdcReading, AppState, ChaserError, LedId, Polarity};
