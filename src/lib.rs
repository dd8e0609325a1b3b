//! Control logic for "Keep Copying And Nobody Explodes", a two-player
//! memory and reflex game on a small OLED, a joystick, a touch pad and a
//! pair of DotStar LEDs.
//!
//! The library is the board-independent core: five run-to-completion
//! services, the scheduler that moves events between them, and the pure
//! halves of the drivers. The board runtime lives behind the
//! `esp-hal-runtime` feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drivers;
pub mod error;
pub mod framework;
pub mod hal;
pub mod input;
pub mod model;
pub mod render;
pub mod services;
pub mod telemetry;

pub use config::{active_config, GameConfig};
pub use error::ServiceError;
pub use framework::{Scheduler, Service, ServiceOutput};
pub use hal::{InputPin, Peripherals};
pub use model::{Event, LedCommand, Screen, ScreenKind, ServiceId, Symbol, TimerId};
