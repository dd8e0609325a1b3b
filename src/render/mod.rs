//! Screen content for the 128x64 OLED: text lines per screen kind and, with
//! the `graphics` feature, a painter that lays them out on a draw target.

#[cfg(feature = "graphics")]
mod screens;
pub mod text;

#[cfg(feature = "graphics")]
pub use screens::ScreenPainter;
pub use text::{screen_lines, Line, Lines};
