mod event;
mod ids;
mod led;
mod screen;
mod symbol;

pub use event::{AxisSample, Event, InputVerdict};
pub use ids::{ServiceId, TimerId};
pub use led::{LedColor, LedCommand, LedFrame};
pub use screen::{PlayUpdate, Screen, ScreenContext, ScreenKind};
pub use symbol::Symbol;
