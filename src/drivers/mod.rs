//! Board-independent halves of the output drivers: byte encoders and
//! framebuffers the firmware hands to its buses.

pub mod dotstar;
#[cfg(feature = "graphics")]
pub mod paged_oled;
