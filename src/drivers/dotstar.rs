//! APA102 ("DotStar") wire format for the two-LED chain.

use crate::model::{LedColor, LedFrame};

const START_FRAME_LEN: usize = 4;
const LED_FRAME_LEN: usize = 4;
const LED_COUNT: usize = 2;
/// Two zero end frames push the last LED's data through the chain.
const END_FRAME_LEN: usize = 8;
const GLOBAL_HEADER: u8 = 0xE0;

pub const FRAME_LEN: usize = START_FRAME_LEN + LED_COUNT * LED_FRAME_LEN + END_FRAME_LEN;

/// SPI bytes for one update: start frame, one BGR frame per LED with 5-bit
/// global brightness, end frames.
pub fn encode_frame(frame: &LedFrame) -> [u8; FRAME_LEN] {
    let mut out = [0u8; FRAME_LEN];
    for (index, color) in frame.leds.iter().enumerate() {
        let offset = START_FRAME_LEN + index * LED_FRAME_LEN;
        out[offset..offset + LED_FRAME_LEN].copy_from_slice(&encode_led(*color));
    }
    out
}

fn encode_led(color: LedColor) -> [u8; LED_FRAME_LEN] {
    [
        GLOBAL_HEADER | (color.brightness >> 3),
        color.blue,
        color.green,
        color.red,
    ]
}
