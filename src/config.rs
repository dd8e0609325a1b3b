#[derive(Clone, Copy, Debug)]
pub struct TimingConfig {
    pub ready_ms: u32,
    pub direction_ms: u32,
    pub cue_hold_ms: u32,
    pub go_ms: u32,
    pub input_tick_ms: u32,
    pub demo_countdown_ms: u32,
    pub demo_screen_ms: u32,
    pub game_over_ms: u32,
    pub idle_reset_ms: u32,
    pub led_pattern_ms: u32,
    pub scheduler_quantum_ms: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct RoundConfig {
    pub initial_length: u8,
    pub playtime_seconds: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct JoystickConfig {
    pub adc_max: u16,
    pub deadzone: u16,
    pub super_margin: u16,
}

#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub round: RoundConfig,
    pub joystick: JoystickConfig,
}

include!(concat!(env!("OUT_DIR"), "/game_config.rs"));

pub fn active_config() -> &'static GameConfig {
    &GAME_CONFIG
}
