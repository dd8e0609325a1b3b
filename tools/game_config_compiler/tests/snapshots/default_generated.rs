// @generated by game_config_compiler. Do not edit.
pub const GAME_CONFIG: GameConfig = GameConfig {
    timing: TimingConfig {
        ready_ms: 1000,
        direction_ms: 700,
        cue_hold_ms: 500,
        go_ms: 1000,
        input_tick_ms: 1000,
        demo_countdown_ms: 20000,
        demo_screen_ms: 2000,
        game_over_ms: 30000,
        idle_reset_ms: 30000,
        led_pattern_ms: 250,
        scheduler_quantum_ms: 10,
    },
    round: RoundConfig {
        initial_length: 4,
        playtime_seconds: 15,
    },
    joystick: JoystickConfig {
        adc_max: 4095,
        deadzone: 200,
        super_margin: 300,
    },
};
