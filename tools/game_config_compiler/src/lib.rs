use std::{fmt, fs, path::Path};

use serde::Deserialize;

const MAX_PLAYTIME_SECONDS: u32 = 15;
const MAX_SEQUENCE_LENGTH: u32 = 150;
const MAX_ADC_VALUE: u32 = 4095;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameFile {
    pub timing: TimingSection,
    pub round: RoundSection,
    pub joystick: JoystickSection,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingSection {
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

impl TimingSection {
    fn fields(&self) -> [(&'static str, u32); 11] {
        [
            ("ready_ms", self.ready_ms),
            ("direction_ms", self.direction_ms),
            ("cue_hold_ms", self.cue_hold_ms),
            ("go_ms", self.go_ms),
            ("input_tick_ms", self.input_tick_ms),
            ("demo_countdown_ms", self.demo_countdown_ms),
            ("demo_screen_ms", self.demo_screen_ms),
            ("game_over_ms", self.game_over_ms),
            ("idle_reset_ms", self.idle_reset_ms),
            ("led_pattern_ms", self.led_pattern_ms),
            ("scheduler_quantum_ms", self.scheduler_quantum_ms),
        ]
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundSection {
    pub initial_length: u32,
    pub playtime_seconds: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoystickSection {
    pub adc_max: u32,
    pub deadzone: u32,
    pub super_margin: u32,
}

#[derive(Debug)]
pub enum ConfigCompilerError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigCompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigCompilerError {}

pub fn parse_game_file(path: &Path) -> Result<GameFile, ConfigCompilerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ConfigCompilerError::Io(format!("{}: {e}", path.display())))?;
    toml::from_str(&raw).map_err(|e| ConfigCompilerError::Parse(e.to_string()))
}

pub fn validate_config(config: &GameFile) -> Result<(), ConfigCompilerError> {
    for (name, value) in config.timing.fields() {
        if value == 0 {
            return Err(invalid(format!("timing.{name} must be > 0")));
        }
    }
    if config.timing.cue_hold_ms >= config.timing.direction_ms {
        return Err(invalid("timing.cue_hold_ms must be < timing.direction_ms".to_string()));
    }

    let round = &config.round;
    if !(1..=MAX_PLAYTIME_SECONDS).contains(&round.playtime_seconds) {
        return Err(invalid(format!(
            "round.playtime_seconds must be within 1..={MAX_PLAYTIME_SECONDS}"
        )));
    }
    if !(1..=MAX_SEQUENCE_LENGTH).contains(&round.initial_length) {
        return Err(invalid(format!(
            "round.initial_length must be within 1..={MAX_SEQUENCE_LENGTH}"
        )));
    }

    let joystick = &config.joystick;
    if !(1..=MAX_ADC_VALUE).contains(&joystick.adc_max) {
        return Err(invalid(format!(
            "joystick.adc_max must be within 1..={MAX_ADC_VALUE}"
        )));
    }
    if joystick.deadzone == 0 {
        return Err(invalid("joystick.deadzone must be > 0".to_string()));
    }
    if joystick.super_margin == 0 {
        return Err(invalid("joystick.super_margin must be > 0".to_string()));
    }
    if joystick.deadzone + joystick.super_margin >= joystick.adc_max / 2 {
        return Err(invalid(
            "joystick.deadzone + joystick.super_margin must be < joystick.adc_max / 2"
                .to_string(),
        ));
    }

    Ok(())
}

pub fn render_generated_config(config: &GameFile) -> String {
    let mut out = String::new();
    out.push_str("// @generated by game_config_compiler. Do not edit.\n");
    out.push_str("pub const GAME_CONFIG: GameConfig = GameConfig {\n");

    out.push_str("    timing: TimingConfig {\n");
    for (name, value) in config.timing.fields() {
        out.push_str(&format!("        {name}: {value},\n"));
    }
    out.push_str("    },\n");

    out.push_str("    round: RoundConfig {\n");
    out.push_str(&format!(
        "        initial_length: {},\n",
        config.round.initial_length
    ));
    out.push_str(&format!(
        "        playtime_seconds: {},\n",
        config.round.playtime_seconds
    ));
    out.push_str("    },\n");

    out.push_str("    joystick: JoystickConfig {\n");
    out.push_str(&format!("        adc_max: {},\n", config.joystick.adc_max));
    out.push_str(&format!("        deadzone: {},\n", config.joystick.deadzone));
    out.push_str(&format!(
        "        super_margin: {},\n",
        config.joystick.super_margin
    ));
    out.push_str("    },\n");

    out.push_str("};\n");
    out
}

pub fn generate_from_path(path: &Path) -> Result<String, ConfigCompilerError> {
    let config = parse_game_file(path)?;
    validate_config(&config)?;
    Ok(render_generated_config(&config))
}

fn invalid(msg: String) -> ConfigCompilerError {
    ConfigCompilerError::Validation(msg)
}
