use crate::{
    config::JoystickConfig,
    model::{AxisSample, Symbol},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Deflection {
    Neutral,
    Below { full: bool },
    Above { full: bool },
}

impl Deflection {
    fn of(value: u16, neutral: u16, config: &JoystickConfig) -> (Self, u16) {
        let magnitude = value.abs_diff(neutral);
        if magnitude <= config.deadzone {
            return (Self::Neutral, magnitude);
        }
        let deflection = if value < neutral {
            Self::Below {
                full: value <= config.super_margin,
            }
        } else {
            Self::Above {
                full: value >= config.adc_max.saturating_sub(config.super_margin),
            }
        };
        (deflection, magnitude)
    }
}

/// Maps one joystick reading to a direction symbol relative to the calibrated
/// neutral.
///
/// Each axis reads as below, neutral or above using `neutral ± deadzone`, and
/// a reading within `super_margin` of the ADC rail counts as full deflection.
/// When both axes are deflected the larger offset wins, with ties going to X.
/// Both axes neutral yields [`Symbol::Blank`].
pub fn classify(sample: AxisSample, neutral: AxisSample, config: &JoystickConfig) -> Symbol {
    let (x, x_magnitude) = Deflection::of(sample.x, neutral.x, config);
    let (y, y_magnitude) = Deflection::of(sample.y, neutral.y, config);

    let use_x = match (x, y) {
        (Deflection::Neutral, Deflection::Neutral) => return Symbol::Blank,
        (_, Deflection::Neutral) => true,
        (Deflection::Neutral, _) => false,
        _ => x_magnitude >= y_magnitude,
    };

    if use_x {
        match x {
            Deflection::Below { full: false } => Symbol::Left,
            Deflection::Below { full: true } => Symbol::SuperLeft,
            Deflection::Above { full: false } => Symbol::Right,
            Deflection::Above { full: true } => Symbol::SuperRight,
            Deflection::Neutral => Symbol::Blank,
        }
    } else {
        match y {
            Deflection::Above { full: false } => Symbol::Up,
            Deflection::Above { full: true } => Symbol::SuperUp,
            Deflection::Below { full: false } => Symbol::Down,
            Deflection::Below { full: true } => Symbol::SuperDown,
            Deflection::Neutral => Symbol::Blank,
        }
    }
}
