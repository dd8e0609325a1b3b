use rand::{rngs::SmallRng, Rng as _, SeedableRng as _};
use statig::prelude::*;

use super::LedStateId;
use crate::{
    config::GameConfig,
    framework::{Action, DispatchContext},
    model::{Event, LedColor, LedCommand, LedFrame, TimerId},
};

const SEED_SALT: u64 = 0x1ED5_EED5;

pub(super) struct LedMachine {
    config: &'static GameConfig,
    pub(super) state_id: LedStateId,
    pub(super) flipflop: u8,
    rng: SmallRng,
}

impl LedMachine {
    pub(super) fn new(config: &'static GameConfig) -> Self {
        Self {
            config,
            state_id: LedStateId::Initializing,
            flipflop: 0,
            rng: SmallRng::seed_from_u64(SEED_SALT),
        }
    }

    fn switch_to(&mut self, context: &mut DispatchContext, command: LedCommand) -> Outcome<State> {
        let target = LedStateId::from(command);
        if target == self.state_id {
            return Handled;
        }
        log::debug!("led: pattern from={:?} to={:?}", self.state_id, target);
        self.state_id = target;
        self.flipflop = 0;
        self.write_pattern(context);

        match command {
            LedCommand::Off => Transition(State::off()),
            LedCommand::Red => {
                self.arm(context);
                Transition(State::red())
            }
            LedCommand::Green => {
                self.arm(context);
                Transition(State::green())
            }
            LedCommand::Random => {
                self.arm(context);
                Transition(State::random())
            }
        }
    }

    fn tick(&mut self, context: &mut DispatchContext) {
        self.flipflop = self.flipflop.wrapping_add(1);
        self.write_pattern(context);
        self.arm(context);
    }

    fn arm(&self, context: &mut DispatchContext) {
        context.arm(TimerId::LedPattern, self.config.timing.led_pattern_ms);
    }

    fn write_pattern(&mut self, context: &mut DispatchContext) {
        let frame = match self.state_id {
            LedStateId::Red => self.alternating(LedColor::RED),
            LedStateId::Green => self.alternating(LedColor::GREEN),
            LedStateId::Random => {
                let first = self.random_color();
                LedFrame::new(first, self.random_color())
            }
            LedStateId::Initializing | LedStateId::Off => LedFrame::dark(),
        };
        context.actions.push(Action::WriteLeds(frame));
    }

    fn alternating(&self, color: LedColor) -> LedFrame {
        if self.flipflop % 2 == 0 {
            LedFrame::new(color, LedColor::OFF)
        } else {
            LedFrame::new(LedColor::OFF, color)
        }
    }

    fn random_color(&mut self) -> LedColor {
        LedColor::new(0xFF, self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

#[state_machine(initial = "State::initializing()")]
impl LedMachine {
    #[state]
    fn initializing(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Init => {
                self.rng = SmallRng::seed_from_u64(context.now_ms as u64 ^ SEED_SALT);
                self.state_id = LedStateId::Off;
                self.write_pattern(context);
                Transition(State::off())
            }
            _ => Handled,
        }
    }

    #[state(superstate = "commanded")]
    fn off() -> Outcome<State> {
        Super
    }

    #[state(superstate = "commanded")]
    fn red(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::LedPattern) => {
                self.tick(context);
                Handled
            }
            _ => Super,
        }
    }

    #[state(superstate = "commanded")]
    fn green(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::LedPattern) => {
                self.tick(context);
                Handled
            }
            _ => Super,
        }
    }

    #[state(superstate = "commanded")]
    fn random(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::LedPattern) => {
                self.tick(context);
                Handled
            }
            _ => Super,
        }
    }

    #[superstate]
    fn commanded(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Led(command) => self.switch_to(context, *command),
            _ => Handled,
        }
    }
}
