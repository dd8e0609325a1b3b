#![allow(dead_code)]

use defuser::{
    active_config,
    framework::{Scheduler, MAX_STEPS_PER_CYCLE},
    model::{AxisSample, LedFrame, Screen, ScreenContext, ScreenKind, Symbol},
    services::SequenceEngine,
    InputPin, Peripherals,
};

pub const NEUTRAL: AxisSample = AxisSample::new(2048, 2048);
pub const SEED: u64 = 0x5EED;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub kind: ScreenKind,
    pub param: u16,
    pub context: ScreenContext,
}

/// Host stand-in for the board. Pins idle high, the display stays busy for
/// `busy_polls` polls after each render.
pub struct FakeBoard {
    pub screens: Vec<Rendered>,
    pub frames: Vec<LedFrame>,
    pub prepared: u32,
    pub axes: AxisSample,
    pub touch_level: bool,
    pub button_level: bool,
    pub busy_polls: u32,
    busy_left: u32,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self::with_busy_polls(1)
    }

    pub fn with_busy_polls(busy_polls: u32) -> Self {
        Self {
            screens: Vec::new(),
            frames: Vec::new(),
            prepared: 0,
            axes: NEUTRAL,
            touch_level: true,
            button_level: true,
            busy_polls,
            busy_left: 0,
        }
    }

    pub fn last_screen(&self) -> Option<Rendered> {
        self.screens.last().copied()
    }

    pub fn kinds_since(&self, start: usize) -> Vec<ScreenKind> {
        self.screens[start..].iter().map(|screen| screen.kind).collect()
    }
}

impl Peripherals for FakeBoard {
    fn prepare_display(&mut self) {
        self.prepared += 1;
    }

    fn render_screen(&mut self, kind: ScreenKind, param: u16, context: &ScreenContext) {
        self.screens.push(Rendered {
            kind,
            param,
            context: *context,
        });
        self.busy_left = self.busy_polls;
    }

    fn set_led_colors(&mut self, frame: &LedFrame) {
        self.frames.push(*frame);
    }

    fn read_joystick_axes(&mut self) -> AxisSample {
        self.axes
    }

    fn read_digital(&mut self, pin: InputPin) -> bool {
        match pin {
            InputPin::TouchSensor => self.touch_level,
            InputPin::JoystickButton => self.button_level,
        }
    }

    fn display_is_busy(&mut self) -> bool {
        if self.busy_left > 0 {
            self.busy_left -= 1;
            true
        } else {
            false
        }
    }
}

pub fn quantum() -> u32 {
    active_config().timing.scheduler_quantum_ms
}

/// Builds a seeded scheduler, runs the boot events and primes the input
/// detectors.
pub fn boot(board: FakeBoard) -> Scheduler<FakeBoard> {
    let config = active_config();
    let mut scheduler =
        Scheduler::with_sequence(board, config, SequenceEngine::with_seed(config, SEED));
    scheduler.run_until_idle(MAX_STEPS_PER_CYCLE);
    scheduler.cycle(quantum());
    scheduler
}

pub fn tap(scheduler: &mut Scheduler<FakeBoard>) {
    scheduler.peripherals_mut().touch_level = false;
    scheduler.cycle(quantum());
    scheduler.peripherals_mut().touch_level = true;
    scheduler.cycle(quantum());
}

/// Deflects the stick, clicks, and lets go.
pub fn push_stick(scheduler: &mut Scheduler<FakeBoard>, symbol: Symbol) {
    scheduler.peripherals_mut().axes = sample_for(symbol);
    scheduler.peripherals_mut().button_level = false;
    scheduler.cycle(quantum());
    scheduler.peripherals_mut().axes = NEUTRAL;
    scheduler.peripherals_mut().button_level = true;
    scheduler.cycle(quantum());
}

/// Cycles until `done` holds or `limit_ms` passes. Returns whether it held.
pub fn run_until(
    scheduler: &mut Scheduler<FakeBoard>,
    limit_ms: u32,
    mut done: impl FnMut(&Scheduler<FakeBoard>) -> bool,
) -> bool {
    let mut elapsed = 0;
    while elapsed <= limit_ms {
        if done(scheduler) {
            return true;
        }
        scheduler.cycle(quantum());
        elapsed += quantum();
    }
    done(scheduler)
}

/// A stick position that classifies as `symbol` around [`NEUTRAL`].
pub fn sample_for(symbol: Symbol) -> AxisSample {
    let joystick = &active_config().joystick;
    let offset = joystick.deadzone + 100;
    let (x, y) = match symbol {
        Symbol::Left => (NEUTRAL.x - offset, NEUTRAL.y),
        Symbol::SuperLeft => (0, NEUTRAL.y),
        Symbol::Right => (NEUTRAL.x + offset, NEUTRAL.y),
        Symbol::SuperRight => (joystick.adc_max, NEUTRAL.y),
        Symbol::Up => (NEUTRAL.x, NEUTRAL.y + offset),
        Symbol::SuperUp => (NEUTRAL.x, joystick.adc_max),
        Symbol::Down => (NEUTRAL.x, NEUTRAL.y - offset),
        Symbol::SuperDown => (NEUTRAL.x, 0),
        Symbol::Blank => (NEUTRAL.x, NEUTRAL.y),
    };
    AxisSample::new(x, y)
}

pub fn screen_of(rendered: &Rendered) -> (ScreenKind, u16) {
    (rendered.kind, rendered.param)
}

pub fn wire(screen: Screen) -> (ScreenKind, u16) {
    screen.to_wire()
}
