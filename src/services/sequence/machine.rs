use rand::{rngs::SmallRng, SeedableRng as _};
use statig::prelude::*;

use super::{
    classify::classify,
    store::{check_input, score_increment, SymbolSequence},
    SequenceStateId,
};
use crate::{
    config::GameConfig,
    error::ServiceError,
    framework::DispatchContext,
    model::{AxisSample, Event, InputVerdict, PlayUpdate, Screen, ServiceId, Symbol, TimerId},
    telemetry,
};

pub(super) const DEFAULT_SEED: u64 = 0x5EC0_11DE;

/// Timers this service arms for itself during playback and input.
const PLAYBACK_TIMERS: [TimerId; 4] = [
    TimerId::Instruction,
    TimerId::Direction,
    TimerId::LastDirection,
    TimerId::Input,
];

pub(super) struct SequenceMachine {
    config: &'static GameConfig,
    pub(super) state_id: SequenceStateId,
    pub(super) neutral: AxisSample,
    pub(super) sequence: SymbolSequence,
    pub(super) seq_index: usize,
    pub(super) cue_index: usize,
    pub(super) round: u16,
    pub(super) score: u16,
    pub(super) playtime_left: u8,
    last_input: Symbol,
    base_seed: u64,
    games: u32,
    rng: SmallRng,
}

impl SequenceMachine {
    pub(super) fn new(config: &'static GameConfig, base_seed: u64) -> Self {
        Self {
            config,
            state_id: SequenceStateId::Calibrating,
            neutral: AxisSample::default(),
            sequence: SymbolSequence::new(),
            seq_index: 0,
            cue_index: 0,
            round: 0,
            score: 0,
            playtime_left: 0,
            last_input: Symbol::Blank,
            base_seed,
            games: 0,
            rng: SmallRng::seed_from_u64(base_seed),
        }
    }

    /// Seeds from the dispatch clock at game start so that back-to-back games
    /// differ.
    fn reseed(&mut self, now_ms: u32) {
        self.games = self.games.wrapping_add(1);
        let seed = self.base_seed ^ ((now_ms as u64) << 16) ^ self.games as u64;
        self.rng = SmallRng::seed_from_u64(seed);
    }

    fn start_game(&mut self, context: &mut DispatchContext) {
        self.reseed(context.now_ms);
        self.round = 1;
        self.score = 0;
        self.seq_index = 0;
        self.cue_index = 0;
        self.playtime_left = 0;
        self.last_input = Symbol::Blank;
        for timer in PLAYBACK_TIMERS {
            context.disarm(timer);
        }
        let length = self.config.round.initial_length as usize;
        if let Err(fault) = self.sequence.regenerate(&mut self.rng, length) {
            self.report_fault(context, fault);
        }
        self.state_id = SequenceStateId::Creating;
        log::debug!("sequence: first round length={}", self.sequence.len());
    }

    fn next_round(&mut self, context: &mut DispatchContext) {
        match self.sequence.extend(&mut self.rng) {
            Ok(()) => {
                self.round = self.round.saturating_add(1);
                self.seq_index = 0;
                log::debug!(
                    "sequence: next round round={} length={}",
                    self.round,
                    self.sequence.len()
                );
            }
            Err(fault) => self.report_fault(context, fault),
        }
    }

    fn begin_playback(&mut self, context: &mut DispatchContext) {
        self.cue_index = 0;
        self.seq_index = 0;
        self.state_id = SequenceStateId::Displaying;
        self.show_cue(context);
    }

    fn show_cue(&mut self, context: &mut DispatchContext) {
        let timing = &self.config.timing;
        let symbol = self.sequence.get(self.cue_index).unwrap_or(Symbol::Blank);
        context.post(
            ServiceId::Display,
            Event::Render(Screen::Instruction { symbol }),
        );
        context.arm(TimerId::Instruction, timing.cue_hold_ms);

        let last = self.cue_index + 1 >= self.sequence.len();
        let timer = if last {
            TimerId::LastDirection
        } else {
            TimerId::Direction
        };
        context.arm(timer, timing.direction_ms);
    }

    fn start_input(&mut self, context: &mut DispatchContext) {
        self.playtime_left = self.config.round.playtime_seconds;
        self.last_input = Symbol::Blank;
        self.seq_index = 0;
        self.state_id = SequenceStateId::AwaitingInput;
        context.arm(TimerId::Input, self.config.timing.input_tick_ms);
        self.render_play(context);
    }

    fn render_play(&self, context: &mut DispatchContext) {
        context.post(
            ServiceId::Display,
            Event::Render(Screen::PlayUpdate(PlayUpdate {
                score: self.score,
                time: self.playtime_left,
                symbol: self.last_input,
            })),
        );
    }

    fn award(&mut self) {
        let points = score_increment(self.sequence.len());
        self.score = self.score.saturating_add(points);
    }

    fn apply_verdict(&mut self, context: &mut DispatchContext, verdict: InputVerdict) -> bool {
        match verdict {
            InputVerdict::Correct => {
                self.award();
                self.seq_index = (self.seq_index + 1).min(self.sequence.len());
                self.render_play(context);
                false
            }
            InputVerdict::CorrectFinal => {
                self.award();
                self.seq_index = self.sequence.len();
                self.render_play(context);
                if self.sequence.is_full() {
                    self.report_fault(context, ServiceError::SequenceOverflow);
                    self.report_game_over(context);
                } else {
                    telemetry::record_round_completed();
                    log::info!(
                        "sequence: round complete round={} score={}",
                        self.round,
                        self.score
                    );
                    context.post(ServiceId::Sequence, Event::NextRound);
                    context.post(ServiceId::GameFlow, Event::RoundComplete);
                    self.state_id = SequenceStateId::Creating;
                }
                true
            }
            InputVerdict::Incorrect => {
                self.report_game_over(context);
                true
            }
        }
    }

    fn report_game_over(&mut self, context: &mut DispatchContext) {
        telemetry::record_game_over();
        log::info!(
            "sequence: game over round={} score={}",
            self.round,
            self.score
        );
        context.post(ServiceId::GameFlow, Event::GameOver { score: self.score });
        context.post(ServiceId::Sequence, Event::FirstRound);
        self.state_id = SequenceStateId::Creating;
    }

    fn report_fault(&self, context: &mut DispatchContext, fault: ServiceError) {
        telemetry::record_sequence_overflow();
        log::warn!("sequence: {} length={}", fault, self.sequence.len());
        context.fail(fault);
    }
}

#[state_machine(initial = "State::calibrating()")]
impl SequenceMachine {
    #[state]
    fn calibrating(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Calibrate(sample) => {
                self.neutral = *sample;
                log::info!("sequence: calibrated x={} y={}", sample.x, sample.y);
                context.post(ServiceId::Sequence, Event::FirstRound);
                self.state_id = SequenceStateId::Creating;
                Transition(State::creating())
            }
            _ => Handled,
        }
    }

    #[state(superstate = "playing")]
    fn creating(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::NextRound => {
                self.next_round(context);
                Handled
            }
            Event::Timeout(TimerId::Ready | TimerId::DemoScreen) => {
                self.begin_playback(context);
                Transition(State::displaying())
            }
            _ => Super,
        }
    }

    #[state(superstate = "playing")]
    fn displaying(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::Direction) => {
                if self.cue_index + 1 < self.sequence.len() {
                    self.cue_index += 1;
                    self.show_cue(context);
                }
                Handled
            }
            Event::Timeout(TimerId::Instruction) => {
                context.post(
                    ServiceId::Display,
                    Event::Render(Screen::Instruction {
                        symbol: Symbol::Blank,
                    }),
                );
                Handled
            }
            Event::Timeout(TimerId::Go) => {
                self.start_input(context);
                Transition(State::awaiting_input())
            }
            _ => Super,
        }
    }

    #[state(superstate = "playing")]
    fn awaiting_input(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::Input) => {
                self.playtime_left = self.playtime_left.saturating_sub(1);
                if self.playtime_left == 0 {
                    log::debug!("sequence: playtime expired");
                    self.report_game_over(context);
                    return Transition(State::creating());
                }
                context.arm(TimerId::Input, self.config.timing.input_tick_ms);
                self.render_play(context);
                Handled
            }
            Event::JoystickInput(sample) => {
                let symbol = classify(*sample, self.neutral, &self.config.joystick);
                if symbol.is_blank() {
                    return Handled;
                }
                self.last_input = symbol;
                let verdict = check_input(self.sequence.as_slice(), self.seq_index, symbol);
                log::debug!(
                    "sequence: input symbol={:?} index={} verdict={:?}",
                    symbol,
                    self.seq_index,
                    verdict
                );
                if self.apply_verdict(context, verdict) {
                    Transition(State::creating())
                } else {
                    Handled
                }
            }
            Event::Verdict(verdict) => {
                if self.apply_verdict(context, *verdict) {
                    Transition(State::creating())
                } else {
                    Handled
                }
            }
            _ => Super,
        }
    }

    #[superstate]
    fn playing(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::FirstRound => {
                self.start_game(context);
                Transition(State::creating())
            }
            Event::MasterReset => {
                log::info!("sequence: master reset state={:?}", self.state_id);
                self.start_game(context);
                Transition(State::creating())
            }
            _ => Handled,
        }
    }
}
