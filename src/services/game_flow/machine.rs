use statig::prelude::*;

use super::{high_scores::HighScoreTable, GameFlowStateId};
use crate::{
    config::GameConfig,
    framework::DispatchContext,
    model::{Event, LedCommand, Screen, ServiceId, TimerId},
    telemetry,
};

/// Timers armed here whose expiry only means something inside a game or demo.
const ROUND_TIMERS: [TimerId; 4] = [
    TimerId::Ready,
    TimerId::Go,
    TimerId::GameOver,
    TimerId::DemoScreen,
];

pub(super) struct GameFlowMachine {
    config: &'static GameConfig,
    pub(super) state_id: GameFlowStateId,
    pub(super) round: u16,
    pub(super) last_score: u16,
    pub(super) high_scores: HighScoreTable,
}

impl GameFlowMachine {
    pub(super) fn new(config: &'static GameConfig) -> Self {
        Self {
            config,
            state_id: GameFlowStateId::Initializing,
            round: 0,
            last_score: 0,
            high_scores: HighScoreTable::new(),
        }
    }

    fn show(context: &mut DispatchContext, screen: Screen) {
        context.post(ServiceId::Display, Event::Render(screen));
    }

    fn led(context: &mut DispatchContext, command: LedCommand) {
        context.post(ServiceId::Led, Event::Led(command));
    }

    fn enter(&mut self, state_id: GameFlowStateId) {
        log::debug!("game_flow: transition from={:?} to={:?}", self.state_id, state_id);
        self.state_id = state_id;
    }

    fn enter_welcome(&mut self, context: &mut DispatchContext) {
        for timer in ROUND_TIMERS {
            context.disarm(timer);
        }
        Self::show(context, Screen::Welcome);
        Self::led(context, LedCommand::Random);
        context.arm(TimerId::Demo, self.config.timing.demo_countdown_ms);
        self.enter(GameFlowStateId::Welcome);
    }

    fn enter_leader(&mut self, context: &mut DispatchContext) {
        Self::show(context, Screen::Ready { round: self.round });
        Self::led(context, LedCommand::Off);
        context.arm(TimerId::Ready, self.config.timing.ready_ms);
        self.enter(GameFlowStateId::Leader);
    }

    fn finish_game(&mut self, context: &mut DispatchContext, score: u16) {
        self.last_score = score;
        let high_score = self.high_scores.insert(score);
        if high_score {
            telemetry::record_high_score();
        }
        log::info!(
            "game_flow: game complete score={} high_score={} table={:?}",
            score,
            high_score,
            self.high_scores.visible()
        );
        Self::show(
            context,
            Screen::GameComplete {
                score,
                high_scores: self.high_scores.visible(),
            },
        );
        Self::led(
            context,
            if high_score {
                LedCommand::Green
            } else {
                LedCommand::Red
            },
        );
        context.arm(TimerId::GameOver, self.config.timing.game_over_ms);
        self.enter(GameFlowStateId::GameComplete);
    }
}

#[state_machine(initial = "State::initializing()")]
impl GameFlowMachine {
    #[state]
    fn initializing(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Init => {
                self.high_scores.clear();
                self.enter_welcome(context);
                Transition(State::welcome())
            }
            _ => Handled,
        }
    }

    #[state]
    fn welcome(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::PlayerPress => {
                self.round = 1;
                telemetry::record_game_started();
                log::info!("game_flow: game start");
                context.disarm(TimerId::Demo);
                context.post(ServiceId::Sequence, Event::FirstRound);
                self.enter_leader(context);
                Transition(State::leader())
            }
            Event::Timeout(TimerId::Demo) => {
                Self::show(context, Screen::Demo);
                context.post(ServiceId::Sequence, Event::FirstRound);
                context.arm(TimerId::DemoScreen, self.config.timing.demo_screen_ms);
                self.enter(GameFlowStateId::Demo);
                Transition(State::demo())
            }
            _ => Handled,
        }
    }

    #[state(superstate = "resettable")]
    fn leader(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::LastDirection) => {
                Self::show(context, Screen::Go);
                context.arm(TimerId::Go, self.config.timing.go_ms);
                self.enter(GameFlowStateId::Follower);
                Transition(State::follower())
            }
            _ => Super,
        }
    }

    #[state(superstate = "resettable")]
    fn follower(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::RoundComplete => {
                Self::show(context, Screen::RoundComplete);
                Self::led(context, LedCommand::Green);
                self.enter(GameFlowStateId::RoundComplete);
                Transition(State::round_complete())
            }
            Event::GameOver { score } => {
                self.finish_game(context, *score);
                Transition(State::game_complete())
            }
            _ => Super,
        }
    }

    #[state(superstate = "resettable")]
    fn round_complete(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::PlayerPress => {
                self.round = self.round.saturating_add(1);
                self.enter_leader(context);
                Transition(State::leader())
            }
            _ => Super,
        }
    }

    #[state(superstate = "resettable")]
    fn game_complete(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::PlayerPress | Event::Timeout(TimerId::GameOver) => {
                self.enter_welcome(context);
                Transition(State::welcome())
            }
            _ => Super,
        }
    }

    #[state(superstate = "resettable")]
    fn demo(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Timeout(TimerId::LastDirection) | Event::PlayerPress => {
                context.post(ServiceId::Sequence, Event::MasterReset);
                self.enter_welcome(context);
                Transition(State::welcome())
            }
            _ => Super,
        }
    }

    #[superstate]
    fn resettable(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::MasterReset => {
                log::info!("game_flow: master reset state={:?}", self.state_id);
                self.enter_welcome(context);
                Transition(State::welcome())
            }
            _ => Handled,
        }
    }
}
