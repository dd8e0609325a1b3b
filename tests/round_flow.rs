mod support;

use defuser::{
    active_config,
    model::{PlayUpdate, Screen, ScreenKind, Symbol},
    services::{GameFlowStateId, LedStateId, SequenceStateId},
};
use support::{boot, push_stick, run_until, screen_of, tap, wire, FakeBoard};

#[test]
fn first_round_plays_back_accepts_input_and_advances() {
    let mut scheduler = boot(FakeBoard::new());
    assert_eq!(scheduler.peripherals().prepared, 1);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Welcome);
    assert_eq!(scheduler.led().state, LedStateId::Random);
    assert_eq!(scheduler.sequence().length, 4);

    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Leader);
    assert_eq!(scheduler.game_flow().round, 1);
    assert_eq!(scheduler.led().state, LedStateId::Off);
    let sequence = scheduler.sequence_symbols().to_vec();
    assert_eq!(sequence.len(), 4);

    let playback_start = scheduler.peripherals().screens.len();
    assert!(run_until(&mut scheduler, 6_000, |s| {
        s.game_flow().state == GameFlowStateId::Follower
    }));

    let cues: Vec<Symbol> = scheduler.peripherals().screens[playback_start..]
        .iter()
        .filter(|screen| screen.kind == ScreenKind::Instruction)
        .filter_map(|screen| Symbol::from_u8(screen.param as u8))
        .filter(|symbol| !symbol.is_blank())
        .collect();
    assert_eq!(cues, sequence);

    assert!(run_until(&mut scheduler, 2_000, |s| {
        s.sequence().state == SequenceStateId::AwaitingInput
    }));
    let opening = scheduler.peripherals().last_screen().unwrap();
    assert_eq!(
        screen_of(&opening),
        wire(Screen::PlayUpdate(PlayUpdate {
            score: 0,
            time: active_config().round.playtime_seconds,
            symbol: Symbol::Blank,
        }))
    );

    for (index, symbol) in sequence.iter().enumerate() {
        push_stick(&mut scheduler, *symbol);
        assert_eq!(scheduler.sequence().score, index as u16 + 1);
    }

    assert!(run_until(&mut scheduler, 100, |s| {
        s.game_flow().state == GameFlowStateId::RoundComplete
    }));
    assert!(run_until(&mut scheduler, 100, |s| {
        s.peripherals()
            .last_screen()
            .is_some_and(|screen| screen.kind == ScreenKind::RoundComplete)
    }));
    assert_eq!(scheduler.led().state, LedStateId::Green);
    assert_eq!(scheduler.sequence().state, SequenceStateId::Creating);
    assert_eq!(scheduler.sequence().length, 5);
    assert_eq!(&scheduler.sequence_symbols()[..4], sequence.as_slice());

    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Leader);
    assert_eq!(scheduler.game_flow().round, 2);
    assert!(run_until(&mut scheduler, 100, |s| {
        s.peripherals().last_screen().is_some_and(|screen| {
            screen_of(&screen) == wire(Screen::Ready { round: 2 })
                && screen.context.score == 4
        })
    }));
}

#[test]
fn a_wrong_direction_ends_the_game() {
    let mut scheduler = boot(FakeBoard::new());
    tap(&mut scheduler);
    let sequence = scheduler.sequence_symbols().to_vec();
    assert!(run_until(&mut scheduler, 8_000, |s| {
        s.sequence().state == SequenceStateId::AwaitingInput
    }));

    push_stick(&mut scheduler, sequence[0]);
    push_stick(&mut scheduler, sequence[1].mirrored());

    assert!(run_until(&mut scheduler, 100, |s| {
        s.game_flow().state == GameFlowStateId::GameComplete
    }));
    let flow = scheduler.game_flow();
    assert_eq!(flow.last_score, 1);
    assert_eq!(flow.high_scores, [1, 0, 0]);
    assert_eq!(scheduler.led().state, LedStateId::Green);
    assert_eq!(scheduler.sequence().state, SequenceStateId::Creating);
    assert_eq!(scheduler.sequence().score, 0);

    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Welcome);
}

#[test]
fn running_out_of_time_ends_the_game_with_the_score_so_far() {
    let mut scheduler = boot(FakeBoard::new());
    tap(&mut scheduler);
    let sequence = scheduler.sequence_symbols().to_vec();
    assert!(run_until(&mut scheduler, 8_000, |s| {
        s.sequence().state == SequenceStateId::AwaitingInput
    }));
    push_stick(&mut scheduler, sequence[0]);
    push_stick(&mut scheduler, sequence[1]);

    let playtime_ms = u32::from(active_config().round.playtime_seconds)
        * active_config().timing.input_tick_ms;
    assert!(run_until(&mut scheduler, playtime_ms + 100, |s| {
        s.game_flow().state == GameFlowStateId::GameComplete
    }));
    assert_eq!(scheduler.game_flow().last_score, 2);
}

#[test]
fn a_centered_click_is_not_an_answer() {
    let mut scheduler = boot(FakeBoard::new());
    tap(&mut scheduler);
    assert!(run_until(&mut scheduler, 8_000, |s| {
        s.sequence().state == SequenceStateId::AwaitingInput
    }));
    push_stick(&mut scheduler, Symbol::Blank);
    assert_eq!(scheduler.sequence().seq_index, 0);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Follower);
}
