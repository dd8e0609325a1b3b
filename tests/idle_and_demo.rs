mod support;

use defuser::{
    active_config,
    model::{ScreenKind, Symbol},
    services::{GameFlowStateId, SequenceStateId, WatchdogStateId},
};
use support::{boot, run_until, tap, FakeBoard};

#[test]
fn idle_player_is_sent_back_to_welcome() {
    let mut scheduler = boot(FakeBoard::new());
    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Leader);

    let idle_ms = active_config().timing.idle_reset_ms;
    assert!(run_until(&mut scheduler, idle_ms + 100, |s| s.watchdog().1 == 1));

    let (state, resets) = scheduler.watchdog();
    assert_eq!(state, WatchdogStateId::Waiting);
    assert_eq!(resets, 1);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Welcome);
    assert_eq!(scheduler.sequence().state, SequenceStateId::Creating);
    assert_eq!(scheduler.sequence().round, 1);
    assert_eq!(
        scheduler.sequence().length,
        usize::from(active_config().round.initial_length)
    );
}

#[test]
fn input_keeps_the_watchdog_quiet() {
    let mut scheduler = boot(FakeBoard::new());
    let idle_ms = active_config().timing.idle_reset_ms;
    for _ in 0..3 {
        assert!(!run_until(&mut scheduler, idle_ms / 2, |s| s.watchdog().1 > 0));
        tap(&mut scheduler);
        tap(&mut scheduler);
    }
    assert_eq!(scheduler.watchdog().1, 0);
}

#[test]
fn demo_plays_a_sequence_then_returns_to_welcome() {
    let mut scheduler = boot(FakeBoard::new());
    let countdown_ms = active_config().timing.demo_countdown_ms;
    let start = scheduler.peripherals().screens.len();
    assert!(run_until(&mut scheduler, countdown_ms + 100, |s| {
        s.game_flow().state == GameFlowStateId::Demo
    }));
    let sequence = scheduler.sequence_symbols().to_vec();

    assert!(run_until(&mut scheduler, 8_000, |s| {
        s.game_flow().state == GameFlowStateId::Welcome
    }));
    assert!(run_until(&mut scheduler, 100, |s| {
        s.peripherals()
            .last_screen()
            .is_some_and(|screen| screen.kind == ScreenKind::Welcome)
    }));

    let screens = &scheduler.peripherals().screens[start..];
    assert_eq!(screens.first().map(|screen| screen.kind), Some(ScreenKind::Demo));
    let cues: Vec<Symbol> = screens
        .iter()
        .filter(|screen| screen.kind == ScreenKind::Instruction)
        .filter_map(|screen| Symbol::from_u8(screen.param as u8))
        .filter(|symbol| !symbol.is_blank())
        .collect();
    assert_eq!(cues, sequence);
    assert!(!screens.iter().any(|screen| screen.kind == ScreenKind::Go));
    assert_eq!(scheduler.sequence().state, SequenceStateId::Creating);
    assert_eq!(scheduler.game_flow().high_scores, [0, 0, 0]);
}

#[test]
fn a_press_cuts_the_demo_short() {
    let mut scheduler = boot(FakeBoard::new());
    let countdown_ms = active_config().timing.demo_countdown_ms;
    assert!(run_until(&mut scheduler, countdown_ms + 100, |s| {
        s.game_flow().state == GameFlowStateId::Demo
    }));
    assert!(run_until(&mut scheduler, 3_000, |s| {
        s.sequence().state == SequenceStateId::Displaying
    }));

    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Welcome);
    assert_eq!(scheduler.sequence().state, SequenceStateId::Creating);

    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Leader);
}

#[test]
fn a_press_before_demo_playback_leaves_no_stray_cues() {
    let mut scheduler = boot(FakeBoard::new());
    let timing = &active_config().timing;
    assert!(run_until(&mut scheduler, timing.demo_countdown_ms + 100, |s| {
        s.game_flow().state == GameFlowStateId::Demo
    }));
    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Welcome);
    let after_reset = scheduler.peripherals().screens.len();

    // Long enough for the demo's own playback to have reached its last cue.
    let quiet_ms = timing.demo_screen_ms + 2 * timing.direction_ms;
    scheduler.run_for(quiet_ms);
    assert_eq!(scheduler.sequence().state, SequenceStateId::Creating);
    assert!(!scheduler
        .peripherals()
        .kinds_since(after_reset)
        .contains(&ScreenKind::Instruction));
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Welcome);

    tap(&mut scheduler);
    assert_eq!(scheduler.game_flow().state, GameFlowStateId::Leader);
    let sequence = scheduler.sequence_symbols().to_vec();
    let game_start = scheduler.peripherals().screens.len();
    assert!(run_until(&mut scheduler, 8_000, |s| {
        s.sequence().state == SequenceStateId::AwaitingInput
    }));

    let screens = &scheduler.peripherals().screens[game_start..];
    let go = screens
        .iter()
        .position(|screen| screen.kind == ScreenKind::Go)
        .expect("go screen");
    let cues: Vec<Symbol> = screens[..go]
        .iter()
        .filter(|screen| screen.kind == ScreenKind::Instruction)
        .filter_map(|screen| Symbol::from_u8(screen.param as u8))
        .filter(|symbol| !symbol.is_blank())
        .collect();
    assert_eq!(cues, sequence);
    assert!(!screens[go..]
        .iter()
        .any(|screen| screen.kind == ScreenKind::Instruction));
}
