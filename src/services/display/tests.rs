use super::*;
use crate::{
    error::ServiceError,
    framework::{Action, Service as _},
    model::{Event, PlayUpdate, Screen, ScreenKind, ServiceId, Symbol},
};

fn ready_engine() -> DisplayEngine {
    let mut engine = DisplayEngine::new();
    let output = engine.handle(&Event::Init, 0);
    assert!(output
        .actions
        .iter()
        .any(|action| matches!(action, Action::PrepareDisplay)));
    engine
}

fn recalled(output: &crate::framework::ServiceOutput) -> Vec<Event> {
    output
        .actions
        .iter()
        .filter_map(|action| match *action {
            Action::Recall {
                to: ServiceId::Display,
                event,
            } => Some(event),
            _ => None,
        })
        .collect()
}

#[test]
fn render_in_available_goes_busy() {
    let mut engine = ready_engine();
    let output = engine.handle(&Event::Render(Screen::Welcome), 1);
    assert_eq!(output.actions.rendered(), Some((ScreenKind::Welcome, 0)));
    assert_eq!(engine.snapshot().state, DisplayStateId::Busy);
}

#[test]
fn busy_defers_then_recalls_in_arrival_order() {
    let mut engine = ready_engine();
    let _ = engine.handle(&Event::Render(Screen::Go), 1);

    let first = Screen::Instruction {
        symbol: Symbol::Up,
    };
    let second = Screen::PlayUpdate(PlayUpdate {
        score: 3,
        time: 14,
        symbol: Symbol::Blank,
    });
    let deferred_a = engine.handle(&Event::Render(first), 2);
    let deferred_b = engine.handle(&Event::Render(second), 3);
    assert!(deferred_a.actions.rendered().is_none());
    assert!(deferred_b.actions.rendered().is_none());
    assert_eq!(engine.snapshot().deferred, 2);

    let complete = engine.handle(&Event::RenderComplete, 4);
    assert_eq!(
        recalled(&complete),
        vec![Event::Render(first), Event::Render(second)]
    );
    assert_eq!(engine.snapshot().state, DisplayStateId::Available);
    assert_eq!(engine.snapshot().deferred, 0);
}

#[test]
fn deferral_overflow_is_reported_not_overwritten() {
    let mut engine = ready_engine();
    let _ = engine.handle(&Event::Render(Screen::Welcome), 0);
    for round in 0..DEFERRAL_CAPACITY as u16 {
        let output = engine.handle(&Event::Render(Screen::Ready { round }), 1);
        assert_eq!(output.fault, None);
    }

    let overflow = engine.handle(&Event::Render(Screen::Demo), 2);
    assert_eq!(overflow.fault, Some(ServiceError::DeferralOverflow));
    assert_eq!(engine.snapshot().deferred, DEFERRAL_CAPACITY);
    assert_eq!(engine.snapshot().state, DisplayStateId::Busy);

    let complete = engine.handle(&Event::RenderComplete, 3);
    let recalled = recalled(&complete);
    assert_eq!(recalled.len(), DEFERRAL_CAPACITY);
    assert_eq!(recalled[0], Event::Render(Screen::Ready { round: 0 }));
}

#[test]
fn spurious_render_complete_in_available_is_ignored() {
    let mut engine = ready_engine();
    let output = engine.handle(&Event::RenderComplete, 1);
    assert!(output.actions.is_empty());
    assert_eq!(engine.snapshot().state, DisplayStateId::Available);
}

#[test]
fn requests_before_setup_are_replayed_after_init() {
    let mut engine = DisplayEngine::new();
    let _ = engine.handle(&Event::Render(Screen::Welcome), 0);
    let output = engine.handle(&Event::Init, 1);
    assert_eq!(recalled(&output), vec![Event::Render(Screen::Welcome)]);
    assert_eq!(engine.snapshot().state, DisplayStateId::Available);
}

#[test]
fn screen_context_follows_requests() {
    let mut engine = ready_engine();
    let _ = engine.handle(&Event::Render(Screen::Ready { round: 4 }), 0);
    let _ = engine.handle(&Event::RenderComplete, 1);
    let output = engine.handle(
        &Event::Render(Screen::PlayUpdate(PlayUpdate {
            score: 9,
            time: 2,
            symbol: Symbol::Left,
        })),
        2,
    );

    let context = output
        .actions
        .iter()
        .find_map(|action| match *action {
            Action::Render { context, .. } => Some(context),
            _ => None,
        })
        .expect("render action");
    assert_eq!(context.round, 4);
    assert_eq!(context.score, 9);
    assert_eq!(engine.snapshot().renders, 2);
}
