use core::sync::atomic::{AtomicU32, Ordering};

static RENDERS: AtomicU32 = AtomicU32::new(0);
static RENDERS_DEFERRED: AtomicU32 = AtomicU32::new(0);
static RENDERS_RECALLED: AtomicU32 = AtomicU32::new(0);
static DEFERRAL_OVERFLOWS: AtomicU32 = AtomicU32::new(0);
static QUEUE_OVERFLOWS: AtomicU32 = AtomicU32::new(0);
static SEQUENCE_OVERFLOWS: AtomicU32 = AtomicU32::new(0);
static MASTER_RESETS: AtomicU32 = AtomicU32::new(0);
static GAMES_STARTED: AtomicU32 = AtomicU32::new(0);
static ROUNDS_COMPLETED: AtomicU32 = AtomicU32::new(0);
static GAMES_OVER: AtomicU32 = AtomicU32::new(0);
static HIGH_SCORES: AtomicU32 = AtomicU32::new(0);
static ACTIONS_DROPPED: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub renders: u32,
    pub renders_deferred: u32,
    pub renders_recalled: u32,
    pub deferral_overflows: u32,
    pub queue_overflows: u32,
    pub sequence_overflows: u32,
    pub master_resets: u32,
    pub games_started: u32,
    pub rounds_completed: u32,
    pub games_over: u32,
    pub high_scores: u32,
    pub actions_dropped: u32,
}

pub fn record_render() {
    RENDERS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_render_deferred() {
    RENDERS_DEFERRED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_renders_recalled(count: u32) {
    RENDERS_RECALLED.fetch_add(count, Ordering::Relaxed);
}

pub fn record_deferral_overflow() {
    DEFERRAL_OVERFLOWS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_queue_overflow() {
    QUEUE_OVERFLOWS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_sequence_overflow() {
    SEQUENCE_OVERFLOWS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_master_reset() {
    MASTER_RESETS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_game_started() {
    GAMES_STARTED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_round_completed() {
    ROUNDS_COMPLETED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_game_over() {
    GAMES_OVER.fetch_add(1, Ordering::Relaxed);
}

pub fn record_high_score() {
    HIGH_SCORES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_action_dropped() {
    ACTIONS_DROPPED.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        renders: RENDERS.load(Ordering::Relaxed),
        renders_deferred: RENDERS_DEFERRED.load(Ordering::Relaxed),
        renders_recalled: RENDERS_RECALLED.load(Ordering::Relaxed),
        deferral_overflows: DEFERRAL_OVERFLOWS.load(Ordering::Relaxed),
        queue_overflows: QUEUE_OVERFLOWS.load(Ordering::Relaxed),
        sequence_overflows: SEQUENCE_OVERFLOWS.load(Ordering::Relaxed),
        master_resets: MASTER_RESETS.load(Ordering::Relaxed),
        games_started: GAMES_STARTED.load(Ordering::Relaxed),
        rounds_completed: ROUNDS_COMPLETED.load(Ordering::Relaxed),
        games_over: GAMES_OVER.load(Ordering::Relaxed),
        high_scores: HIGH_SCORES.load(Ordering::Relaxed),
        actions_dropped: ACTIONS_DROPPED.load(Ordering::Relaxed),
    }
}
