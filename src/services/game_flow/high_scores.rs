pub const VISIBLE_HIGH_SCORES: usize = 3;

/// Ranked top scores plus one scratch slot for the incoming candidate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HighScoreTable {
    slots: [u16; VISIBLE_HIGH_SCORES + 1],
}

impl HighScoreTable {
    pub const fn new() -> Self {
        Self {
            slots: [0; VISIBLE_HIGH_SCORES + 1],
        }
    }

    /// Records a finished game's score. Returns `true` when it ranks in the
    /// visible top three. A zero score never counts.
    pub fn insert(&mut self, score: u16) -> bool {
        self.slots[VISIBLE_HIGH_SCORES] = score;
        self.slots.sort_unstable_by(|a, b| b.cmp(a));
        score > 0 && score >= self.slots[VISIBLE_HIGH_SCORES - 1]
    }

    pub fn visible(&self) -> [u16; VISIBLE_HIGH_SCORES] {
        [self.slots[0], self.slots[1], self.slots[2]]
    }

    pub fn clear(&mut self) {
        self.slots = [0; VISIBLE_HIGH_SCORES + 1];
    }
}
