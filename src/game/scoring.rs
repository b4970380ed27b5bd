//! Scoring rules: attempt-based points, hint penalties, streak bonuses

/// Points for a correct answer on the first attempt
pub const FIRST_TRY_POINTS: u32 = 10;
/// Points for a correct answer on the second attempt
pub const SECOND_TRY_POINTS: u32 = 7;
/// Points for a correct answer on the third or later attempt
pub const LATER_TRY_POINTS: u32 = 5;
/// Points deducted per hint used on the current word
pub const HINT_PENALTY: u32 = 2;
/// Bonus awarded on every fifth consecutive solve
pub const STREAK_BONUS_POINTS: u32 = 10;
/// Streak length between bonuses
pub const STREAK_INTERVAL: u32 = 5;

/// Points earned for a correct answer, given how many attempts it took
/// and how many hints were used. Floored at zero, never negative.
pub fn score_for_attempt(attempt_count: u32, hints_used: u32) -> u32 {
    let base = match attempt_count {
        0 => 0,
        1 => FIRST_TRY_POINTS,
        2 => SECOND_TRY_POINTS,
        _ => LATER_TRY_POINTS,
    };
    base.saturating_sub(hints_used.saturating_mul(HINT_PENALTY))
}

/// Streak bonus for the current success. Evaluated after the streak has
/// been incremented: 10 points on every fifth solve in a row.
pub fn streak_bonus(streak: u32) -> u32 {
    if streak > 0 && streak % STREAK_INTERVAL == 0 {
        STREAK_BONUS_POINTS
    } else {
        0
    }
}

/// End-of-round statistics shown on the summary screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub score: u32,
    pub words_attempted: usize,
    pub words_solved: usize,
    pub words_skipped: usize,
    pub longest_streak: u32,
}

impl RoundStats {
    /// Solved words as a percentage of words attempted.
    pub fn accuracy_percent(&self) -> u32 {
        if self.words_attempted == 0 {
            return 0;
        }
        (self.words_solved * 100 / self.words_attempted) as u32
    }
}
