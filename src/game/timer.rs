//! Round timers: per-level budgets and display bands

use crate::game::word_bank::Level;

/// Seconds on the clock for a round at the given level.
pub fn time_limit(level: Level) -> u32 {
    match level {
        Level::Beginner => 90,
        Level::Intermediate => 120,
        Level::Advanced => 150,
    }
}

/// Display band for the remaining time, used for timer coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerBand {
    Normal,
    Warning,
    Critical,
}

/// Classify the remaining time. Critical strictly under 5 seconds,
/// warning from 5 up to (not including) 10. Exactly 5 seconds is warning,
/// and 0 is normal: the round is already over.
pub fn classify(time_remaining: u32) -> TimerBand {
    if time_remaining > 0 && time_remaining < 5 {
        TimerBand::Critical
    } else if time_remaining < 10 && time_remaining > 0 {
        TimerBand::Warning
    } else {
        TimerBand::Normal
    }
}

/// Format seconds as MM:SS.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
