//! Round session state machine
//!
//! Owns all mutable round state (current word, scrambled form, score,
//! streak, timer, solved/missed lists) and the operation set the UI
//! invokes: start, submit, skip, reveal_hint, tick, reset.
//!
//! Two timers exist per round. The 1-second countdown is driven by the
//! event loop calling `tick`. The one-shot auto-advance after a solve or
//! skip is a deadline held here and consumed by `poll_advance`; round end
//! and reset both clear it, so a stale deadline can never touch a
//! finished round.

use std::time::{Duration, Instant};

use crate::game::reveal;
use crate::game::scoring::{self, RoundStats};
use crate::game::timer;
use crate::game::word_bank::{self, Level, WordEntry};

/// Delay before the next word loads after a correct answer
pub const SOLVE_ADVANCE_DELAY: Duration = Duration::from_secs(2);
/// Delay before the next word loads after a skip
pub const SKIP_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LevelSelect,
    Playing,
    Summary,
}

/// Tone of a feedback message, used by the UI for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Hint,
}

/// A message shown under the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    fn success(text: String) -> Self {
        Feedback {
            kind: FeedbackKind::Success,
            text,
        }
    }

    fn error(text: String) -> Self {
        Feedback {
            kind: FeedbackKind::Error,
            text,
        }
    }

    fn hint(text: String) -> Self {
        Feedback {
            kind: FeedbackKind::Hint,
            text,
        }
    }
}

/// Session state for one player. Created fresh at level select, discarded
/// on reset.
pub struct GameSession {
    phase: Phase,
    level: Option<Level>,
    /// Word queue for the round, fixed at start
    word_queue: Vec<WordEntry>,
    current_index: usize,
    /// Scrambled form of the current word
    scrambled: String,
    /// Whether the current word has already been recorded as solved or
    /// missed. Guards against double-recording when the timer expires
    /// while an auto-advance is pending.
    current_resolved: bool,
    /// Current typed answer
    pub input: String,
    attempt_count: u32,
    hints_used: u32,
    /// Letter positions revealed as hints for the current word
    revealed: Vec<usize>,
    score: u32,
    streak: u32,
    longest_streak: u32,
    time_remaining: u32,
    solved_words: Vec<WordEntry>,
    missed_words: Vec<WordEntry>,
    feedback: Option<Feedback>,
    /// Pending one-shot auto-advance deadline
    advance_at: Option<Instant>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            phase: Phase::LevelSelect,
            level: None,
            word_queue: Vec::new(),
            current_index: 0,
            scrambled: String::new(),
            current_resolved: false,
            input: String::new(),
            attempt_count: 0,
            hints_used: 0,
            revealed: Vec::new(),
            score: 0,
            streak: 0,
            longest_streak: 0,
            time_remaining: 0,
            solved_words: Vec::new(),
            missed_words: Vec::new(),
            feedback: None,
            advance_at: None,
        }
    }
}

impl GameSession {
    /// Create a new session at level select
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round at the given level with a freshly shuffled queue.
    /// Only valid at level select; a level with no words is a no-op.
    pub fn start(&mut self, level: Level) {
        let words = word_bank::words_for_level(level);
        self.start_with_words(level, words);
    }

    /// Start a round with an explicit word queue (for testing/seeding).
    pub fn start_with_words(&mut self, level: Level, words: Vec<WordEntry>) {
        if self.phase != Phase::LevelSelect {
            return;
        }
        if words.is_empty() {
            return;
        }

        self.level = Some(level);
        self.word_queue = words;
        self.current_index = 0;
        self.score = 0;
        self.streak = 0;
        self.longest_streak = 0;
        self.time_remaining = timer::time_limit(level);
        self.solved_words.clear();
        self.missed_words.clear();
        self.advance_at = None;
        self.load_current_word();
        self.phase = Phase::Playing;
    }

    /// Load the word at `current_index` and reset per-word state.
    fn load_current_word(&mut self) {
        let word = &self.word_queue[self.current_index];
        self.scrambled = word_bank::scramble(&word.word);
        self.current_resolved = false;
        self.input.clear();
        self.attempt_count = 0;
        self.hints_used = 0;
        self.revealed.clear();
        self.feedback = None;
    }

    /// The word currently in play
    pub fn current_word(&self) -> Option<&WordEntry> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.word_queue.get(self.current_index)
    }

    /// Handle typed input (ignored while the word is resolved and an
    /// advance is pending)
    pub fn on_char(&mut self, c: char) {
        if self.phase != Phase::Playing || self.current_resolved {
            return;
        }
        self.input.push(c);
    }

    /// Handle backspace
    pub fn on_backspace(&mut self) {
        if self.phase != Phase::Playing || self.current_resolved {
            return;
        }
        self.input.pop();
    }

    /// Submit the current input as an answer. Blank input is a no-op.
    pub fn submit(&mut self) {
        if self.phase != Phase::Playing || self.current_resolved {
            return;
        }
        if self.input.trim().is_empty() {
            return;
        }
        let Some(word) = self.word_queue.get(self.current_index).cloned() else {
            return;
        };

        self.attempt_count += 1;

        if word_bank::validate(&self.input, &word.word) {
            let points = scoring::score_for_attempt(self.attempt_count, self.hints_used);
            self.streak += 1;
            let bonus = scoring::streak_bonus(self.streak);
            self.score += points + bonus;
            if self.streak > self.longest_streak {
                self.longest_streak = self.streak;
            }

            let mut text = format!("Correct! \"{}\" - {}", word.word, word.meaning);
            if bonus > 0 {
                text.push_str(&format!(" (+{} streak bonus!)", bonus));
            }
            self.feedback = Some(Feedback::success(text));

            self.solved_words.push(word);
            self.current_resolved = true;
            // Buffer stays empty until the next word loads.
            self.input.clear();
            self.advance_at = Some(Instant::now() + SOLVE_ADVANCE_DELAY);
        } else {
            // Wrong guess is a normal transition, not an error: the
            // streak breaks and the player may retry without limit.
            self.streak = 0;
            self.feedback = Some(Feedback::error(wrong_answer_feedback(
                self.attempt_count,
                &word.word,
            )));
            self.input.clear();
        }
    }

    /// Skip the current word. It is recorded as missed; the streak is
    /// preserved.
    pub fn skip(&mut self) {
        if self.phase != Phase::Playing || self.current_resolved {
            return;
        }
        let Some(word) = self.word_queue.get(self.current_index).cloned() else {
            return;
        };

        self.feedback = Some(Feedback::hint(format!(
            "Skipped! The word was \"{}\" - {}",
            word.word, word.meaning
        )));
        self.missed_words.push(word);
        self.current_resolved = true;
        self.advance_at = Some(Instant::now() + SKIP_ADVANCE_DELAY);
    }

    /// Reveal one more letter of the current word. No-op once every
    /// letter is revealed.
    pub fn reveal_hint(&mut self) {
        if self.phase != Phase::Playing || self.current_resolved {
            return;
        }
        let Some(word) = self.word_queue.get(self.current_index) else {
            return;
        };

        if let Some(index) = reveal::pick_hint_index(&word.word, &self.revealed) {
            self.revealed.push(index);
            self.hints_used += 1;
            self.feedback = Some(Feedback::hint(format!(
                "Revealed letter {} of {} (-{} points)",
                index + 1,
                word.word.len(),
                scoring::HINT_PENALTY
            )));
        }
    }

    /// One-second countdown tick. Reaching zero ends the round.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing || self.time_remaining == 0 {
            return;
        }
        self.time_remaining -= 1;
        if self.time_remaining == 0 {
            self.end_round();
        }
    }

    /// Consume the pending auto-advance once its deadline has passed.
    pub fn poll_advance(&mut self, now: Instant) {
        if let Some(deadline) = self.advance_at {
            if now >= deadline {
                self.advance_at = None;
                self.next_word();
            }
        }
    }

    /// Move to the next word, or end the round if the queue is exhausted.
    fn next_word(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.current_index + 1 >= self.word_queue.len() {
            self.end_round();
            return;
        }
        self.current_index += 1;
        self.load_current_word();
    }

    /// End the round: record an unresolved in-progress word as missed,
    /// cancel the pending advance, show the summary.
    fn end_round(&mut self) {
        if !self.current_resolved {
            if let Some(word) = self.word_queue.get(self.current_index).cloned() {
                self.missed_words.push(word);
                self.current_resolved = true;
            }
        }
        self.advance_at = None;
        self.phase = Phase::Summary;
    }

    /// Abandon everything and return to level select. The interrupted
    /// word is not recorded as missed. Idempotent.
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    // --- read-only view for the UI ---

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Scrambled form with revealed letters shown at their true positions
    pub fn display_word(&self) -> String {
        match self.word_queue.get(self.current_index) {
            Some(word) => reveal::render_partial(&self.scrambled, &word.word, &self.revealed),
            None => String::new(),
        }
    }

    /// Whether another hint is available for the current word
    pub fn can_reveal(&self) -> bool {
        match self.word_queue.get(self.current_index) {
            Some(word) => self.revealed.len() < word.word.chars().count(),
            None => false,
        }
    }

    /// 1-based position of the current word in the queue
    pub fn word_number(&self) -> usize {
        (self.current_index + 1).min(self.word_queue.len())
    }

    pub fn words_total(&self) -> usize {
        self.word_queue.len()
    }

    pub fn solved_words(&self) -> &[WordEntry] {
        &self.solved_words
    }

    pub fn missed_words(&self) -> &[WordEntry] {
        &self.missed_words
    }

    /// Round statistics for the summary screen
    pub fn stats(&self) -> RoundStats {
        RoundStats {
            score: self.score,
            words_attempted: self.solved_words.len() + self.missed_words.len(),
            words_solved: self.solved_words.len(),
            words_skipped: self.missed_words.len(),
            longest_streak: self.longest_streak,
        }
    }
}

/// Tiered feedback after a wrong guess. Content only: the word itself is
/// never disclosed here.
fn wrong_answer_feedback(attempt_count: u32, word: &str) -> String {
    match attempt_count {
        1 => format!(
            "Not quite. Hint: it starts with \"{}\"",
            word.chars().next().unwrap_or(' ')
        ),
        2 => format!("Try again. Hint: it's {} letters long", word.chars().count()),
        _ => "Keep trying! You can do it!".to_string(),
    }
}
