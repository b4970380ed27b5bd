//! Word bank: embedded catalog, level filtering, scrambling
//!
//! The catalog is embedded at build time (pipe-delimited, one entry per
//! line) and parsed once into a static list. Lines starting with '#' are
//! comments; lines with an unknown level tag are skipped.

use once_cell::sync::Lazy;
use rand::prelude::*;

/// Embedded word catalog (word|level|category|hint|meaning|example)
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Pre-parsed catalog, built on first access
static CATALOG: Lazy<Vec<WordEntry>> = Lazy::new(|| {
    WORDS_DATA.lines().filter_map(parse_line).collect()
});

/// Difficulty level of a catalog entry and a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in menu order.
    pub fn all() -> &'static [Level] {
        &[Level::Beginner, Level::Intermediate, Level::Advanced]
    }

    /// Display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Typical word length shown on the level-select screen.
    pub fn length_hint(&self) -> &'static str {
        match self {
            Level::Beginner => "3-5 letters",
            Level::Intermediate => "5-7 letters",
            Level::Advanced => "6-8 letters",
        }
    }

    /// Parse a catalog level tag.
    pub fn from_tag(tag: &str) -> Option<Level> {
        match tag {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }
}

/// A single catalog entry. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Canonical uppercase form, the match target for answers
    pub word: String,
    pub level: Level,
    pub category: String,
    pub hint: String,
    pub meaning: String,
    pub example: String,
}

fn parse_line(line: &str) -> Option<WordEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.splitn(6, '|');
    let word = fields.next()?;
    let level = Level::from_tag(fields.next()?)?;
    let category = fields.next()?;
    let hint = fields.next()?;
    let meaning = fields.next()?;
    let example = fields.next()?;
    Some(WordEntry {
        word: word.to_string(),
        level,
        category: category.to_string(),
        hint: hint.to_string(),
        meaning: meaning.to_string(),
        example: example.to_string(),
    })
}

/// All words for a level, in a fresh shuffled order.
/// The catalog itself is never mutated.
pub fn words_for_level(level: Level) -> Vec<WordEntry> {
    words_for_level_with_rng(level, &mut rand::rng())
}

/// Level filter + shuffle using a specific RNG (for testing/seeding).
pub fn words_for_level_with_rng<R: Rng>(level: Level, rng: &mut R) -> Vec<WordEntry> {
    let mut words: Vec<WordEntry> = CATALOG
        .iter()
        .filter(|entry| entry.level == level)
        .cloned()
        .collect();
    words.shuffle(rng);
    words
}

/// Number of catalog entries at a level.
pub fn word_count(level: Level) -> usize {
    CATALOG.iter().filter(|entry| entry.level == level).count()
}

/// Unique categories at a level, in catalog order.
pub fn categories(level: Level) -> Vec<&'static str> {
    let catalog: &'static Vec<WordEntry> = Lazy::force(&CATALOG);
    let mut seen: Vec<&'static str> = Vec::new();
    for entry in catalog.iter().filter(|entry| entry.level == level) {
        if !seen.contains(&entry.category.as_str()) {
            seen.push(entry.category.as_str());
        }
    }
    seen
}

/// Scramble a word into a random permutation of its letters.
/// Guaranteed to differ from the input whenever the word has more than
/// one letter; single-letter words are returned unchanged.
pub fn scramble(word: &str) -> String {
    scramble_with_rng(word, &mut rand::rng())
}

/// Scramble using a specific RNG (for testing/seeding).
pub fn scramble_with_rng<R: Rng>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if original.len() <= 1 {
        return word.to_string();
    }

    let mut letters = original.clone();
    // Fisher-Yates, rerolled until the permutation differs
    loop {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }
}

/// Case-insensitive answer check. Surrounding whitespace on the input is
/// ignored; empty input never matches.
pub fn validate(input: &str, word: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }
    input.eq_ignore_ascii_case(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_all_entries() {
        let data_lines = WORDS_DATA
            .lines()
            .filter(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .count();
        assert_eq!(CATALOG.len(), data_lines);
        assert_eq!(CATALOG.len(), 43);
    }

    #[test]
    fn test_every_level_has_words() {
        for &level in Level::all() {
            assert!(
                word_count(level) > 0,
                "No words for level {}",
                level.label()
            );
        }
    }

    #[test]
    fn test_catalog_words_are_uppercase() {
        for entry in CATALOG.iter() {
            assert!(
                entry.word.chars().all(|c| c.is_ascii_uppercase()),
                "Non-uppercase word: {}",
                entry.word
            );
        }
    }

    #[test]
    fn test_comment_and_blank_lines_skipped() {
        assert!(parse_line("# a comment").is_none());
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn test_unknown_level_tag_skipped() {
        assert!(parse_line("WORD|expert|Cat|h|m|e").is_none());
    }

    #[test]
    fn test_words_for_level_filters() {
        let words = words_for_level(Level::Beginner);
        assert_eq!(words.len(), word_count(Level::Beginner));
        for entry in &words {
            assert_eq!(entry.level, Level::Beginner);
        }
    }

    #[test]
    fn test_words_for_level_seeded_shuffle_is_deterministic() {
        use rand::SeedableRng;

        let mut rng1 = rand::rngs::StdRng::seed_from_u64(42);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(42);

        let a = words_for_level_with_rng(Level::Advanced, &mut rng1);
        let b = words_for_level_with_rng(Level::Advanced, &mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scramble_differs_and_preserves_letters() {
        for entry in CATALOG.iter() {
            let scrambled = scramble(&entry.word);
            assert_ne!(scrambled, entry.word, "Scramble equals input: {}", entry.word);

            let mut got: Vec<char> = scrambled.chars().collect();
            let mut want: Vec<char> = entry.word.chars().collect();
            got.sort_unstable();
            want.sort_unstable();
            assert_eq!(got, want, "Letter multiset changed for {}", entry.word);
        }
    }

    #[test]
    fn test_scramble_single_letter_unchanged() {
        assert_eq!(scramble("A"), "A");
        assert_eq!(scramble(""), "");
    }

    #[test]
    fn test_scramble_seeded_is_deterministic() {
        use rand::SeedableRng;

        let mut rng1 = rand::rngs::StdRng::seed_from_u64(7);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(7);

        assert_eq!(
            scramble_with_rng("PATIENCE", &mut rng1),
            scramble_with_rng("PATIENCE", &mut rng2)
        );
    }

    #[test]
    fn test_validate_trims_and_ignores_case() {
        assert!(validate(" Apple ", "APPLE"));
        assert!(validate("apple", "APPLE"));
        assert!(validate("APPLE", "APPLE"));
    }

    #[test]
    fn test_validate_rejects_blank_and_wrong() {
        assert!(!validate("", "APPLE"));
        assert!(!validate("   ", "APPLE"));
        assert!(!validate("apply", "APPLE"));
    }

    #[test]
    fn test_categories_unique_per_level() {
        let cats = categories(Level::Beginner);
        assert!(cats.contains(&"Food"));
        let mut deduped = cats.clone();
        deduped.dedup();
        assert_eq!(cats, deduped);
    }

    #[test]
    fn test_level_tag_round_trip() {
        assert_eq!(Level::from_tag("beginner"), Some(Level::Beginner));
        assert_eq!(Level::from_tag("intermediate"), Some(Level::Intermediate));
        assert_eq!(Level::from_tag("advanced"), Some(Level::Advanced));
        assert_eq!(Level::from_tag("EXPERT"), None);
    }
}
