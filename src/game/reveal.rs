//! Letter-reveal hints
//!
//! A hint discloses one letter of the correct word at its true position.
//! Revealed positions accumulate per word and overwrite the scrambled
//! display at those positions.

use rand::prelude::*;

/// Pick a random unrevealed letter position in `word`, or `None` once
/// every position has been revealed.
pub fn pick_hint_index(word: &str, revealed: &[usize]) -> Option<usize> {
    pick_hint_index_with_rng(word, revealed, &mut rand::rng())
}

/// Hint-index selection using a specific RNG (for testing/seeding).
pub fn pick_hint_index_with_rng<R: Rng>(
    word: &str,
    revealed: &[usize],
    rng: &mut R,
) -> Option<usize> {
    let candidates: Vec<usize> = (0..word.chars().count())
        .filter(|i| !revealed.contains(i))
        .collect();
    candidates.choose(rng).copied()
}

/// Build the display form of the scrambled word: revealed positions show
/// the correct word's letter at that position, everything else shows the
/// scrambled letter.
pub fn render_partial(scrambled: &str, word: &str, revealed: &[usize]) -> String {
    let mut display: Vec<char> = scrambled.chars().collect();
    let correct: Vec<char> = word.chars().collect();
    for &i in revealed {
        if i < display.len() && i < correct.len() {
            display[i] = correct[i];
        }
    }
    display.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_skips_revealed_positions() {
        let revealed = [0, 1, 3];
        for _ in 0..50 {
            let index = pick_hint_index("WORD", &revealed).unwrap();
            assert_eq!(index, 2);
        }
    }

    #[test]
    fn test_pick_returns_none_when_fully_revealed() {
        assert_eq!(pick_hint_index("CAT", &[0, 1, 2]), None);
    }

    #[test]
    fn test_pick_returns_none_for_empty_word() {
        assert_eq!(pick_hint_index("", &[]), None);
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        for _ in 0..100 {
            let index = pick_hint_index("TABLE", &[]).unwrap();
            assert!(index < 5);
        }
    }

    #[test]
    fn test_pick_seeded_is_deterministic() {
        use rand::SeedableRng;

        let mut rng1 = rand::rngs::StdRng::seed_from_u64(9);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(9);

        assert_eq!(
            pick_hint_index_with_rng("CULTURE", &[2], &mut rng1),
            pick_hint_index_with_rng("CULTURE", &[2], &mut rng2)
        );
    }

    #[test]
    fn test_render_without_reveals_is_scrambled_form() {
        assert_eq!(render_partial("LBATE", "TABLE", &[]), "LBATE");
    }

    #[test]
    fn test_render_overwrites_true_positions() {
        // Reveal positions 0 and 3 of TABLE: T and L land at their
        // correct-word positions, not where they sit in the scramble.
        assert_eq!(render_partial("LBATE", "TABLE", &[0, 3]), "TBALE");
    }

    #[test]
    fn test_render_fully_revealed_is_correct_word() {
        assert_eq!(render_partial("LBATE", "TABLE", &[0, 1, 2, 3, 4]), "TABLE");
    }

    #[test]
    fn test_render_ignores_out_of_bounds_indices() {
        assert_eq!(render_partial("TAC", "CAT", &[9]), "TAC");
    }
}
