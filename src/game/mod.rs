//! Game rules: word catalog, scoring, letter reveals, round timers

pub mod reveal;
pub mod scoring;
pub mod timer;
pub mod word_bank;
