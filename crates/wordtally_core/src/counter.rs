use std::collections::HashMap;

use thiserror::Error;

use crate::{WordCount, MAX_WORD_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CounterError {
    /// The caller passed no word at all. An absent word is a caller bug
    /// and must never be swallowed like a blank one.
    #[error("word must be a non-null string")]
    InvalidArgument,
}

/// Behavioral contract shared by the canonical counter and any
/// alternative implementation.
pub trait WordStatistics {
    /// Tallies one word, normalizing it first.
    ///
    /// `None` fails with [`CounterError::InvalidArgument`] and leaves the
    /// table untouched. Empty and whitespace-only words are ignored
    /// without error.
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError>;

    /// Returns a fresh snapshot of all tallies, ordered by descending
    /// count; equal counts fall back to lexicographic word order.
    fn get_statistics(&self) -> Vec<WordCount>;
}

/// Frequency dictionary of added words.
///
/// Words are compared without regard to character case after being cut to
/// [`MAX_WORD_LEN`] characters. Each instance owns its table; independent
/// counters never observe each other's words.
#[derive(Debug, Default)]
pub struct WordFrequencyCounter {
    tallies: HashMap<String, u32>,
}

impl WordFrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStatistics for WordFrequencyCounter {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        *self.tallies.entry(normalize_word(word)).or_insert(0) += 1;
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut rows: Vec<WordCount> = self
            .tallies
            .iter()
            .map(|(word, count)| WordCount::new(word.clone(), *count))
            .collect();
        rows.sort_by(|left, right| {
            right
                .count
                .cmp(&left.count)
                .then_with(|| left.word.cmp(&right.word))
        });
        rows
    }
}

/// Cuts `word` to its first [`MAX_WORD_LEN`] characters, then lowercases
/// each kept character with the locale-independent Unicode mapping.
///
/// Locale tailoring (e.g. the Turkish dotless i) is deliberately not
/// applied. The blank check in [`WordStatistics::add_word`] runs on the
/// raw input, so a word of ten spaces followed by a letter normalizes to
/// all spaces and is still tallied.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .take(MAX_WORD_LEN)
        .flat_map(char::to_lowercase)
        .collect()
}
