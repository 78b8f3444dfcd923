//! Wordtally core: word normalization, tallying, and ranked frequency snapshots.
mod counter;
mod types;

pub use counter::{normalize_word, CounterError, WordFrequencyCounter, WordStatistics};
pub use types::{WordCount, MAX_WORD_LEN};
