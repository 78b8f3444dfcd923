//! Deliberately defective counter implementations.
//!
//! Each type seeds exactly one defect behind the [`WordStatistics`]
//! contract. Writing a checklist that catches all of them is the point of
//! the exercise; read this file only after yours is done.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use wordtally_core::{normalize_word, CounterError, WordCount, WordStatistics, MAX_WORD_LEN};

fn bump(tallies: &mut HashMap<String, u32>, key: String) {
    *tallies.entry(key).or_insert(0) += 1;
}

fn ranked_rows(tallies: &HashMap<String, u32>) -> Vec<WordCount> {
    let mut rows: Vec<WordCount> = tallies
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

fn unranked_rows(tallies: &HashMap<String, u32>) -> Vec<WordCount> {
    tallies
        .iter()
        .map(|(word, count)| WordCount::new(word.clone(), *count))
        .collect()
}

/// Never cuts long words down to [`MAX_WORD_LEN`] characters.
#[derive(Debug, Default)]
pub struct SkipsTruncation {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for SkipsTruncation {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, word.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Only cuts words strictly longer than eleven characters.
#[derive(Debug, Default)]
pub struct LateTruncation {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for LateTruncation {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let key = if word.chars().count() - 1 > MAX_WORD_LEN {
            word.chars().take(MAX_WORD_LEN).collect::<String>()
        } else {
            word.to_string()
        };
        bump(&mut self.tallies, key.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Also shortens words of six to ten characters by two.
#[derive(Debug, Default)]
pub struct TrimsMediumWords {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for TrimsMediumWords {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let len = word.chars().count();
        let key: String = if len > MAX_WORD_LEN {
            word.chars().take(MAX_WORD_LEN).collect()
        } else if len > 5 {
            word.chars().take(len - 2).collect()
        } else {
            word.to_string()
        };
        bump(&mut self.tallies, key.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Runs the blank check after the cut, dropping words whose first ten
/// characters are whitespace.
#[derive(Debug, Default)]
pub struct CutsBeforeBlankCheck {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for CutsBeforeBlankCheck {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        let cut: String = word.chars().take(MAX_WORD_LEN).collect();
        if cut.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, cut.to_lowercase());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Skips only truly empty words, so whitespace-only ones get tallied.
#[derive(Debug, Default)]
pub struct TalliesWhitespace {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for TalliesWhitespace {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Treats blank words like missing ones and rejects them.
#[derive(Debug, Default)]
pub struct RejectsBlankWords {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for RejectsBlankWords {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = match word {
            Some(word) if !word.trim().is_empty() => word,
            _ => return Err(CounterError::InvalidArgument),
        };
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Silently ignores a missing word instead of rejecting it.
#[derive(Debug, Default)]
pub struct AcceptsMissingWord {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for AcceptsMissingWord {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let Some(word) = word else {
            return Ok(());
        };
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Unwraps a missing word instead of returning the contract error.
#[derive(Debug, Default)]
pub struct PanicsOnMissingWord {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for PanicsOnMissingWord {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.expect("caller always passes a word");
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Creates an entry on first sight but never increments it again.
#[derive(Debug, Default)]
pub struct CountsOnlyFirst {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for CountsOnlyFirst {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        self.tallies.entry(normalize_word(word)).or_insert(1);
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Cuts long words but keeps their original character case.
#[derive(Debug, Default)]
pub struct KeepsOriginalCase {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for KeepsOriginalCase {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, word.chars().take(MAX_WORD_LEN).collect());
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Lowercases by offset arithmetic over two hardcoded alphabet ranges.
#[derive(Debug, Default)]
pub struct HomegrownLowercase {
    tallies: HashMap<String, u32>,
}

impl HomegrownLowercase {
    fn fold_char(c: char) -> char {
        match c {
            'A'..='Z' => (c as u8 + 32) as char,
            // 'Ё' sits outside this range and slips through unchanged.
            'А'..='Я' => char::from_u32(c as u32 + 32).unwrap_or(c),
            _ => c,
        }
    }
}

impl WordStatistics for HomegrownLowercase {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let key: String = word
            .chars()
            .take(MAX_WORD_LEN)
            .map(Self::fold_char)
            .collect();
        bump(&mut self.tallies, key);
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&self.tallies)
    }
}

/// Orders snapshots by word alone, ignoring frequency.
#[derive(Debug, Default)]
pub struct SortsByWordOnly {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for SortsByWordOnly {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut rows = unranked_rows(&self.tallies);
        rows.sort_by(|left, right| left.word.cmp(&right.word));
        rows
    }
}

/// Orders snapshots by ascending count with no tie-break at all.
#[derive(Debug, Default)]
pub struct SortsAscendingCount {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for SortsAscendingCount {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut rows = unranked_rows(&self.tallies);
        rows.sort_by_key(|row| row.count);
        rows
    }
}

/// Breaks frequency ties by descending instead of ascending word order.
#[derive(Debug, Default)]
pub struct ReversesTies {
    tallies: HashMap<String, u32>,
}

impl WordStatistics for ReversesTies {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut rows = unranked_rows(&self.tallies);
        rows.sort_by(|left, right| {
            right
                .count
                .cmp(&left.count)
                .then_with(|| right.word.cmp(&left.word))
        });
        rows
    }
}

/// Empties the table as a side effect of reading it.
#[derive(Debug, Default)]
pub struct DrainsOnRead {
    tallies: RefCell<HashMap<String, u32>>,
}

impl WordStatistics for DrainsOnRead {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(self.tallies.get_mut(), normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let drained = self.tallies.take();
        ranked_rows(&drained)
    }
}

/// Computes the snapshot once and keeps serving that first result.
#[derive(Debug, Default)]
pub struct CachesFirstRead {
    tallies: HashMap<String, u32>,
    cache: RefCell<Option<Vec<WordCount>>>,
}

impl WordStatistics for CachesFirstRead {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut self.tallies, normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        self.cache
            .borrow_mut()
            .get_or_insert_with(|| ranked_rows(&self.tallies))
            .clone()
    }
}

static SHARED_TALLIES: LazyLock<Mutex<HashMap<String, u32>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn shared_tallies() -> MutexGuard<'static, HashMap<String, u32>> {
    SHARED_TALLIES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Keeps every tally in one process-wide table; constructing a new counter
/// clears it for everyone.
#[derive(Debug)]
pub struct SharedTally;

impl SharedTally {
    pub fn new() -> Self {
        shared_tallies().clear();
        Self
    }
}

impl Default for SharedTally {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStatistics for SharedTally {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        bump(&mut shared_tallies(), normalize_word(word));
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        ranked_rows(&shared_tallies())
    }
}

const SLOT_COUNT: usize = 257;

/// Buckets words into a fixed slot table by hash, so distinct words
/// overwrite each other once the table gets crowded.
#[derive(Debug)]
pub struct FixedSlotTable {
    counts: Vec<u32>,
    words: Vec<Option<String>>,
}

impl Default for FixedSlotTable {
    fn default() -> Self {
        Self {
            counts: vec![0; SLOT_COUNT],
            words: vec![None; SLOT_COUNT],
        }
    }
}

impl FixedSlotTable {
    fn slot_of(key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % SLOT_COUNT as u64) as usize
    }
}

impl WordStatistics for FixedSlotTable {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let key = normalize_word(word);
        let slot = Self::slot_of(&key);
        self.counts[slot] += 1;
        self.words[slot] = Some(key);
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut rows: Vec<WordCount> = self
            .counts
            .iter()
            .zip(&self.words)
            .filter_map(|(count, word)| {
                word.as_ref()
                    .filter(|_| *count > 0)
                    .map(|word| WordCount::new(word.clone(), *count))
            })
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

/// Rebuilds and re-sorts the whole table on every addition.
#[derive(Debug, Default)]
pub struct ResortsEveryAdd {
    rows: Vec<(String, u32)>,
}

impl WordStatistics for ResortsEveryAdd {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), CounterError> {
        let word = word.ok_or(CounterError::InvalidArgument)?;
        if word.trim().is_empty() {
            return Ok(());
        }
        let key = normalize_word(word);
        let mut rows: Vec<(String, u32)> = Vec::with_capacity(self.rows.len() + 1);
        let mut seen = false;
        for (existing, count) in &self.rows {
            if *existing == key {
                rows.push((existing.clone(), count + 1));
                seen = true;
            } else {
                rows.push((existing.clone(), *count));
            }
        }
        if !seen {
            rows.push((key, 1));
        }
        rows.sort_by(|(left_word, left_count), (right_word, right_count)| {
            right_count
                .cmp(left_count)
                .then_with(|| left_word.cmp(right_word))
        });
        self.rows = rows;
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        self.rows
            .iter()
            .map(|(word, count)| WordCount::new(word.clone(), *count))
            .collect()
    }
}
