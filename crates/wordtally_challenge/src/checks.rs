use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Context, Result};
use wordtally_core::{CounterError, WordCount};

use crate::registry::Factory;

/// One named behavioral check, run against a fresh counter built by the
/// factory it receives. Checks that need several independent instances
/// call the factory repeatedly.
pub struct ContractCheck {
    pub name: &'static str,
    pub run: fn(Factory) -> Result<()>,
}

/// The full checklist, in rough order of how basic the behavior is.
pub fn contract_checks() -> Vec<ContractCheck> {
    fn check(name: &'static str, run: fn(Factory) -> Result<()>) -> ContractCheck {
        ContractCheck { name, run }
    }

    vec![
        check("empty_after_creation", empty_after_creation),
        check("tallies_single_word", tallies_single_word),
        check("tallies_distinct_words", tallies_distinct_words),
        check("merges_repeated_word", merges_repeated_word),
        check(
            "orders_by_descending_frequency",
            orders_by_descending_frequency,
        ),
        check(
            "breaks_frequency_ties_lexicographically",
            breaks_frequency_ties_lexicographically,
        ),
        check("repeated_read_is_stable", repeated_read_is_stable),
        check("read_reflects_new_words", read_reflects_new_words),
        check("rejects_missing_word", rejects_missing_word),
        check("ignores_blank_words", ignores_blank_words),
        check("cuts_words_longer_than_ten", cuts_words_longer_than_ten),
        check(
            "merges_cut_word_with_its_prefix",
            merges_cut_word_with_its_prefix,
        ),
        check("keeps_six_character_words_whole", keeps_six_character_words_whole),
        check(
            "keeps_whitespace_prefix_of_long_words",
            keeps_whitespace_prefix_of_long_words,
        ),
        check("folds_ascii_case", folds_ascii_case),
        check("folds_cyrillic_case", folds_cyrillic_case),
        check("isolates_instances", isolates_instances),
        check("tallies_many_distinct_words", tallies_many_distinct_words),
        check("sustains_bulk_additions", sustains_bulk_additions),
    ]
}

fn add(counter: &mut dyn wordtally_core::WordStatistics, word: &str) -> Result<()> {
    counter
        .add_word(Some(word))
        .with_context(|| format!("word {word:?} must be accepted"))?;
    Ok(())
}

fn expect_rows(actual: &[WordCount], expected: &[(&str, u32)]) -> Result<()> {
    let expected: Vec<WordCount> = expected
        .iter()
        .map(|(word, count)| WordCount::new(*word, *count))
        .collect();
    ensure!(
        actual == expected.as_slice(),
        "expected rows {expected:?}, got {actual:?}"
    );
    Ok(())
}

fn empty_after_creation(make: Factory) -> Result<()> {
    let counter = make();
    ensure!(
        counter.get_statistics().is_empty(),
        "a new counter must start with no tallies"
    );
    Ok(())
}

fn tallies_single_word(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "abc")?;
    expect_rows(&counter.get_statistics(), &[("abc", 1)])
}

fn tallies_distinct_words(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "abc")?;
    add(counter.as_mut(), "def")?;
    let stats = counter.get_statistics();
    ensure!(stats.len() == 2, "expected two entries, got {stats:?}");
    Ok(())
}

fn merges_repeated_word(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "aaaaaaaaaa")?;
    add(counter.as_mut(), "aaaaaaaaaa")?;
    expect_rows(&counter.get_statistics(), &[("aaaaaaaaaa", 2)])
}

fn orders_by_descending_frequency(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "aaaaaaaaaa")?;
    add(counter.as_mut(), "bbbbbbbbbb")?;
    add(counter.as_mut(), "bbbbbbbbbb")?;
    expect_rows(
        &counter.get_statistics(),
        &[("bbbbbbbbbb", 2), ("aaaaaaaaaa", 1)],
    )
}

fn breaks_frequency_ties_lexicographically(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "cccccccccc")?;
    add(counter.as_mut(), "aaaaaaaaaa")?;
    add(counter.as_mut(), "bbbbbbbbbb")?;
    expect_rows(
        &counter.get_statistics(),
        &[("aaaaaaaaaa", 1), ("bbbbbbbbbb", 1), ("cccccccccc", 1)],
    )
}

fn repeated_read_is_stable(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "abc")?;
    let first = counter.get_statistics();
    let second = counter.get_statistics();
    expect_rows(&first, &[("abc", 1)])?;
    ensure!(
        first == second,
        "two reads without additions must match: {first:?} vs {second:?}"
    );
    Ok(())
}

fn read_reflects_new_words(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "abc")?;
    ensure!(
        counter.get_statistics().len() == 1,
        "first read must see one entry"
    );
    add(counter.as_mut(), "def")?;
    ensure!(
        counter.get_statistics().len() == 2,
        "a read after another addition must see both entries"
    );
    Ok(())
}

fn rejects_missing_word(make: Factory) -> Result<()> {
    let mut counter = make();
    match counter.add_word(None) {
        Err(CounterError::InvalidArgument) => {}
        Ok(()) => bail!("a missing word must be rejected, not ignored"),
    }
    ensure!(
        counter.get_statistics().is_empty(),
        "a rejected word must not change the table"
    );
    Ok(())
}

fn ignores_blank_words(make: Factory) -> Result<()> {
    let mut counter = make();
    counter
        .add_word(Some(""))
        .context("an empty word must be ignored, not rejected")?;
    counter
        .add_word(Some("   "))
        .context("a whitespace word must be ignored, not rejected")?;
    ensure!(
        counter.get_statistics().is_empty(),
        "blank words must leave the table empty"
    );
    Ok(())
}

fn cuts_words_longer_than_ten(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "12345678901")?;
    expect_rows(&counter.get_statistics(), &[("1234567890", 1)])
}

fn merges_cut_word_with_its_prefix(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "12345678901")?;
    add(counter.as_mut(), "1234567890")?;
    expect_rows(&counter.get_statistics(), &[("1234567890", 2)])
}

fn keeps_six_character_words_whole(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "abcdef")?;
    expect_rows(&counter.get_statistics(), &[("abcdef", 1)])
}

fn keeps_whitespace_prefix_of_long_words(make: Factory) -> Result<()> {
    let mut counter = make();
    // Not blank as a whole; the cut keeps the ten leading spaces.
    add(counter.as_mut(), "          a")?;
    expect_rows(&counter.get_statistics(), &[("          ", 1)])
}

fn folds_ascii_case(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "aAa")?;
    add(counter.as_mut(), "AaA")?;
    expect_rows(&counter.get_statistics(), &[("aaa", 2)])
}

fn folds_cyrillic_case(make: Factory) -> Result<()> {
    let mut counter = make();
    add(counter.as_mut(), "ЖУК")?;
    add(counter.as_mut(), "жук")?;
    expect_rows(&counter.get_statistics(), &[("жук", 2)])?;

    let mut counter = make();
    add(counter.as_mut(), "Ё")?;
    add(counter.as_mut(), "ё")?;
    expect_rows(&counter.get_statistics(), &[("ё", 2)])
}

fn isolates_instances(make: Factory) -> Result<()> {
    let mut first = make();
    let second = make();
    add(first.as_mut(), "solo")?;
    expect_rows(&first.get_statistics(), &[("solo", 1)])?;
    ensure!(
        second.get_statistics().is_empty(),
        "an untouched counter must not see another instance's words"
    );
    Ok(())
}

fn tallies_many_distinct_words(make: Factory) -> Result<()> {
    let mut counter = make();
    let word_count = 500;
    for i in 0..word_count {
        add(counter.as_mut(), &i.to_string())?;
    }
    let stats = counter.get_statistics();
    ensure!(
        stats.len() == word_count,
        "expected {word_count} entries, got {}",
        stats.len()
    );
    ensure!(
        stats.iter().all(|row| row.count == 1),
        "every distinct word must be counted exactly once"
    );
    Ok(())
}

fn sustains_bulk_additions(make: Factory) -> Result<()> {
    let mut counter = make();
    let started = Instant::now();
    for i in 0..12_000 {
        add(counter.as_mut(), &i.to_string())?;
    }
    let stats = counter.get_statistics();
    let elapsed = started.elapsed();
    ensure!(stats.len() == 12_000, "bulk additions lost entries");
    ensure!(
        elapsed < Duration::from_millis(1_500),
        "tallying 12000 words took {elapsed:?}"
    );
    Ok(())
}
