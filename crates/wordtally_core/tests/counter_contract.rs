use std::sync::Once;

use pretty_assertions::assert_eq;
use wordtally_core::{CounterError, WordCount, WordFrequencyCounter, WordStatistics};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

fn add(counter: &mut WordFrequencyCounter, word: &str) {
    counter
        .add_word(Some(word))
        .expect("present words are always accepted");
}

#[test]
fn statistics_are_empty_after_creation() {
    init_logging();
    let counter = WordFrequencyCounter::new();

    assert_eq!(counter.get_statistics(), Vec::<WordCount>::new());
}

#[test]
fn statistics_contain_item_after_addition() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "abc");

    assert_eq!(counter.get_statistics(), vec![WordCount::new("abc", 1)]);
}

#[test]
fn statistics_contain_many_items_after_distinct_additions() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "abc");
    add(&mut counter, "def");

    assert_eq!(counter.get_statistics().len(), 2);
}

#[test]
fn repeated_word_merges_into_one_entry() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "aaaaaaaaaa");
    add(&mut counter, "aaaaaaaaaa");

    assert_eq!(
        counter.get_statistics(),
        vec![WordCount::new("aaaaaaaaaa", 2)]
    );
}

#[test]
fn statistics_return_same_result_on_second_call() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "abc");

    let first = counter.get_statistics();
    let second = counter.get_statistics();

    assert_eq!(first, vec![WordCount::new("abc", 1)]);
    assert_eq!(first, second);
}

#[test]
fn statistics_are_rebuilt_on_every_call() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "abc");
    assert_eq!(counter.get_statistics().len(), 1);

    add(&mut counter, "def");
    assert_eq!(counter.get_statistics().len(), 2);
}

#[test]
fn returned_snapshot_is_unaffected_by_later_additions() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "abc");

    let snapshot = counter.get_statistics();
    add(&mut counter, "def");

    assert_eq!(snapshot, vec![WordCount::new("abc", 1)]);
}

#[test]
fn missing_word_is_rejected() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();

    assert_eq!(counter.add_word(None), Err(CounterError::InvalidArgument));
}

#[test]
fn rejected_missing_word_leaves_table_unchanged() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "abc");

    let _ = counter.add_word(None);

    assert_eq!(counter.get_statistics(), vec![WordCount::new("abc", 1)]);
}

#[test]
fn empty_word_is_ignored() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "");

    assert_eq!(counter.get_statistics(), Vec::<WordCount>::new());
}

#[test]
fn whitespace_word_is_ignored() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    add(&mut counter, "   ");

    assert_eq!(counter.get_statistics(), Vec::<WordCount>::new());
}

#[test]
fn rejection_message_names_the_expectation() {
    init_logging();

    assert_eq!(
        CounterError::InvalidArgument.to_string(),
        "word must be a non-null string"
    );
}
