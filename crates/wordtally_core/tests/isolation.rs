use std::sync::Once;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use wordtally_core::{WordCount, WordFrequencyCounter, WordStatistics};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

#[test]
fn independent_counters_do_not_share_words() {
    init_logging();
    let mut first = WordFrequencyCounter::new();
    let second = WordFrequencyCounter::new();

    first
        .add_word(Some("solo"))
        .expect("present words are always accepted");

    assert_eq!(first.get_statistics(), vec![WordCount::new("solo", 1)]);
    assert_eq!(second.get_statistics(), Vec::<WordCount>::new());
}

#[test]
fn distinct_words_keep_distinct_entries() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    let word_count = 500;
    for i in 0..word_count {
        counter
            .add_word(Some(&i.to_string()))
            .expect("present words are always accepted");
    }

    let stats = counter.get_statistics();
    assert_eq!(stats.len(), word_count);
    assert!(stats.iter().all(|row| row.count == 1));
}

#[test]
fn bulk_additions_complete_quickly() {
    init_logging();
    let mut counter = WordFrequencyCounter::new();
    let started = Instant::now();

    for i in 0..5_000 {
        counter
            .add_word(Some(&i.to_string()))
            .expect("present words are always accepted");
    }
    for _ in 0..20_000 {
        counter
            .add_word(Some("9"))
            .expect("present words are always accepted");
    }
    let stats = counter.get_statistics();

    let elapsed = started.elapsed();
    assert_eq!(stats.len(), 5_000);
    assert!(
        elapsed < Duration::from_millis(1_500),
        "tallying took {elapsed:?}"
    );
}
