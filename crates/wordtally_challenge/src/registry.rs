use wordtally_core::{WordFrequencyCounter, WordStatistics};

use crate::implementations::{
    AcceptsMissingWord, CachesFirstRead, CountsOnlyFirst, CutsBeforeBlankCheck, DrainsOnRead,
    FixedSlotTable, HomegrownLowercase, KeepsOriginalCase, LateTruncation, PanicsOnMissingWord,
    RejectsBlankWords, ResortsEveryAdd, ReversesTies, SharedTally, SkipsTruncation,
    SortsAscendingCount, SortsByWordOnly, TalliesWhitespace, TrimsMediumWords,
};

/// Builds a fresh counter for one evaluation run.
pub type Factory = fn() -> Box<dyn WordStatistics>;

/// One catalog entry: a stable name and the factory that constructs the
/// implementation behind it.
pub struct RegisteredImplementation {
    pub name: &'static str,
    pub factory: Factory,
}

/// The canonical counter, for grading the checklist itself.
pub fn reference_factory() -> Box<dyn WordStatistics> {
    Box::new(WordFrequencyCounter::new())
}

/// Every defective implementation, each constructed independently rather
/// than derived from the canonical counter.
pub fn incorrect_implementations() -> Vec<RegisteredImplementation> {
    fn entry(name: &'static str, factory: Factory) -> RegisteredImplementation {
        RegisteredImplementation { name, factory }
    }

    vec![
        entry("skips_truncation", || Box::new(SkipsTruncation::default())),
        entry("late_truncation", || Box::new(LateTruncation::default())),
        entry("trims_medium_words", || Box::new(TrimsMediumWords::default())),
        entry("cuts_before_blank_check", || {
            Box::new(CutsBeforeBlankCheck::default())
        }),
        entry("tallies_whitespace", || Box::new(TalliesWhitespace::default())),
        entry("rejects_blank_words", || Box::new(RejectsBlankWords::default())),
        entry("accepts_missing_word", || {
            Box::new(AcceptsMissingWord::default())
        }),
        entry("panics_on_missing_word", || {
            Box::new(PanicsOnMissingWord::default())
        }),
        entry("counts_only_first", || Box::new(CountsOnlyFirst::default())),
        entry("keeps_original_case", || {
            Box::new(KeepsOriginalCase::default())
        }),
        entry("homegrown_lowercase", || {
            Box::new(HomegrownLowercase::default())
        }),
        entry("sorts_by_word_only", || Box::new(SortsByWordOnly::default())),
        entry("sorts_ascending_count", || {
            Box::new(SortsAscendingCount::default())
        }),
        entry("reverses_ties", || Box::new(ReversesTies::default())),
        entry("drains_on_read", || Box::new(DrainsOnRead::default())),
        entry("caches_first_read", || Box::new(CachesFirstRead::default())),
        entry("shared_tally", || Box::new(SharedTally::new())),
        entry("fixed_slot_table", || Box::new(FixedSlotTable::default())),
        entry("resorts_every_add", || Box::new(ResortsEveryAdd::default())),
    ]
}
