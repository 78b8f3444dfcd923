use std::sync::Once;

use pretty_assertions::assert_eq;
use wordtally_challenge::{
    contract_checks, evaluate, evaluate_registry, incorrect_implementations, reference_factory,
    Factory,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

fn factory_named(name: &str) -> Factory {
    incorrect_implementations()
        .into_iter()
        .find(|implementation| implementation.name == name)
        .unwrap_or_else(|| panic!("no implementation registered as {name}"))
        .factory
}

#[test]
fn reference_implementation_passes_every_check() {
    init_logging();
    let report = evaluate("reference", reference_factory);

    assert_eq!(report.failed_checks, Vec::<String>::new());
}

#[test]
fn every_incorrect_implementation_fails_at_least_one_check() {
    init_logging();
    let reports = evaluate_registry();
    assert_eq!(reports.len(), incorrect_implementations().len());

    let survivors: Vec<&str> = reports
        .iter()
        .filter(|report| !report.is_caught())
        .map(|report| report.name.as_str())
        .collect();
    assert_eq!(
        survivors,
        Vec::<&str>::new(),
        "these implementations passed the whole checklist"
    );
}

#[test]
fn defects_are_caught_by_the_matching_check() {
    init_logging();
    // Defects touching process-wide state are left to the full sweep above
    // so parallel test threads cannot interfere with each other.
    for (name, expected_check) in [
        ("skips_truncation", "cuts_words_longer_than_ten"),
        ("sorts_by_word_only", "orders_by_descending_frequency"),
        ("drains_on_read", "repeated_read_is_stable"),
        ("caches_first_read", "read_reflects_new_words"),
        ("homegrown_lowercase", "folds_cyrillic_case"),
    ] {
        let report = evaluate(name, factory_named(name));
        assert!(
            report.failed_checks.iter().any(|check| check == expected_check),
            "{name} should fail {expected_check}, failed only {:?}",
            report.failed_checks
        );
    }
}

#[test]
fn checklist_names_are_unique() {
    init_logging();
    let checks = contract_checks();
    let mut names: Vec<&str> = checks.iter().map(|check| check.name).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();

    assert_eq!(names.len(), before);
}
