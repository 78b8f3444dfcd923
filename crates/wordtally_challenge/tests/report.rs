use std::sync::Once;

use pretty_assertions::assert_eq;
use serde_json::Value;
use wordtally_challenge::{reports_to_json, ImplementationReport};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

#[test]
fn reports_serialize_with_names_and_failed_checks() {
    init_logging();
    let reports = vec![
        ImplementationReport {
            name: "skips_truncation".to_string(),
            failed_checks: vec!["cuts_words_longer_than_ten".to_string()],
        },
        ImplementationReport {
            name: "reference".to_string(),
            failed_checks: Vec::new(),
        },
    ];

    let json = reports_to_json(&reports).expect("reports always serialize");
    let parsed: Value = serde_json::from_str(&json).expect("summary is valid JSON");

    assert_eq!(parsed[0]["name"], "skips_truncation");
    assert_eq!(parsed[0]["failed_checks"][0], "cuts_words_longer_than_ten");
    assert_eq!(parsed[1]["name"], "reference");
    assert_eq!(parsed[1]["failed_checks"].as_array().map(Vec::len), Some(0));
}

#[test]
fn caught_means_at_least_one_failed_check() {
    init_logging();
    let caught = ImplementationReport {
        name: "late_truncation".to_string(),
        failed_checks: vec!["cuts_words_longer_than_ten".to_string()],
    };
    let missed = ImplementationReport {
        name: "reference".to_string(),
        failed_checks: Vec::new(),
    };

    assert!(caught.is_caught());
    assert!(!missed.is_caught());
}
