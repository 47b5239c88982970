use std::collections::HashSet;

use labreport::registry::{record, records};

const AUTHORED_ORDER: [&str; 8] = [
    "reducing-sugars",
    "starch-test",
    "fat-test",
    "protein-test",
    "sprite-ingredients-full",
    "errors",
    "conclusion",
    "references",
];

#[test]
fn test_iteration_matches_authored_order() {
    let keys: Vec<&str> = records().iter().map(|r| r.key).collect();
    assert_eq!(keys, AUTHORED_ORDER);
}

#[test]
fn test_iteration_is_stable_across_calls() {
    let first: Vec<&str> = records().iter().map(|r| r.key).collect();
    let second: Vec<&str> = records().iter().map(|r| r.key).collect();
    assert_eq!(first, second);
}

#[test]
fn test_keys_are_unique() {
    let keys: HashSet<&str> = records().iter().map(|r| r.key).collect();
    assert_eq!(keys.len(), records().len());
}

#[test]
fn test_image_and_caption_come_together() {
    for rec in records() {
        assert_eq!(
            rec.image.is_some(),
            rec.image_alt.is_some(),
            "{}: image and imageAlt must be paired",
            rec.key
        );
    }
}

#[test]
fn test_lookup_by_key() {
    let found = record("starch-test").expect("starch-test exists");
    assert_eq!(found.title, "Starch (Iodine Test)");
    assert!(record("missing").is_none());
}

#[test]
fn test_descriptions_are_nonempty() {
    for rec in records() {
        assert!(!rec.description.trim().is_empty(), "{}", rec.key);
        assert!(!rec.title.is_empty(), "{}", rec.key);
    }
}
