// tests/unit_locator.rs
use std::collections::HashMap;
use std::collections::HashSet;

use recloc_core::error::ReclocError;
use recloc_core::locator::{self, ALPHABET, DEFAULT_LENGTH};

/// Frozen derivation fixtures. These pin the SHA-256 → ChaCha20 →
/// multiply-shift pipeline: if any of these change, previously issued
/// locators have changed and the format is broken.
const FROZEN: &[(&str, &str)] = &[
    ("https://metsonet.co.uk/music/5pianos.mp3", "AW6D"),
    ("https://metsonet.co.uk/music/absolutely.mp3", "HS7Z"),
    ("https://metsonet.co.uk/music/better.mp3", "OXPS"),
    ("a", "FEFL"),
    ("b", "MTVW"),
    ("c", "TQSI"),
    ("", "DJT5"),
];

#[test]
fn test_frozen_fixtures() {
    for (identifier, expected) in FROZEN {
        assert_eq!(
            locator::generate(identifier, DEFAULT_LENGTH).unwrap(),
            *expected,
            "frozen locator drifted for {identifier:?}"
        );
    }
}

#[test]
fn test_determinism_across_calls() {
    for n in 1..=12 {
        let first = locator::generate("some/stable/identifier.mp3", n).unwrap();
        for _ in 0..5 {
            assert_eq!(
                locator::generate("some/stable/identifier.mp3", n).unwrap(),
                first
            );
        }
    }
}

#[test]
fn test_length_correctness() {
    for n in 1..=32 {
        assert_eq!(locator::generate("x", n).unwrap().len(), n);
        assert_eq!(locator::generate("", n).unwrap().len(), n);
    }
}

#[test]
fn test_alphabet_closure() {
    let allowed: HashSet<u8> = ALPHABET.iter().copied().collect();
    for identifier in ["a", "", "some/path", "https://example.com/x?y=1", "日本語"] {
        let loc = locator::generate(identifier, 16).unwrap();
        for b in loc.bytes() {
            assert!(allowed.contains(&b), "{loc} contains non-alphabet byte");
        }
    }
}

#[test]
fn test_alphabet_is_upper_then_digits() {
    assert_eq!(ALPHABET, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
}

#[test]
fn test_sensitivity() {
    // Probabilistic, not absolute: 200 distinct inputs at length 4 should
    // essentially never collide (birthday bound ~1.2% across the whole set).
    let locators: HashSet<String> = (0..200)
        .map(|i| locator::generate(&format!("sensitivity/{i}"), DEFAULT_LENGTH).unwrap())
        .collect();
    assert_eq!(locators.len(), 200);
}

#[test]
fn test_prefix_property_of_lengths() {
    // Draws are sequential, so a longer locator extends a shorter one for
    // the same identifier. Not a documented guarantee, but it falls out of
    // the frozen sampling order and would catch an accidental reseed.
    let short = locator::generate("prefix/check", 4).unwrap();
    let long = locator::generate("prefix/check", 8).unwrap();
    assert!(long.starts_with(&short));
}

#[test]
fn test_zero_length_fails_fast() {
    assert!(matches!(
        locator::generate("valid", 0),
        Err(ReclocError::InvalidLength { length: 0 })
    ));
}

#[test]
fn test_scenario_abc() {
    let mut mapping = HashMap::new();
    for id in ["a", "b", "c"] {
        mapping.insert(id, locator::generate(id, 4).unwrap());
    }
    assert_eq!(mapping.len(), 3);
    let values: HashSet<&String> = mapping.values().collect();
    assert_eq!(values.len(), 3);
    for loc in mapping.values() {
        assert_eq!(loc.len(), 4);
        assert!(loc.bytes().all(|b| ALPHABET.contains(&b)));
    }
}

#[test]
fn test_find_round_trip_and_miss() {
    let reverse_index: HashMap<String, String> = FROZEN
        .iter()
        .map(|(id, loc)| (loc.to_string(), id.to_string()))
        .collect();

    assert_eq!(
        locator::find("AW6D", &reverse_index).unwrap(),
        "https://metsonet.co.uk/music/5pianos.mp3"
    );
    assert!(matches!(
        locator::find("0000", &reverse_index),
        Err(ReclocError::LocatorNotFound { .. })
    ));
}
