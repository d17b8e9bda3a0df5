// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::ident::{IdGenerator, KeySpace, BAR_CODE, NUTRITIONIST_CODE};
use std::collections::HashSet;

#[test]
fn test_bar_codes_have_13_digits() {
    let mut ids = IdGenerator::seeded(7);
    for _ in 0..1000 {
        let code = ids.next_unique(BAR_CODE, |_| false);
        assert!(BAR_CODE.contains(code));
        assert_eq!(code.to_string().len(), 13);
    }
}

#[test]
fn test_nutritionist_codes_have_6_digits() {
    let mut ids = IdGenerator::seeded(11);
    for _ in 0..1000 {
        let code = ids.next_unique(NUTRITIONIST_CODE, |_| false);
        assert_eq!(code.to_string().len(), 6);
    }
}

#[test]
fn test_rejects_taken_candidates() {
    // Only 2 is free
    let space = KeySpace::new(0, 3);
    let mut ids = IdGenerator::seeded(3);
    for _ in 0..20 {
        assert_eq!(ids.next_unique(space, |c| c != 2), 2);
    }
}

#[test]
fn test_unique_against_growing_set() {
    let space = KeySpace::new(0, 64);
    let mut ids = IdGenerator::seeded(5);
    let mut seen = HashSet::new();

    for _ in 0..64 {
        let next = ids.next_unique(space, |c| seen.contains(&c));
        assert!(seen.insert(next), "duplicate key {next}");
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn test_seeded_generators_agree() {
    let mut a = IdGenerator::seeded(42);
    let mut b = IdGenerator::seeded(42);
    let xs: Vec<i64> = (0..5).map(|_| a.next_unique(BAR_CODE, |_| false)).collect();
    let ys: Vec<i64> = (0..5).map(|_| b.next_unique(BAR_CODE, |_| false)).collect();
    assert_eq!(xs, ys);
}
