//! Tests for selection list formatting

use btcheck::selection::collapse_ranges;
use proptest::prelude::*;

/// Expand "1-3,7-8,10" back into indices
fn parse_ranges(formatted: &str) -> Vec<usize> {
    if formatted.is_empty() {
        return Vec::new();
    }

    formatted
        .split(',')
        .flat_map(|part| match part.split_once('-') {
            Some((start, end)) => {
                let start: usize = start.parse().unwrap();
                let end: usize = end.parse().unwrap();
                (start..=end).collect::<Vec<_>>()
            }
            None => vec![part.parse().unwrap()],
        })
        .collect()
}

#[test]
fn collapses_the_reference_selection() {
    assert_eq!(collapse_ranges(&[1, 2, 3, 7, 8, 10]), "1-3,7-8,10");
}

#[test]
fn empty_selection_is_an_empty_string() {
    assert_eq!(collapse_ranges(&[]), "");
}

#[test]
fn adjacent_ranges_do_not_merge_across_gaps() {
    assert_eq!(collapse_ranges(&[1, 2, 4, 5]), "1-2,4-5");
}

proptest! {
    #[test]
    fn formatting_round_trips(set in prop::collection::btree_set(1usize..500, 0..40)) {
        let ordinals: Vec<usize> = set.iter().copied().collect();
        let formatted = collapse_ranges(&ordinals);
        prop_assert_eq!(parse_ranges(&formatted), ordinals);
    }

    #[test]
    fn output_never_has_empty_segments(set in prop::collection::btree_set(1usize..100, 1..20)) {
        let ordinals: Vec<usize> = set.iter().copied().collect();
        let formatted = collapse_ranges(&ordinals);
        prop_assert!(formatted.split(',').all(|part| !part.is_empty()));
    }
}
