//! Which posts make it into the result list at all.

use super::common::{demo, ids, make_post, titled_post};
use quire::{filter, rank, WordMatcher};

#[test]
fn test_unknown_query_is_empty_not_error() {
    assert!(rank(&demo(), "xyz123notfound").is_empty());
    assert!(rank(&[], "anything").is_empty());
}

#[test]
fn test_partial_word_is_not_a_hit() {
    let posts = vec![
        make_post(1, "Concatenate", "concatenation", "2024-01-01"),
        make_post(2, "Pets", "the cat sat", "2024-01-01"),
    ];
    assert_eq!(ids(&rank(&posts, "cat")), vec![2]);
}

#[test]
fn test_blank_query_returns_everything_newest_first() {
    let posts = vec![
        titled_post(1, "Old", "2021-01-01"),
        titled_post(2, "New", "2024-01-01"),
    ];
    for query in ["", "   ", "\t\n"] {
        assert_eq!(ids(&rank(&posts, query)), vec![2, 1]);
    }
}

#[test]
fn test_query_metacharacters_are_literal() {
    let posts = vec![
        make_post(1, "Languages", "I like c++ a lot", "2024-01-01"),
        make_post(2, "Wildcards", "a.b and a*b", "2024-01-01"),
        make_post(3, "Other", "c or cpp", "2024-01-01"),
    ];
    assert_eq!(ids(&rank(&posts, "c++")), vec![1]);
    assert_eq!(ids(&rank(&posts, "a*b")), vec![2]);
    assert!(rank(&posts, ".*").is_empty());
}

#[test]
fn test_typographic_quotes_and_dashes_are_boundaries() {
    let posts = vec![
        make_post(1, "Quotes", "«привет» and “hello”", "2024-01-01"),
        make_post(2, "Dashes", "yes—no–maybe", "2024-01-01"),
    ];
    assert_eq!(ids(&rank(&posts, "привет")), vec![1]);
    assert_eq!(ids(&rank(&posts, "hello")), vec![1]);
    assert_eq!(ids(&rank(&posts, "no")), vec![2]);
}

#[test]
fn test_markup_glued_words_are_hidden() {
    // Matching runs on raw markup: ">" is not a boundary.
    let posts = vec![make_post(1, "Intro", "<p>Minimalism</p>", "2024-01-01")];
    assert!(rank(&posts, "minimalism").is_empty());
}

#[test]
fn test_filter_keeps_input_order() {
    let posts = demo();
    let matcher = WordMatcher::new("our").unwrap();
    let kept = filter(&posts, &matcher);
    let kept_ids = ids(&kept);
    let mut sorted = kept_ids.clone();
    sorted.sort_unstable();
    assert_eq!(kept_ids, sorted);
    assert!(!kept.is_empty());
}
