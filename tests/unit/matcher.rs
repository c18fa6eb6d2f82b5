//! Whole-word matching and highlighting through the public API.

use quire::matcher::boundary::BOUNDARY_PUNCTUATION;
use quire::{
    count_substring_matches, count_whole_word_matches, highlight, is_boundary,
    is_whole_word_match, WordMatcher,
};

#[test]
fn test_reference_examples() {
    assert!(is_whole_word_match("the cat sat", "cat"));
    assert!(!is_whole_word_match("concatenate", "cat"));
    assert_eq!(highlight("say no to noise", "no"), "say <mark>no</mark> to noise");
}

#[test]
fn test_empty_query_is_identity() {
    for text in ["", "plain", "<p>markup</p>", "no no no"] {
        assert_eq!(highlight(text, ""), text);
        assert_eq!(highlight(text, "  "), text);
    }
}

#[test]
fn test_every_boundary_char_separates_words() {
    for &c in BOUNDARY_PUNCTUATION {
        let text = format!("x{}word{}x", c, c);
        assert!(is_boundary(c));
        assert!(is_whole_word_match(&text, "word"), "boundary {:?}", c);
    }
    for ws in [' ', '\t', '\n', '\u{a0}', '\u{feff}'] {
        let text = format!("x{}word{}x", ws, ws);
        assert!(is_whole_word_match(&text, "word"), "whitespace {:?}", ws);
    }
}

#[test]
fn test_word_chars_are_not_boundaries() {
    for c in ['a', 'Я', '1', '_', '>', '<', '/', '=', '&', '*'] {
        assert!(!is_boundary(c), "{:?}", c);
        let text = format!("{}word", c);
        assert!(!is_whole_word_match(&text, "word"), "{:?}", c);
    }
}

#[test]
fn test_multiword_query() {
    assert!(is_whole_word_match("I said: saying no, again.", "saying no"));
    assert!(!is_whole_word_match("saying nothing", "saying no"));
}

#[test]
fn test_query_with_boundary_chars_inside() {
    // The query's own punctuation is literal text, not a boundary test.
    assert!(is_whole_word_match("well, hello, world", "hello,"));
    assert_eq!(count_whole_word_matches("(draft) (draft)", "(draft)"), 2);
}

#[test]
fn test_counts_on_demo_style_body() {
    let body = "every yes to something is a no to something else. learning to say no is essential";
    assert_eq!(count_whole_word_matches(body, "no"), 2);
    assert_eq!(count_substring_matches(body, "no"), 2);
    assert_eq!(count_whole_word_matches(body, "thing"), 0);
    assert_eq!(count_substring_matches(body, "thing"), 2);
}

#[test]
fn test_matcher_reuse_across_texts() {
    let matcher = WordMatcher::new("No").unwrap();
    assert_eq!(matcher.query().as_str(), "no");
    assert!(matcher.is_match("NO!"));
    assert!(!matcher.is_match("nope"));
    assert_eq!(matcher.highlight("«No»"), "«<mark>No</mark>»");
}
