//! Flattening post markup for terminals.

use super::common::demo;
use quire::flatten_markup;

#[test]
fn test_demo_bodies_have_no_tags_left() {
    for post in demo() {
        let text = flatten_markup(&post.body);
        assert!(!text.contains('<'), "post {}: {}", post.id, text);
        assert!(!text.starts_with('\n') && !text.ends_with('\n'));
    }
}

#[test]
fn test_blockquote_is_its_own_paragraph() {
    let text = flatten_markup("<p>Before.</p><blockquote>Quoted.</blockquote><p>After.</p>");
    assert_eq!(text, "Before.\n\nQuoted.\n\nAfter.");
}

#[test]
fn test_numeric_entities() {
    assert_eq!(flatten_markup("&#1055;&#x440;&#1080;"), "При");
    assert_eq!(flatten_markup("&#xZZ; stays"), "&#xZZ; stays");
}
