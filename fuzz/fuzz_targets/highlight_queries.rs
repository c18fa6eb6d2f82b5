// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matching and highlighting.
//!
//! Arbitrary text, arbitrary query. Highlighting may only ever insert markers,
//! and the whole-word count may never exceed the substring count. Regex
//! metacharacters, lone combining marks and half a guillemet all included.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quire::{count_substring_matches, count_whole_word_matches, highlight, is_whole_word_match};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    query: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    // Cap lengths to avoid timeouts
    if input.text.len() > 4096 || input.query.len() > 200 {
        return;
    }

    let whole = count_whole_word_matches(input.text, input.query);
    let partial = count_substring_matches(input.text, input.query);
    assert!(whole <= partial, "whole {} > substring {}", whole, partial);
    assert_eq!(is_whole_word_match(input.text, input.query), whole > 0);

    let marked = highlight(input.text, input.query);
    if !input.text.contains("<mark>") && !input.text.contains("</mark>") {
        let stripped = marked.replace("<mark>", "").replace("</mark>", "");
        assert_eq!(stripped, input.text);
        assert_eq!(marked.matches("<mark>").count(), whole);
    }
});
