// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-word matching: finding "no" in "say no" but not in "noise".
//!
//! A [`WordMatcher`] is compiled once per query from two ingredients: the
//! query as an escaped literal (so `c++` or `(draft)` are searched verbatim)
//! and the fixed boundary set from [`boundary`]. Candidate occurrences come
//! from a case-insensitive literal regex; each candidate is accepted only if
//! the characters around it are boundaries.
//!
//! Boundary characters are inspected, never consumed. In "no no" both words
//! are occurrences even though they share the separating space. After a
//! rejected candidate the scan resumes one character later, so a rejection
//! can never hide an overlapping occurrence that would have been accepted.
//!
//! # Counting invariant
//!
//! Whole-word occurrences are non-overlapping occurrences of the literal, and
//! the substring count is the greedy (maximal) non-overlapping count, so
//! `count(t) <= count_substrings(t)` for every text.

pub mod boundary;

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::types::Query;

pub use boundary::{is_boundary, BOUNDARY_PUNCTUATION};

/// Default highlight markers, as understood by browsers.
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// A query compiled for whole-word matching.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    query: Query,
    /// `None` when the literal is too large to compile; matches nothing.
    literal: Option<Regex>,
}

impl WordMatcher {
    /// Compile a matcher from raw user input.
    ///
    /// Returns `None` for empty or whitespace-only input, which callers treat
    /// as "no search in progress".
    pub fn new(raw: &str) -> Option<Self> {
        Query::parse(raw).map(Self::from_query)
    }

    /// Compile a matcher from an already-normalized query.
    ///
    /// A literal over the regex size limit still yields a matcher, one that
    /// never matches. The search stays active and finds nothing.
    pub fn from_query(query: Query) -> Self {
        let compiled = RegexBuilder::new(&regex::escape(query.as_str()))
            .case_insensitive(true)
            .build();
        let literal = match compiled {
            Ok(literal) => Some(literal),
            Err(err) => {
                tracing::warn!(len = query.as_str().len(), error = %err, "query could not be compiled");
                None
            }
        };
        WordMatcher { query, literal }
    }

    /// False only for queries that could not be compiled.
    pub fn can_match(&self) -> bool {
        self.literal.is_some()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Byte ranges of every whole-word occurrence, left to right.
    pub fn occurrences<'m, 't>(&'m self, text: &'t str) -> Occurrences<'m, 't> {
        Occurrences {
            literal: self.literal.as_ref(),
            text,
            pos: 0,
        }
    }

    /// Is there at least one whole-word occurrence?
    pub fn is_match(&self, text: &str) -> bool {
        self.occurrences(text).next().is_some()
    }

    /// Number of non-overlapping whole-word occurrences.
    pub fn count(&self, text: &str) -> usize {
        self.occurrences(text).count()
    }

    /// Number of non-overlapping occurrences, word boundaries ignored.
    pub fn count_substrings(&self, text: &str) -> usize {
        self.literal
            .as_ref()
            .map_or(0, |literal| literal.find_iter(text).count())
    }

    /// Wrap every whole-word occurrence in `<mark>` tags.
    pub fn highlight(&self, text: &str) -> String {
        self.highlight_with(text, MARK_OPEN, MARK_CLOSE)
    }

    /// Wrap every whole-word occurrence in custom markers.
    ///
    /// The matched text keeps its original casing and the surrounding
    /// boundary characters are copied through untouched.
    pub fn highlight_with(&self, text: &str, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for range in self.occurrences(text) {
            out.push_str(&text[last..range.start]);
            out.push_str(open);
            out.push_str(&text[range.clone()]);
            out.push_str(close);
            last = range.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Iterator over whole-word occurrences. See [`WordMatcher::occurrences`].
pub struct Occurrences<'m, 't> {
    literal: Option<&'m Regex>,
    text: &'t str,
    pos: usize,
}

impl Iterator for Occurrences<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let literal = self.literal?;
        while self.pos < self.text.len() {
            let found = literal.find_at(self.text, self.pos)?;
            if boundary::is_bounded(self.text, found.start(), found.end()) {
                self.pos = found.end();
                return Some(found.range());
            }
            // Step over one char, not the whole candidate.
            let step = self.text[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos = found.start() + step;
        }
        None
    }
}

/// Does `query` occur in `text` as a whole word?
///
/// ```
/// use quire::is_whole_word_match;
/// assert!(is_whole_word_match("the cat sat", "cat"));
/// assert!(!is_whole_word_match("concatenate", "cat"));
/// ```
pub fn is_whole_word_match(text: &str, query: &str) -> bool {
    WordMatcher::new(query).is_some_and(|matcher| matcher.is_match(text))
}

/// Number of non-overlapping whole-word occurrences of `query` in `text`.
pub fn count_whole_word_matches(text: &str, query: &str) -> usize {
    WordMatcher::new(query).map_or(0, |matcher| matcher.count(text))
}

/// Number of non-overlapping occurrences of `query` in `text`, ignoring
/// word boundaries.
pub fn count_substring_matches(text: &str, query: &str) -> usize {
    WordMatcher::new(query).map_or(0, |matcher| matcher.count_substrings(text))
}

/// Wrap whole-word occurrences of `query` in `<mark>` tags.
///
/// An empty query, or one that never matches, returns `text` unchanged.
///
/// ```
/// use quire::highlight;
/// assert_eq!(highlight("say no to noise", "no"), "say <mark>no</mark> to noise");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    match WordMatcher::new(query) {
        Some(matcher) => matcher.highlight(text),
        None => text.to_string(),
    }
}
