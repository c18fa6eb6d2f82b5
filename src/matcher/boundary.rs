// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The word-boundary character set.
//!
//! A query only counts as a whole word when the characters on both sides of
//! it are string edges or members of this set. The set is shared by filtering,
//! ranking and highlighting; if two of them ever disagreed, a post could be
//! kept by the filter and then show no highlight at all.
//!
//! Letters, digits and everything not listed here (including `_`, `/`, `#`,
//! `<` and `>`) are word characters. That means `<p>minimalism</p>` does not
//! expose "minimalism" as a whole word: a word glued to a tag is hidden.

/// Punctuation that separates words, in addition to Unicode whitespace.
///
/// Includes Cyrillic-style guillemets, typographic quotes and the dash family.
pub const BOUNDARY_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '«', '»', '“', '”', '„',
    '‘', '’', '—', '–', '-',
];

/// Is `c` a word boundary?
///
/// Whitespace follows the Unicode `White_Space` property, plus the BOM
/// (U+FEFF), which browsers also treat as whitespace in text matching.
#[inline]
pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}' || BOUNDARY_PUNCTUATION.contains(&c)
}

/// Does the byte range `start..end` of `text` sit between boundaries?
///
/// `start` and `end` must lie on char boundaries of `text`.
#[inline]
pub fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.map_or(true, is_boundary) && after.map_or(true, is_boundary)
}
