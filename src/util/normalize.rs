// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization.

/// Normalize a raw search box value: trim surrounding whitespace and lowercase.
///
/// Diacritics are kept: "е" and "ё" are different letters to the matcher.
///
/// ```
/// use quire::normalize_query;
/// assert_eq!(normalize_query("  Saying NO "), "saying no");
/// assert_eq!(normalize_query("   "), "");
/// ```
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}
