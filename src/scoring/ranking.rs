// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tiered comparator.
//!
//! Tier hierarchy, earliest wins:
//!
//! | #  | Tier                 | Prefers                               |
//! |----|----------------------|---------------------------------------|
//! | 1  | `ExactTitle`         | title equal to the query              |
//! | 2  | `TitleWord`          | whole-word match in the title         |
//! | 3  | `TitlePrefix`        | title starting with the query         |
//! | 4  | `TitleContains`      | query anywhere in the title           |
//! | 5  | `BodyWord`           | whole-word match in the body          |
//! | 6  | `BodyPrefix`         | body starting with the query          |
//! | 7  | `BodyWordCount`      | more whole-word body matches          |
//! | 8  | `BodySubstringCount` | more raw body occurrences             |
//! | 9  | `Date`               | newer posts                           |
//!
//! Tiers 2 and 5 look redundant once the filter has run (every kept post
//! matched one of them), but together they are what separates title hits
//! from body-only hits, so both stay.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::matcher::WordMatcher;
use crate::types::Post;

/// Everything the comparator needs to know about one post.
///
/// Computed once per post per query, from the lowercased title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceKey {
    pub exact_title: bool,
    pub title_word: bool,
    pub title_prefix: bool,
    pub title_contains: bool,
    pub body_word: bool,
    pub body_prefix: bool,
    pub body_word_count: usize,
    pub body_substring_count: usize,
    pub date: NaiveDate,
}

impl RelevanceKey {
    pub fn for_post(post: &Post, matcher: &WordMatcher) -> Self {
        let query = matcher.query().as_str();
        let title = post.title.to_lowercase();
        let body = post.body.to_lowercase();
        let body_word_count = matcher.count(&body);

        RelevanceKey {
            exact_title: title == query,
            title_word: matcher.is_match(&title),
            title_prefix: title.starts_with(query),
            title_contains: title.contains(query),
            body_word: body_word_count > 0,
            body_prefix: body.starts_with(query),
            body_word_count,
            body_substring_count: matcher.count_substrings(&body),
            date: post.date,
        }
    }

    /// Does the post survive the filter? Whole-word hits only.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.title_word || self.body_word
    }
}

/// One criterion of the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Tier {
    ExactTitle = 1,
    TitleWord = 2,
    TitlePrefix = 3,
    TitleContains = 4,
    BodyWord = 5,
    BodyPrefix = 6,
    BodyWordCount = 7,
    BodySubstringCount = 8,
    Date = 9,
}

impl Tier {
    /// All tiers in priority order.
    pub const ALL: [Tier; 9] = [
        Tier::ExactTitle,
        Tier::TitleWord,
        Tier::TitlePrefix,
        Tier::TitleContains,
        Tier::BodyWord,
        Tier::BodyPrefix,
        Tier::BodyWordCount,
        Tier::BodySubstringCount,
        Tier::Date,
    ];

    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::ExactTitle => "exact title",
            Tier::TitleWord => "word in title",
            Tier::TitlePrefix => "title prefix",
            Tier::TitleContains => "in title",
            Tier::BodyWord => "word in body",
            Tier::BodyPrefix => "body prefix",
            Tier::BodyWordCount => "body word count",
            Tier::BodySubstringCount => "body substring count",
            Tier::Date => "newer",
        }
    }

    /// Compare two keys on this tier alone. `Less` means `a` ranks first.
    pub fn compare(self, a: &RelevanceKey, b: &RelevanceKey) -> Ordering {
        // `true` and larger values sort first, hence b-before-a everywhere.
        match self {
            Tier::ExactTitle => b.exact_title.cmp(&a.exact_title),
            Tier::TitleWord => b.title_word.cmp(&a.title_word),
            Tier::TitlePrefix => b.title_prefix.cmp(&a.title_prefix),
            Tier::TitleContains => b.title_contains.cmp(&a.title_contains),
            Tier::BodyWord => b.body_word.cmp(&a.body_word),
            Tier::BodyPrefix => b.body_prefix.cmp(&a.body_prefix),
            Tier::BodyWordCount => b.body_word_count.cmp(&a.body_word_count),
            Tier::BodySubstringCount => b.body_substring_count.cmp(&a.body_substring_count),
            Tier::Date => b.date.cmp(&a.date),
        }
    }

    /// The first tier that tells `a` and `b` apart, if any.
    pub fn decisive(a: &RelevanceKey, b: &RelevanceKey) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.compare(a, b) != Ordering::Equal)
    }
}

/// Compare two keys for ranking. `Less` means `a` is shown first.
///
/// Fully equal keys compare `Equal`; callers sort stably so such posts keep
/// their input order.
pub fn compare_keys(a: &RelevanceKey, b: &RelevanceKey) -> Ordering {
    Tier::decisive(a, b).map_or(Ordering::Equal, |tier| tier.compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_post;

    fn key(title: &str, body: &str, date: &str, query: &str) -> RelevanceKey {
        let matcher = WordMatcher::new(query).unwrap();
        RelevanceKey::for_post(&make_post(0, title, body, date), &matcher)
    }

    #[test]
    fn test_key_for_exact_title() {
        let k = key("Foo", "", "2024-01-01", "foo");
        assert!(k.exact_title && k.title_word && k.title_prefix && k.title_contains);
        assert!(!k.body_word);
        assert!(k.is_hit());
    }

    #[test]
    fn test_key_for_prefix_only_title() {
        let k = key("Foobar", "", "2024-01-02", "foo");
        assert!(!k.exact_title);
        assert!(!k.title_word);
        assert!(k.title_prefix && k.title_contains);
        assert!(!k.is_hit());
    }

    #[test]
    fn test_key_counts_body_occurrences() {
        let k = key("Notes", "no means no, not now", "2024-01-01", "no");
        assert_eq!(k.body_word_count, 2);
        assert_eq!(k.body_substring_count, 4);
        assert!(k.body_prefix);
    }

    #[test]
    fn test_exact_title_beats_newer_date() {
        let exact = key("Foo", "", "2024-01-01", "foo");
        let newer = key("Foo bar", "", "2024-06-01", "foo");
        assert_eq!(compare_keys(&exact, &newer), Ordering::Less);
        assert_eq!(Tier::decisive(&exact, &newer), Some(Tier::ExactTitle));
    }

    #[test]
    fn test_title_hit_beats_body_hit() {
        let title = key("Habits", "", "2020-01-01", "habits");
        let body = key("Routines", "habits habits habits", "2024-01-01", "habits");
        assert_eq!(compare_keys(&title, &body), Ordering::Less);
        assert_eq!(Tier::decisive(&title, &body), Some(Tier::ExactTitle));
    }

    #[test]
    fn test_word_count_breaks_body_ties() {
        let more = key("A", "x design y design", "2020-01-01", "design");
        let fewer = key("B", "x design y", "2024-01-01", "design");
        assert_eq!(Tier::decisive(&more, &fewer), Some(Tier::BodyWordCount));
        assert_eq!(compare_keys(&more, &fewer), Ordering::Less);
    }

    #[test]
    fn test_date_is_last_resort() {
        let old = key("A", "same text", "2024-01-01", "text");
        let new = key("B", "same text", "2024-02-01", "text");
        assert_eq!(Tier::decisive(&old, &new), Some(Tier::Date));
        assert_eq!(compare_keys(&new, &old), Ordering::Less);
    }

    #[test]
    fn test_identical_keys_are_equal() {
        let a = key("A", "same text", "2024-01-01", "text");
        let b = key("B", "same text", "2024-01-01", "text");
        assert_eq!(Tier::decisive(&a, &b), None);
        assert_eq!(compare_keys(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_tier_numbers_follow_priority() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(tier.number() as usize, i + 1);
        }
    }
}
