// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks every other module passes around.
//!
//! A `Post` is read-only as far as the search core is concerned: filtering,
//! ranking and highlighting only ever borrow posts and hand back new orderings
//! or derived strings. A `Query` is the normalized search term; holding one
//! means the term is non-empty, so the empty-query identity case is handled
//! once, at construction, instead of at every call site.
//!
//! # JSON shape
//!
//! ```text
//! { "id": 1, "title": "…", "content": "<p>…</p>", "date": "2024-01-15",
//!   "image": "cover.jpg", "hasTitle": true }
//! ```
//!
//! `body` is accepted as a synonym for `content`; dates may also be full
//! RFC 3339 timestamps, in which case only the calendar date is kept.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::util::normalize::normalize_query;

/// Stable identifier of a post within a session.
pub type PostId = u32;

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Marked-up body text. Matching treats the markup as ordinary text.
    ///
    /// Read from `body` or `content`. A record with both is a duplicate field
    /// and fails to parse.
    #[serde(alias = "content")]
    pub body: String,
    #[serde(with = "post_date")]
    pub date: NaiveDate,
    /// Optional lead image shown above the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `false` when the title was synthesized rather than written by the author.
    #[serde(default = "default_has_title")]
    pub has_title: bool,
}

fn default_has_title() -> bool {
    true
}

impl Post {
    /// Calendar year the post belongs to in the archive.
    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// A normalized, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Normalize raw input. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_query(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Query(normalized))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// All posts of one calendar year, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub posts: Vec<&'a Post>,
}

/// Serde adapter for post dates.
///
/// Writes `YYYY-MM-DD`; reads that or an RFC 3339 timestamp.
pub(crate) mod post_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid post date '{}'", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
