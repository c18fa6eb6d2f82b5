// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use chrono::NaiveDate;

use crate::types::{Post, PostId};

/// Parse a `YYYY-MM-DD` literal. Panics on malformed input; tests only.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap_or_else(|_| panic!("bad test date literal: {}", s))
}

/// Create a post with the given title, body and date.
///
/// This is the canonical implementation used across all tests.
pub fn make_post(id: PostId, title: &str, body: &str, date_str: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
        date: date(date_str),
        image: None,
        has_title: true,
    }
}

/// Create a post with an empty body.
pub fn titled_post(id: PostId, title: &str, date_str: &str) -> Post {
    make_post(id, title, "", date_str)
}

/// Ids of a ranked or filtered list, for compact assertions.
pub fn ids(posts: &[&Post]) -> Vec<PostId> {
    posts.iter().map(|post| post.id).collect()
}
