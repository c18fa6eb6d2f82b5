// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Whatever posts and query the fuzzer builds, the ranked list must be exactly
//! the whole-word hits, sorted by the tiered comparator, and identical on a
//! second run.

#![no_main]

use std::cmp::Ordering;

use arbitrary::Arbitrary;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use quire::{compare_keys, rank, rank_with, Post, WordMatcher};

#[derive(Arbitrary, Debug)]
struct RawPost {
    title: String,
    body: String,
    days: u16,
}

#[derive(Arbitrary, Debug)]
struct Input {
    posts: Vec<RawPost>,
    query: String,
}

fuzz_target!(|input: Input| {
    if input.posts.len() > 64 || input.query.len() > 100 {
        return;
    }
    let Some(epoch) = NaiveDate::from_ymd_opt(2000, 1, 1) else {
        return;
    };
    let posts: Vec<Post> = input
        .posts
        .into_iter()
        .enumerate()
        .map(|(i, raw)| Post {
            id: i as u32,
            title: raw.title,
            body: raw.body,
            date: epoch + chrono::Duration::days(i64::from(raw.days)),
            image: None,
            has_title: true,
        })
        .collect();

    let first: Vec<u32> = rank(&posts, &input.query).iter().map(|p| p.id).collect();
    let second: Vec<u32> = rank(&posts, &input.query).iter().map(|p| p.id).collect();
    assert_eq!(first, second, "ranking is not deterministic");

    let Some(matcher) = WordMatcher::new(&input.query) else {
        assert_eq!(first.len(), posts.len());
        return;
    };
    let ranked = rank_with(&posts, &matcher);
    for pair in ranked.windows(2) {
        assert_ne!(compare_keys(&pair[0].key, &pair[1].key), Ordering::Greater);
    }
    for post in &posts {
        let hit = ranked.iter().any(|r| r.post.id == post.id);
        let expected = matcher.is_match(&post.title.to_lowercase())
            || matcher.is_match(&post.body.to_lowercase());
        assert_eq!(hit, expected, "post {} filtered wrongly", post.id);
    }
});
