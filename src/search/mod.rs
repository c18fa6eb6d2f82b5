// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: filter the post set, then order what is left.
//!
//! Two passes over the borrowed posts. The filter keeps only posts with a
//! whole-word hit in the title or the body; a substring-only hit ("cat" in
//! "concatenate") is never surfaced, even though substring counts still break
//! ties between posts that did pass. The survivors are sorted stably with
//! [`compare_keys`], so posts that tie on every tier keep their input order.
//!
//! With no query there is nothing to rank: every post comes back in archive
//! order (newest first).

use tracing::debug;

use crate::archive::chronological;
use crate::contracts::check_ranked_order;
use crate::matcher::WordMatcher;
use crate::scoring::{compare_keys, RelevanceKey, Tier};
use crate::types::Post;

/// A post that survived the filter, with the facts it was ranked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPost<'a> {
    pub post: &'a Post,
    pub key: RelevanceKey,
}

impl RankedPost<'_> {
    /// The tier that placed this post above `next`, if any did.
    pub fn decided_against(&self, next: &RankedPost<'_>) -> Option<Tier> {
        Tier::decisive(&self.key, &next.key)
    }
}

/// Rank `posts` for a raw query.
///
/// Empty or whitespace-only queries skip filtering and return every post,
/// newest first. A query nothing matches, including one too large to
/// compile, returns an empty list.
pub fn rank<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    match WordMatcher::new(query) {
        Some(matcher) => rank_with(posts, &matcher)
            .into_iter()
            .map(|ranked| ranked.post)
            .collect(),
        None => chronological(posts),
    }
}

/// Filter and rank with an already compiled matcher, keeping the keys.
pub fn rank_with<'a>(posts: &'a [Post], matcher: &WordMatcher) -> Vec<RankedPost<'a>> {
    let mut ranked: Vec<RankedPost<'a>> = posts
        .iter()
        .filter_map(|post| {
            let key = RelevanceKey::for_post(post, matcher);
            key.is_hit().then_some(RankedPost { post, key })
        })
        .collect();

    // Vec::sort_by is stable: full ties keep input order.
    ranked.sort_by(|a, b| compare_keys(&a.key, &b.key));
    check_ranked_order(ranked.iter().map(|r| &r.key));

    debug!(
        query = %matcher.query(),
        kept = ranked.len(),
        total = posts.len(),
        "ranked posts"
    );
    ranked
}

/// Posts with a whole-word hit, in input order.
pub fn filter<'a>(posts: &'a [Post], matcher: &WordMatcher) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| RelevanceKey::for_post(post, matcher).is_hit())
        .collect()
}
