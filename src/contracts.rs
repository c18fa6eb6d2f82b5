// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking core.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! They compile to nothing in release builds.
//!
//! | Contract               | Property                                         |
//! |------------------------|--------------------------------------------------|
//! | `check_ranked_order`   | adjacent results never compare `Greater`         |
//! | `check_count_bounds`   | whole-word count ≤ substring count               |
//! | `check_filtered`       | every ranked post has a whole-word hit           |

use crate::scoring::{compare_keys, RelevanceKey, Tier};
use std::cmp::Ordering;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Tier numbering is the priority order and the date tier closes the list.
const _: () = {
    assert!(Tier::ALL.len() == 9);
    assert!(Tier::ExactTitle as u8 == 1);
    assert!(Tier::Date as u8 == 9);
};

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranked sequence is sorted by the tiered comparator and that
/// every key in it is well-formed.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked_order<'k, I>(keys: I)
where
    I: IntoIterator<Item = &'k RelevanceKey>,
{
    if !cfg!(debug_assertions) {
        return;
    }
    let mut previous: Option<&RelevanceKey> = None;
    for (i, key) in keys.into_iter().enumerate() {
        check_count_bounds(key);
        check_filtered(key);
        if let Some(prev) = previous {
            debug_assert!(
                compare_keys(prev, key) != Ordering::Greater,
                "Contract violation: ranked[{}] outranks ranked[{}] (decided by {:?})",
                i,
                i - 1,
                Tier::decisive(prev, key)
            );
        }
        previous = Some(key);
    }
}

/// Whole-word occurrences are a subset of substring occurrences.
#[inline]
pub fn check_count_bounds(key: &RelevanceKey) {
    debug_assert!(
        key.body_word_count <= key.body_substring_count,
        "Contract violation: {} whole-word matches > {} substring matches",
        key.body_word_count,
        key.body_substring_count
    );
    debug_assert!(
        key.body_word == (key.body_word_count > 0),
        "Contract violation: body_word flag disagrees with body_word_count"
    );
}

/// Only whole-word hits may be ranked.
#[inline]
pub fn check_filtered(key: &RelevanceKey) {
    debug_assert!(
        key.is_hit(),
        "Contract violation: ranked post has no whole-word match in title or body"
    );
}
