// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance ranking: how search results get ordered.
//!
//! There are no numeric scores. Each post gets a [`RelevanceKey`] of facts
//! about where and how often the query matched, and posts are compared tier
//! by tier. The first tier that tells two posts apart decides; a strong
//! signal in a late tier can never overturn an early one.

pub mod ranking;

pub use ranking::{compare_keys, RelevanceKey, Tier};
