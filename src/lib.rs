// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-word search, tiered ranking and highlighting for a static blog.
//!
//! The whole post set lives in memory. A query is normalized once, compiled
//! into a [`WordMatcher`], and then every view is a pure function of the
//! posts and that matcher: the filtered and ranked list, the highlighted
//! body, the year-by-year archive when nobody is searching.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog.rs │────▶│  reader.rs   │────▶│ cli / wasm   │
//! │ (posts.json,│     │ (query state,│     │ (front ends) │
//! │  demo set)  │     │  views)      │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!          ┌─────────────────┼──────────────────┐
//!          ▼                 ▼                  ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  matcher/    │◀──│  search/     │   │  archive.rs  │
//! │ (whole-word, │   │ (filter,     │   │  slug.rs     │
//! │  highlight)  │   │  stable sort)│   │              │
//! └──────────────┘   └──────────────┘   └──────────────┘
//!                            │
//!                            ▼
//!                    ┌──────────────┐
//!                    │  scoring/    │
//!                    │ (9 tiers)    │
//!                    └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use quire::{demo_posts, highlight, rank};
//!
//! let posts = demo_posts();
//! let hits = rank(&posts, "habits");
//! assert_eq!(hits[0].title, "Building Better Habits");
//! assert_eq!(highlight("Good habits stick", "habits"), "Good <mark>habits</mark> stick");
//! ```

pub mod archive;
pub mod catalog;
pub mod contracts;
pub mod matcher;
pub mod reader;
pub mod scoring;
pub mod search;
pub mod slug;
pub mod testing;
pub mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use archive::{chronological, group_by_year};
pub use catalog::{
    check_unique_ids, demo_posts, load_posts, parse_posts, Catalog, CatalogError, CatalogSource,
};
pub use matcher::{
    count_substring_matches, count_whole_word_matches, highlight, is_boundary,
    is_whole_word_match, WordMatcher,
};
pub use reader::{OpenedPost, Reader, Sidebar};
pub use scoring::{compare_keys, RelevanceKey, Tier};
pub use search::{filter, rank, rank_with, RankedPost};
pub use slug::{find_by_slug, slugify};
pub use types::{Post, PostId, Query, YearGroup};
pub use util::markup::flatten_markup;
pub use util::normalize::normalize_query;
