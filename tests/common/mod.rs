//! Shared test utilities and fixtures.

#![allow(dead_code)]

use quire::Post;

// Re-export canonical test utilities from quire::testing
pub use quire::testing::{date, ids, make_post, titled_post};

/// The built-in sample blog.
pub fn demo() -> Vec<Post> {
    quire::demo_posts()
}

/// Nine posts for the query "design", one per rung of the ranking ladder.
///
/// Listed best first: each post beats the next one on exactly the tier named
/// in [`LADDER_TIERS`]. Tests usually feed them in reversed or shuffled.
pub fn tier_ladder() -> Vec<Post> {
    vec![
        make_post(1, "Design", "", "2020-01-01"),
        make_post(2, "Notes on design", "", "2020-01-01"),
        make_post(3, "Designer tools", "good design", "2020-01-01"),
        make_post(4, "Redesigned", "design matters", "2020-01-01"),
        make_post(5, "Alpha", "design first", "2020-01-01"),
        make_post(6, "Beta", "a design b design", "2020-01-01"),
        make_post(7, "Gamma", "a design designs", "2020-01-01"),
        make_post(8, "Delta", "a design", "2024-01-01"),
        make_post(9, "Epsilon", "a design", "2023-01-01"),
    ]
}

/// Tier deciding each adjacent pair of [`tier_ladder`], as tier numbers.
pub const LADDER_TIERS: [u8; 8] = [1, 2, 3, 4, 6, 7, 8, 9];

/// JSON for a small posts file, using the scraper's `content` key.
pub const POSTS_JSON: &str = r#"[
    {"id": 10, "title": "Say no more", "content": "<p>No, thanks.</p>", "date": "2024-05-01"},
    {"id": 11, "title": "Noise", "content": "<p>noise and no noise</p>", "date": "2024-06-01",
     "image": "img/noise.png"},
    {"id": 12, "title": "Untitled", "content": "<p>Nothing here</p>", "date": "2023-02-03T10:00:00Z",
     "hasTitle": false}
]"#;
