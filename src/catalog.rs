// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the post set.
//!
//! Posts come from a JSON array (usually a scraped `posts.json`). The search
//! core never sees a failed load: [`Catalog::load_or_demo`] swaps in a fixed
//! demo set and records that it did, so front ends can say so.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Post, PostId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid post JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("post id {0} appears more than once")]
    DuplicateId(PostId),
}

/// Parse a JSON array of posts and check that ids are unique.
pub fn parse_posts(json: &str) -> Result<Vec<Post>, CatalogError> {
    let posts: Vec<Post> = serde_json::from_str(json)?;
    check_unique_ids(&posts)?;
    Ok(posts)
}

/// Reject post sets where two posts share an id.
pub fn check_unique_ids(posts: &[Post]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.id) {
            return Err(CatalogError::DuplicateId(post.id));
        }
    }
    Ok(())
}

/// Read and parse a posts file.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts = parse_posts(&raw)?;
    debug!(path = %path.display(), count = posts.len(), "loaded posts");
    Ok(posts)
}

/// Where the current post set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Demo,
}

/// A loaded post set plus its provenance.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub posts: Vec<Post>,
    pub source: CatalogSource,
}

impl Catalog {
    /// Load `path`, falling back to [`demo_posts`] on any error.
    pub fn load_or_demo(path: &Path) -> Self {
        match load_posts(path) {
            Ok(posts) => Catalog {
                posts,
                source: CatalogSource::File(path.to_path_buf()),
            },
            Err(err) => {
                warn!(error = %err, "falling back to demo posts");
                Catalog::demo()
            }
        }
    }

    pub fn demo() -> Self {
        Catalog {
            posts: demo_posts(),
            source: CatalogSource::Demo,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.source == CatalogSource::Demo
    }
}

fn demo_post(id: PostId, title: &str, (y, m, d): (i32, u32, u32), body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        image: None,
        has_title: true,
    }
}

/// The built-in sample posts used when no catalog can be loaded.
pub fn demo_posts() -> Vec<Post> {
    vec![
        demo_post(
            1,
            "Getting Started with Minimalism",
            (2024, 1, 15),
            "<p>Minimalism is not about having less. It's about making room for what matters most.</p>\
             <p>In today's world, we're constantly bombarded with information, possessions, and obligations. \
             The minimalist approach helps us cut through the noise and focus on what truly adds value to our lives.</p>\
             <h3>Key Principles</h3><ul><li>Quality over quantity</li><li>Intentional living</li><li>Focus on experiences</li></ul>",
        ),
        demo_post(
            2,
            "The Power of Simplicity in Design",
            (2024, 2, 20),
            "<p>Simple design is often the hardest to achieve. It requires careful consideration of every element.</p>\
             <p>When we remove the unnecessary, we make room for the essential. This principle applies not just to \
             visual design, but to how we structure our thoughts, our code, and our lives.</p>",
        ),
        demo_post(
            3,
            "Thoughts on Digital Minimalism",
            (2024, 3, 10),
            "<p>Our digital lives have become cluttered with apps, notifications, and endless streams of content.</p>\
             <p>Digital minimalism is about using technology in a way that supports our values and goals, rather than \
             letting it control us.</p><blockquote>\"The cost of a thing is the amount of what I will call life which \
             is required to be exchanged for it, immediately or in the long run.\" - Henry David Thoreau</blockquote>",
        ),
        demo_post(
            4,
            "Building Better Habits",
            (2023, 11, 5),
            "<p>Habits shape our daily lives more than we realize. By being intentional about our habits, we can \
             transform our lives.</p><p>Start small, be consistent, and focus on systems rather than goals.</p>",
        ),
        demo_post(
            5,
            "The Art of Saying No",
            (2023, 9, 12),
            "<p>Every yes to something is a no to something else. Learning to say no is essential for protecting our \
             time and energy.</p><p>It's not about being negative or unhelpful—it's about being selective so we can \
             say yes to what truly matters.</p>",
        ),
    ]
}
