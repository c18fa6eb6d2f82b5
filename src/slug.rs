// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! URL-friendly slugs for sharing links to posts.
//!
//! A slug keeps Latin letters, digits and Russian Cyrillic; everything else
//! except whitespace and hyphens is dropped before whitespace runs turn into
//! single hyphens. Two posts whose titles differ only in punctuation share a
//! slug, and the first one wins on lookup.

use crate::types::Post;

/// Derive the slug for a post title.
///
/// ```
/// use quire::slugify;
/// assert_eq!(slugify("The Art of Saying No!"), "the-art-of-saying-no");
/// assert_eq!(slugify("Привет, мир"), "привет-мир");
/// ```
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|&c| is_slug_char(c) || c.is_whitespace() || c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

#[inline]
fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ('а'..='я').contains(&c) || c == 'ё'
}

/// Find the first post whose title slugs to `slug`.
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|post| slugify(&post.title) == slug)
}
