// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The reading session: one post set, one current query.
//!
//! A `Reader` is owned by whatever front end is driving it (the CLI, the
//! WASM bindings). Every view it produces is computed from its two fields on
//! demand, so changing the query simply makes the next call see the new
//! query. Nothing is cached and nothing is in flight.

use serde::Serialize;
use tracing::trace;

use crate::archive::group_by_year;
use crate::catalog::Catalog;
use crate::matcher::WordMatcher;
use crate::search::{rank, rank_with, RankedPost};
use crate::slug::{find_by_slug, slugify};
use crate::types::{Post, PostId, YearGroup};

/// What the post list should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sidebar<'a> {
    /// No query: the full archive, grouped by year.
    Archive(Vec<YearGroup<'a>>),
    /// A query with hits, in ranked order.
    Results(Vec<&'a Post>),
    /// Nothing to show: no posts at all, or a query without hits.
    Empty,
}

/// A post prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenedPost {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub has_title: bool,
    /// Long-form date, e.g. "January 15, 2024".
    pub date_label: String,
    /// Lead image (if any) followed by the body, with query hits in the body marked.
    pub html: String,
    /// Number of highlighted occurrences in the body.
    pub matches: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Reader {
    posts: Vec<Post>,
    matcher: Option<WordMatcher>,
}

impl Reader {
    pub fn new(posts: Vec<Post>) -> Self {
        Reader {
            posts,
            matcher: None,
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Reader::new(catalog.posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Replace the current query with raw search box input.
    ///
    /// Blank input clears the search. Returns whether a search is now active;
    /// a query too large to compile is active and finds nothing.
    pub fn set_query(&mut self, raw: &str) -> bool {
        self.matcher = WordMatcher::new(raw);
        trace!(query = ?self.query(), "query changed");
        self.matcher.is_some()
    }

    pub fn clear_query(&mut self) {
        self.matcher = None;
    }

    /// The normalized current query, if a search is active.
    pub fn query(&self) -> Option<&str> {
        self.matcher.as_ref().map(|m| m.query().as_str())
    }

    pub fn matcher(&self) -> Option<&WordMatcher> {
        self.matcher.as_ref()
    }

    /// Posts in display order: ranked hits while searching, else newest first.
    pub fn results(&self) -> Vec<&Post> {
        match &self.matcher {
            Some(matcher) => rank_with(&self.posts, matcher)
                .into_iter()
                .map(|ranked| ranked.post)
                .collect(),
            None => rank(&self.posts, ""),
        }
    }

    /// Ranked hits with their relevance keys. Empty when not searching.
    pub fn ranked(&self) -> Vec<RankedPost<'_>> {
        self.matcher
            .as_ref()
            .map(|matcher| rank_with(&self.posts, matcher))
            .unwrap_or_default()
    }

    pub fn sidebar(&self) -> Sidebar<'_> {
        if self.matcher.is_none() {
            if self.posts.is_empty() {
                return Sidebar::Empty;
            }
            return Sidebar::Archive(group_by_year(&self.posts));
        }
        let results = self.results();
        if results.is_empty() {
            Sidebar::Empty
        } else {
            Sidebar::Results(results)
        }
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn open(&self, id: PostId) -> Option<OpenedPost> {
        self.post(id).map(|post| self.render(post))
    }

    pub fn open_slug(&self, slug: &str) -> Option<OpenedPost> {
        find_by_slug(&self.posts, slug).map(|post| self.render(post))
    }

    /// Highlight `text` with the current query; identity when not searching.
    pub fn highlight(&self, text: &str) -> String {
        match &self.matcher {
            Some(matcher) => matcher.highlight(text),
            None => text.to_string(),
        }
    }

    fn render(&self, post: &Post) -> OpenedPost {
        let mut html = String::new();
        if let Some(image) = &post.image {
            html.push_str(&format!(
                r#"<img src="{}" alt="{}" class="post-image" loading="lazy">"#,
                escape_attr(image),
                escape_attr(&post.title)
            ));
        }
        // Only the body is searched; the image tag stays unmarked.
        html.push_str(&self.highlight(&post.body));

        let matches = self.matcher.as_ref().map_or(0, |m| m.count(&post.body));
        OpenedPost {
            id: post.id,
            title: post.title.clone(),
            slug: slugify(&post.title),
            has_title: post.has_title,
            date_label: long_date(post),
            html,
            matches,
        }
    }
}

/// "January 15, 2024"
pub fn long_date(post: &Post) -> String {
    post.date.format("%B %-d, %Y").to_string()
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
