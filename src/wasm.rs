// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the blog reader.
//!
//! One JS-owned `QuireReader` holds the posts and the current query. The page
//! calls `setQuery` on every input event and re-renders from `sidebar()`;
//! opening a post returns ready-to-insert HTML with hits already marked.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::catalog::{check_unique_ids, demo_posts};
use crate::reader::{Reader, Sidebar};
use crate::slug::slugify;
use crate::types::{Post, PostId};

/// Post list entry for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostSummary {
    id: PostId,
    title: String,
    slug: String,
    /// YYYY-MM-DD
    date: String,
    has_title: bool,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        PostSummary {
            id: post.id,
            title: post.title.clone(),
            slug: slugify(&post.title),
            date: post.date.format("%Y-%m-%d").to_string(),
            has_title: post.has_title,
        }
    }
}

#[derive(Serialize)]
struct YearOutput {
    year: i32,
    posts: Vec<PostSummary>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum SidebarOutput {
    Archive { years: Vec<YearOutput> },
    Results { posts: Vec<PostSummary> },
    Empty,
}

impl From<Sidebar<'_>> for SidebarOutput {
    fn from(sidebar: Sidebar<'_>) -> Self {
        match sidebar {
            Sidebar::Archive(groups) => SidebarOutput::Archive {
                years: groups
                    .into_iter()
                    .map(|group| YearOutput {
                        year: group.year,
                        posts: group.posts.into_iter().map(PostSummary::from).collect(),
                    })
                    .collect(),
            },
            Sidebar::Results(posts) => SidebarOutput::Results {
                posts: posts.into_iter().map(PostSummary::from).collect(),
            },
            Sidebar::Empty => SidebarOutput::Empty,
        }
    }
}

/// WASM-accessible reading session.
#[wasm_bindgen]
pub struct QuireReader {
    inner: Reader,
}

#[wasm_bindgen]
impl QuireReader {
    /// Create a reader from an array of post objects.
    #[wasm_bindgen(constructor)]
    pub fn new(posts: JsValue) -> Result<QuireReader, JsValue> {
        let posts: Vec<Post> = from_value(posts).map_err(|e| e.to_string())?;
        check_unique_ids(&posts).map_err(|e| e.to_string())?;
        Ok(QuireReader {
            inner: Reader::new(posts),
        })
    }

    /// A reader over the built-in sample posts, for when `posts.json` fails.
    #[wasm_bindgen]
    pub fn demo() -> QuireReader {
        QuireReader {
            inner: Reader::new(demo_posts()),
        }
    }

    /// Set the search box contents. Returns whether a search is active.
    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, raw: &str) -> bool {
        self.inner.set_query(raw)
    }

    #[wasm_bindgen]
    pub fn query(&self) -> Option<String> {
        self.inner.query().map(str::to_string)
    }

    /// Posts in display order as summaries.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let posts: Vec<PostSummary> = self
            .inner
            .results()
            .into_iter()
            .map(PostSummary::from)
            .collect();
        to_value(&posts).map_err(|e| e.to_string().into())
    }

    /// `{ kind: "archive", years }`, `{ kind: "results", posts }` or `{ kind: "empty" }`.
    #[wasm_bindgen]
    pub fn sidebar(&self) -> Result<JsValue, JsValue> {
        let output = SidebarOutput::from(self.inner.sidebar());
        to_value(&output).map_err(|e| e.to_string().into())
    }

    /// Open a post by id. `null` when there is no such post.
    #[wasm_bindgen]
    pub fn open(&self, id: PostId) -> Result<JsValue, JsValue> {
        match self.inner.open(id) {
            Some(opened) => to_value(&opened).map_err(|e| e.to_string().into()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Open a post by URL slug. `null` when no title slugs to it.
    #[wasm_bindgen(js_name = openSlug)]
    pub fn open_slug(&self, slug: &str) -> Result<JsValue, JsValue> {
        match self.inner.open_slug(slug) {
            Some(opened) => to_value(&opened).map_err(|e| e.to_string().into()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Highlight arbitrary text with the current query.
    #[wasm_bindgen]
    pub fn highlight(&self, text: &str) -> String {
        self.inner.highlight(text)
    }

    #[wasm_bindgen(js_name = postCount)]
    pub fn post_count(&self) -> usize {
        self.inner.posts().len()
    }
}

/// Slug for a title, for building share links in JS.
#[wasm_bindgen(js_name = slugify)]
pub fn slugify_title(title: &str) -> String {
    slugify(title)
}

/// One-shot highlight without a reader.
#[wasm_bindgen(js_name = highlight)]
pub fn highlight_text(text: &str, query: &str) -> String {
    crate::matcher::highlight(text, query)
}
