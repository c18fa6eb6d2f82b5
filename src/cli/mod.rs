// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quire command-line interface.
//!
//! Four subcommands: `list` prints the archive, `search` ranks posts for a
//! query (optionally explaining which tier placed each result), `show` prints
//! one post with the query highlighted, and `slug` prints the share slug for
//! a title. The post file and log filter can also come from the environment.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quire",
    about = "Whole-word search and tiered ranking for a static blog",
    version
)]
pub struct Cli {
    /// Posts file (JSON array). Unreadable or invalid files fall back to the demo posts
    #[arg(long, global = true, env = "QUIRE_POSTS", default_value = "posts.json")]
    pub posts: PathBuf,

    /// Log filter, e.g. "warn" or "quire=debug". Falls back to RUST_LOG, then "warn"
    #[arg(long, global = true, env = "QUIRE_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every post, grouped by year, newest first
    List,

    /// Rank posts that contain the query as a whole word
    Search {
        /// Search query (case-insensitive, surrounding whitespace ignored)
        query: String,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show the tier that placed each result above the next one
        #[arg(long)]
        explain: bool,
    },

    /// Print a post as plain text
    Show {
        /// Post id or slug
        target: String,

        /// Highlight whole-word occurrences of this query
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print the URL slug for a title
    Slug {
        /// Post title
        title: String,
    },
}
