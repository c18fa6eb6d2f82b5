// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use quire::{flatten_markup, slugify, Catalog, CatalogSource, PostId, Reader, Sidebar};

mod cli;
use cli::display::{self, *};
use cli::{Cli, Commands};

/// Private-use sentinels carried through markup flattening, then swapped for
/// terminal highlight codes.
const HIT_OPEN: &str = "\u{E000}";
const HIT_CLOSE: &str = "\u{E001}";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter.unwrap_or_else(|| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::load_or_demo(&cli.posts);
    match &catalog.source {
        CatalogSource::File(path) => info!(path = %path.display(), "using post file"),
        CatalogSource::Demo => info!("using demo posts"),
    }
    let is_demo = catalog.is_demo();
    let mut reader = Reader::from_catalog(catalog);

    match cli.command {
        Commands::List => print_archive(&reader, is_demo),
        Commands::Search {
            query,
            limit,
            explain,
        } => {
            if !reader.set_query(&query) {
                debug!("blank query, printing the archive");
                print_archive(&reader, is_demo);
            } else {
                print_results(&reader, limit, explain, is_demo);
            }
        }
        Commands::Show { target, query } => {
            if let Some(query) = query {
                reader.set_query(&query);
            }
            print_post(&reader, &target)?;
        }
        Commands::Slug { title } => println!("{}", slugify(&title)),
    }

    Ok(())
}

fn demo_notice(is_demo: bool) {
    if is_demo {
        println!(
            "{}",
            themed(YELLOW, &[], "  posts file unavailable, showing demo posts")
        );
    }
}

fn print_archive(reader: &Reader, is_demo: bool) {
    double_header();
    display::title(&format!("quire · {} posts", reader.posts().len()));
    double_footer();
    demo_notice(is_demo);

    let Sidebar::Archive(groups) = reader.sidebar() else {
        println!("  no posts");
        return;
    };
    for (i, group) in groups.iter().enumerate() {
        let label = group.year.to_string();
        if i == 0 {
            section_top(&label);
        } else {
            section_mid(&label);
        }
        for post in &group.posts {
            row(&format!(
                "  {}  {}",
                short_date(post),
                truncate(&post.title, BOX_WIDTH - 12)
            ));
        }
    }
    section_bot();
}

fn print_results(reader: &Reader, limit: Option<usize>, explain: bool, is_demo: bool) {
    let ranked = reader.ranked();
    let query = reader.query().unwrap_or_default();

    double_header();
    display::title(&format!("{} results for \"{}\"", ranked.len(), query));
    double_footer();
    demo_notice(is_demo);

    if ranked.is_empty() {
        println!("  nothing found");
        return;
    }

    let (open, close) = highlight_markers();
    let shown = limit.unwrap_or(ranked.len()).min(ranked.len());
    let width = if explain { BOX_WIDTH - 40 } else { BOX_WIDTH - 16 };
    section_top("Results");
    for (i, hit) in ranked.iter().take(shown).enumerate() {
        let title = truncate(&hit.post.title, width);
        let title = match reader.matcher() {
            Some(matcher) => matcher.highlight_with(&title, &open, &close),
            None => title,
        };
        let mut line = format!(
            " {:>3}. {}  {}",
            i + 1,
            pad_right(&title, width),
            short_date(hit.post)
        );
        if explain {
            // The last result has nothing below it to beat.
            if let Some(tier) = ranked.get(i + 1).and_then(|next| hit.decided_against(next)) {
                line.push_str(&format!("  {} {}", tier_label(tier), tier.label()));
            }
        }
        row(&line);
    }
    section_bot();

    if shown < ranked.len() {
        println!("  … {} more", ranked.len() - shown);
    }
}

fn print_post(reader: &Reader, target: &str) -> Result<()> {
    let opened = target
        .parse::<PostId>()
        .ok()
        .and_then(|id| reader.open(id))
        .or_else(|| reader.open_slug(target))
        .ok_or_else(|| anyhow!("no post with id or slug '{}'", target))?;
    let post = reader
        .post(opened.id)
        .ok_or_else(|| anyhow!("post {} disappeared", opened.id))?;

    double_header();
    display::title(&opened.title);
    double_footer();
    println!(
        "  {}  {}",
        themed(GRAY, &[], &opened.date_label),
        themed(CYAN, &[], &format!("#{}", opened.slug))
    );
    if let Some(image) = &post.image {
        println!("  {}", themed(GRAY, &[], &format!("[image: {}]", image)));
    }
    if reader.query().is_some() {
        println!(
            "  {}",
            themed(YELLOW, &[], &format!("{} matches", opened.matches))
        );
    }
    println!();

    let body = match reader.matcher() {
        Some(matcher) => matcher.highlight_with(&post.body, HIT_OPEN, HIT_CLOSE),
        None => post.body.clone(),
    };
    let (open, close) = highlight_markers();
    let text = flatten_markup(&body)
        .replace(HIT_OPEN, &open)
        .replace(HIT_CLOSE, &close);
    for line in text.lines() {
        println!("  {}", line);
    }
    Ok(())
}
