// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flatten post markup into plain text for terminals.
//!
//! Post bodies are small HTML fragments (`<p>`, `<ul>`, `<blockquote>`, …).
//! This is not an HTML parser: tags are dropped, block-level tags become line
//! breaks and the handful of entities scrapers actually emit are decoded.
//! Anything fancier belongs in a browser.

/// Tags that end a visual line when they open or close.
const BLOCK_TAGS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
    "hr", "figure", "figcaption", "img",
];

/// Convert an HTML fragment to plain text.
///
/// Consecutive line breaks collapse to one blank line; list items are
/// prefixed with a bullet.
pub fn flatten_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '<' => {
                let Some(end) = html[start..].find('>') else {
                    // Unterminated tag: treat the rest as text.
                    out.push_str(&html[start..]);
                    break;
                };
                let tag = &html[start + 1..start + end];
                apply_tag(tag, &mut out);
                while chars.peek().is_some_and(|&(i, _)| i <= start + end) {
                    chars.next();
                }
            }
            '&' => {
                let rest = &html[start..];
                match decode_entity(rest) {
                    Some((decoded, len)) => {
                        out.push(decoded);
                        while chars.peek().is_some_and(|&(i, _)| i < start + len) {
                            chars.next();
                        }
                    }
                    None => out.push('&'),
                }
            }
            '\n' | '\r' => push_space(&mut out),
            _ => out.push(c),
        }
    }

    tidy_lines(&out)
}

fn apply_tag(tag: &str, out: &mut String) {
    let closing = tag.starts_with('/');
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if name == "li" {
        if !closing {
            out.push_str("\n• ");
        }
    } else if BLOCK_TAGS.contains(&name.as_str()) {
        out.push('\n');
        if closing && matches!(name.as_str(), "p" | "blockquote" | "ul" | "ol") {
            out.push('\n');
        }
    }
}

fn push_space(out: &mut String) {
    if !out.ends_with([' ', '\n']) {
        out.push(' ');
    }
}

/// Decode an entity at the start of `s`, returning the char and entity length.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let (end, _) = s.char_indices().take(12).find(|&(_, c)| c == ';')?;
    let body = &s[1..end];
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" | "#39" => '\'',
        "nbsp" => ' ',
        "mdash" => '—',
        "ndash" => '–',
        "laquo" => '«',
        "raquo" => '»',
        _ => {
            let code = body.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)?
        }
    };
    Some((decoded, end + 1))
}

fn tidy_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.split('\n').map(str::trim) {
        if line.is_empty() && lines.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
