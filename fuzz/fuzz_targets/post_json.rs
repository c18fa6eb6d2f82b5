// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the posts file parser.
//!
//! Garbage in, `Err` out. Anything that parses must survive a reader session.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quire::{parse_posts, Reader};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(posts) = parse_posts(json) else {
        return;
    };
    let mut reader = Reader::new(posts);
    let _ = reader.sidebar();
    reader.set_query("a");
    for post in reader.results() {
        assert!(reader.open(post.id).is_some());
    }
});
