// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers shared by the matcher, the reader and the CLI.
//!
//! Query normalization lives here so the filter, the ranker and the
//! highlighter all agree on what the user actually typed. Markup flattening
//! is only needed by front ends that cannot render HTML.

pub mod markup;
pub mod normalize;
