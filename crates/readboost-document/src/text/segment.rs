// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paragraph segmentation.
//
// A paragraph boundary is a period followed by whitespace. This is a
// heuristic: abbreviations ("e.g. this") and numbers written with a trailing
// period split too. Short fragments are dropped by the length filter.

use std::sync::LazyLock;

use readboost_core::Paragraph;
use regex::Regex;
use tracing::debug;

/// Default minimum paragraph length, in characters.
pub const DEFAULT_MIN_PARAGRAPH_LEN: usize = 80;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+").expect("paragraph boundary pattern is valid"));

/// Split normalized document text into paragraphs.
///
/// The period stays with the fragment before it; the whitespace after it is
/// discarded. Text after the last boundary is an ordinary fragment. Fragments
/// shorter than `min_len` characters (after trimming) are dropped.
pub fn segment(full_text: &str, min_len: usize) -> Vec<Paragraph> {
    let mut fragments = Vec::new();
    let mut last = 0;
    for boundary in BOUNDARY.find_iter(full_text) {
        // The match starts at the period, which is one byte.
        fragments.push(&full_text[last..boundary.start() + 1]);
        last = boundary.end();
    }
    fragments.push(&full_text[last..]);

    let total = fragments.len();
    let paragraphs: Vec<Paragraph> = fragments
        .into_iter()
        .filter_map(Paragraph::new)
        .filter(|p| p.char_len() >= min_len)
        .collect();

    debug!(fragments = total, kept = paragraphs.len(), min_len, "Segmented text");
    paragraphs
}
