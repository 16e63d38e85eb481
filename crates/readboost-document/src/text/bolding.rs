// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The bolding rule. Both the preview projection and the export reflow call
// `split_word`; there is no second implementation.

use readboost_core::{BoldSplit, BoldingConfig, BoldingMethod};
use unicode_segmentation::UnicodeSegmentation;

/// Words longer than this many letters use the long tier.
pub const LONG_WORD_THRESHOLD: usize = 6;
/// Words longer than this many letters (and not long) use the medium tier.
pub const MEDIUM_WORD_THRESHOLD: usize = 3;

/// Number of leading letters to embolden in a word of `len` letters,
/// before clamping to the word length.
pub fn bold_length(len: usize, cfg: &BoldingConfig) -> usize {
    match cfg.method {
        BoldingMethod::Proportional => {
            if len > LONG_WORD_THRESHOLD {
                cfg.long_words
            } else if len > MEDIUM_WORD_THRESHOLD {
                cfg.medium_words
            } else {
                cfg.short_words
            }
        }
        BoldingMethod::Fixed => cfg.short_words,
        BoldingMethod::FirstLetter => 1,
    }
}

/// Split a word into its bold prefix and regular remainder.
///
/// Letters are counted as extended grapheme clusters, so a base letter is
/// never separated from its combining marks. Surrounding whitespace is
/// trimmed first; the empty word maps to `("", "")`.
pub fn split_word(word: &str, cfg: &BoldingConfig) -> BoldSplit {
    let cleaned = word.trim();
    let graphemes: Vec<&str> = cleaned.graphemes(true).collect();
    if graphemes.is_empty() {
        return BoldSplit::default();
    }

    let bold_letters = bold_length(graphemes.len(), cfg).min(graphemes.len());
    let split_at: usize = graphemes[..bold_letters].iter().map(|g| g.len()).sum();
    let (bold, regular) = cleaned.split_at(split_at);

    BoldSplit {
        bold: bold.to_string(),
        regular: regular.to_string(),
    }
}
