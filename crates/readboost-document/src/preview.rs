// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview projection — the bolding rule applied to every word of a set of
// paragraphs, for on-screen display. No measurement or pagination happens
// here; hosts wrap the words themselves.

use readboost_core::{BoldSplit, BoldingConfig, BoldingMethod, Paragraph};
use serde::{Deserialize, Serialize};

use crate::text::split_word;

/// Which paragraphs a preview covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewMode {
    /// The session's current excerpt.
    #[default]
    Excerpt,
    /// Every paragraph that survived segmentation.
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewParagraph {
    pub words: Vec<BoldSplit>,
}

impl PreviewParagraph {
    /// The paragraph text with words joined by single spaces.
    pub fn plain_text(&self) -> String {
        self.words.iter().map(BoldSplit::word).collect::<Vec<_>>().join(" ")
    }
}

/// A bolded rendering of some paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub mode: PreviewMode,
    pub bolding: BoldingConfig,
    pub paragraphs: Vec<PreviewParagraph>,
}

impl Preview {
    pub fn word_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.words.len()).sum()
    }

    /// Markdown with each bold prefix wrapped in `**`, paragraphs separated by
    /// a blank line.
    pub fn to_markdown(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| {
                p.words
                    .iter()
                    .map(|w| {
                        if w.bold.is_empty() {
                            w.regular.clone()
                        } else {
                            format!("**{}**{}", w.bold, w.regular)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Short human description of the active rule, e.g. `1/2/3 letters`.
    pub fn rule_label(&self) -> String {
        let b = &self.bolding;
        match b.method {
            BoldingMethod::Proportional => {
                format!("{}/{}/{} letters", b.short_words, b.medium_words, b.long_words)
            }
            BoldingMethod::Fixed => format!("{} letters per word", b.short_words),
            BoldingMethod::FirstLetter => "first letter".to_string(),
        }
    }
}

/// Apply the bolding rule to every word of `paragraphs`.
pub fn preview(paragraphs: &[Paragraph], cfg: &BoldingConfig, mode: PreviewMode) -> Preview {
    Preview {
        mode,
        bolding: *cfg,
        paragraphs: paragraphs
            .iter()
            .map(|p| PreviewParagraph {
                words: p.words().map(|w| split_word(w, cfg)).collect(),
            })
            .collect(),
    }
}
