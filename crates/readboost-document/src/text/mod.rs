// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text pipeline — normalization, paragraph segmentation, excerpt selection
// and the per-word bolding rule.

pub mod bolding;
pub mod excerpt;
pub mod normalize;
pub mod segment;

pub use bolding::{bold_length, split_word};
pub use excerpt::select_excerpt;
pub use normalize::normalize;
pub use segment::{DEFAULT_MIN_PARAGRAPH_LEN, segment};

use readboost_core::RawPage;

/// Join extracted pages, in page order, into one document text.
pub fn full_text(pages: &[RawPage]) -> String {
    let mut ordered: Vec<&RawPage> = pages.iter().collect();
    ordered.sort_by_key(|page| page.page_index);
    ordered
        .iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_joined_in_index_order() {
        let pages = vec![
            RawPage {
                page_index: 1,
                text: "second".into(),
            },
            RawPage {
                page_index: 0,
                text: "first".into(),
            },
        ];
        assert_eq!(full_text(&pages), "first\nsecond");
    }
}
