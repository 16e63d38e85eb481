// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagination — assign reflowed lines to pages and give each a baseline.

use readboost_core::{LayoutConfig, PageGeometry};
use serde::Serialize;
use tracing::debug;

use super::reflow::Line;

/// A line with its baseline on the page, in PDF points from the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub line: Line,
    pub baseline: f32,
}

/// One output page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// One-based page number.
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

impl Page {
    fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }
}

/// Distribute `lines` over pages, top to bottom.
///
/// The cursor starts at the top margin. Before placing a line, if advancing
/// past it would cross the bottom margin and the page already holds a line,
/// the page is sealed and the cursor resets. The line is drawn at the cursor,
/// which then moves down by one line advance, or by the paragraph gap when
/// the line ends a paragraph and more lines follow.
///
/// Always returns at least one page; an empty input yields a single empty
/// page.
pub fn paginate(lines: &[Line], layout: &LayoutConfig, geometry: &PageGeometry) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut page = Page::new(1);
    let mut y = geometry.top();

    for (i, line) in lines.iter().enumerate() {
        let paragraph_break = line.last_in_paragraph && i + 1 < lines.len();
        let advance = if paragraph_break {
            layout.paragraph_gap()
        } else {
            layout.line_advance()
        };

        if y - advance < geometry.margin && !page.lines.is_empty() {
            let next = Page::new(page.number + 1);
            pages.push(std::mem::replace(&mut page, next));
            y = geometry.top();
        }

        page.lines.push(PlacedLine {
            line: line.clone(),
            baseline: y,
        });
        y -= advance;
    }
    pages.push(page);

    debug!(lines = lines.len(), pages = pages.len(), "Pagination complete");
    pages
}
