// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Render dispatch — turn paginated lines into positioned draw instructions
// and drive a `RenderBackend` through them.

use readboost_core::error::{ReadboostError, Result};
use readboost_core::{FontStyle, LayoutConfig, PageGeometry};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{CancelToken, DownloadSink, RenderBackend};
use crate::layout::Page;

/// A single positioned text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawInstruction {
    /// Zero-based output page.
    pub page: usize,
    pub text: String,
    pub font: FontStyle,
    pub x: f32,
    /// Baseline, in points from the bottom edge.
    pub y: f32,
    pub size: f32,
}

/// Lay out draw instructions for every run on every page.
///
/// Each line starts at the left margin; `x` advances by the measured width
/// of every preceding run on the line, plus the line's justification gap
/// after each word. Runs with no text still advance `x` but emit nothing.
pub fn plan(pages: &[Page], layout: &LayoutConfig, geometry: &PageGeometry) -> Vec<DrawInstruction> {
    let mut instructions = Vec::new();
    for (page_index, page) in pages.iter().enumerate() {
        for placed in &page.lines {
            let mut x = geometry.margin;
            for run in &placed.line.runs {
                if !run.text.is_empty() {
                    instructions.push(DrawInstruction {
                        page: page_index,
                        text: run.text.clone(),
                        font: run.font(),
                        x,
                        y: placed.baseline,
                        size: layout.font_size,
                    });
                }
                x += run.width;
                if !run.is_bold {
                    x += placed.line.word_gap;
                }
            }
        }
    }
    instructions
}

/// Issue `instructions` to `backend`, serialise once and hand the bytes to
/// `sink` under `file_name`.
///
/// Each of the `page_count` pages is added before its runs are drawn, so a
/// page without instructions is still emitted. `cancel` is checked between
/// pages and once more after serialisation; a cancelled export never
/// reaches the sink. Backend failures are returned as-is, never retried.
///
/// Returns the number of bytes delivered.
#[instrument(skip_all, fields(pages = page_count, instructions = instructions.len(), file_name = %file_name))]
pub fn dispatch<B, S>(
    instructions: &[DrawInstruction],
    page_count: usize,
    geometry: &PageGeometry,
    backend: &mut B,
    sink: &mut S,
    file_name: &str,
    cancel: &CancelToken,
) -> Result<usize>
where
    B: RenderBackend + ?Sized,
    S: DownloadSink + ?Sized,
{
    let mut remaining = instructions;
    for page_index in 0..page_count {
        cancel.check()?;
        let handle = backend.add_page(geometry.width, geometry.height)?;

        let split = remaining
            .iter()
            .position(|ins| ins.page != page_index)
            .unwrap_or(remaining.len());
        let (on_page, rest) = remaining.split_at(split);
        for ins in on_page {
            backend.draw_text(handle, &ins.text, ins.font, ins.size, ins.x, ins.y)?;
        }
        debug!(page = page_index + 1, runs = on_page.len(), "Page drawn");
        remaining = rest;
    }

    if !remaining.is_empty() {
        return Err(ReadboostError::Render(format!(
            "{} draw instructions reference pages beyond {}",
            remaining.len(),
            page_count
        )));
    }

    let bytes = backend.serialize()?;
    if cancel.is_cancelled() {
        warn!("Export cancelled after serialisation, discarding output");
        return Err(ReadboostError::Cancelled);
    }

    let byte_len = bytes.len();
    sink.deliver(file_name, bytes)?;
    info!(bytes = byte_len, "Export delivered");
    Ok(byte_len)
}

/// [`plan`] then [`dispatch`] in one step.
pub fn render<B, S>(
    pages: &[Page],
    layout: &LayoutConfig,
    geometry: &PageGeometry,
    backend: &mut B,
    sink: &mut S,
    file_name: &str,
    cancel: &CancelToken,
) -> Result<usize>
where
    B: RenderBackend + ?Sized,
    S: DownloadSink + ?Sized,
{
    let instructions = plan(pages, layout, geometry);
    dispatch(&instructions, pages.len(), geometry, backend, sink, file_name, cancel)
}
