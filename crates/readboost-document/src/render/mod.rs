// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rendering seam — the narrow contract between the layout engine and whatever
// produces the output document, plus the dispatcher that drives it.

pub mod dispatch;
pub mod recording;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use readboost_core::FontStyle;
use readboost_core::error::{ReadboostError, Result};

pub use dispatch::{DrawInstruction, dispatch, plan, render};
pub use recording::RecordingBackend;

/// Glyph-width measurement.
///
/// `Sync` because reflow measures paragraphs in parallel.
pub trait TextMeasure: Sync {
    /// Advance width of `text` set in `font` at `size` points.
    fn measure_width(&self, text: &str, font: FontStyle, size: f32) -> f32;
}

/// Opaque handle to a page created by a [`RenderBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle(pub usize);

/// An output document under construction.
///
/// Implementors must measure with the same fonts they draw with; the layout
/// engine measures through this same value before drawing.
pub trait RenderBackend: TextMeasure {
    /// Append a blank page.
    fn add_page(&mut self, width: f32, height: f32) -> Result<PageHandle>;

    /// Draw a text run with its baseline origin at (`x`, `y`).
    fn draw_text(
        &mut self,
        page: PageHandle,
        text: &str,
        font: FontStyle,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()>;

    /// Produce the final document bytes. Called once per export.
    fn serialize(&mut self) -> Result<Vec<u8>>;
}

/// Host-side destination for a finished export (download, file, share sheet).
pub trait DownloadSink {
    fn deliver(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<()>;
}

/// Keeps the last delivered document in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub file_name: Option<String>,
    pub bytes: Option<Vec<u8>>,
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        self.file_name = Some(file_name.to_string());
        self.bytes = Some(bytes);
        Ok(())
    }
}

/// Cooperative cancellation flag shared between a host and a running export.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// `Err(Cancelled)` once [`CancelToken::cancel`] has been called.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(ReadboostError::Cancelled)
        } else {
            Ok(())
        }
    }
}
