// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// readboost-document — the Readboost reflow engine.
//
// Extracts text from uploaded PDFs, segments it into paragraphs, picks a short
// excerpt, bolds the first letters of each word, reflows and paginates the
// result with measured glyph widths, and renders it to a new PDF.

pub mod layout;
pub mod pdf;
pub mod preview;
pub mod render;
pub mod session;
pub mod text;

// Re-export the primary entry points so callers can use
// `readboost_document::DocumentSession` etc.
pub use layout::{Line, Page, PlacedLine, TextRun, paginate, reflow};
pub use pdf::{HelveticaMetrics, PdfExtractor, PdfReader, PdfWriter, TextExtractor};
pub use preview::{Preview, PreviewMode, PreviewParagraph};
pub use render::{CancelToken, DownloadSink, DrawInstruction, MemorySink, RecordingBackend, RenderBackend, TextMeasure};
pub use session::DocumentSession;
