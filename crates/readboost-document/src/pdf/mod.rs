// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — text extraction from uploaded PDFs, glyph metrics, and the
// export writer.

pub mod metrics;
pub mod reader;
pub mod writer;

pub use metrics::HelveticaMetrics;
pub use reader::{PdfExtractor, PdfReader, TextExtractor};
pub use writer::PdfWriter;
