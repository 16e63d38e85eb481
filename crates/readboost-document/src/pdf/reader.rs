// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open an uploaded PDF and extract per-page plain text using the
// `lopdf` crate.

use std::path::Path;

use lopdf::Document;
use readboost_core::RawPage;
use readboost_core::error::{ReadboostError, Result};
use tracing::{debug, info, instrument, warn};

/// Extraction service contract: document bytes in, per-page text out.
pub trait TextExtractor {
    /// Fails with [`ReadboostError::Extraction`] on malformed or encrypted input.
    fn extract(&self, bytes: &[u8]) -> Result<Vec<RawPage>>;
}

/// Reads an existing PDF file.
///
/// Wraps `lopdf::Document`; rejects encrypted documents up front.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<String>,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            ReadboostError::Extraction(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        Self::checked(document, Some(path_ref.display().to_string()))
    }

    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            ReadboostError::Extraction(format!("failed to load PDF from memory: {}", err))
        })?;

        Self::checked(document, None)
    }

    fn checked(document: Document, source_path: Option<String>) -> Result<Self> {
        if document.is_encrypted() {
            return Err(ReadboostError::Extraction("document is encrypted".into()));
        }
        debug!(pages = document.get_pages().len(), "PDF loaded");
        Ok(Self {
            document,
            source_path,
        })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Return the source path if the reader was created via [`PdfReader::open`].
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    // -- Extraction -----------------------------------------------------------

    /// Extract the text of every page, in page order.
    ///
    /// A page whose content cannot be decoded yields empty text and a warning;
    /// the call only fails when no page at all could be decoded.
    #[instrument(skip(self), fields(pages = self.page_count()))]
    pub fn extract_pages(&self) -> Result<Vec<RawPage>> {
        let mut page_numbers: Vec<u32> = self.document.get_pages().keys().copied().collect();
        page_numbers.sort();

        let mut pages = Vec::with_capacity(page_numbers.len());
        let mut failures = 0usize;
        let mut last_error = None;

        for (page_index, page_number) in page_numbers.iter().enumerate() {
            let text = match self.document.extract_text(&[*page_number]) {
                Ok(text) => text,
                Err(err) => {
                    warn!(page_number, %err, "Cannot extract page text, using empty text");
                    failures += 1;
                    last_error = Some(err.to_string());
                    String::new()
                }
            };
            pages.push(RawPage { page_index, text });
        }

        if !pages.is_empty() && failures == pages.len() {
            return Err(ReadboostError::Extraction(format!(
                "no page could be decoded: {}",
                last_error.unwrap_or_default()
            )));
        }

        let chars: usize = pages.iter().map(|p| p.text.chars().count()).sum();
        debug!(pages = pages.len(), failures, chars, "Text extracted");
        Ok(pages)
    }
}

/// [`TextExtractor`] backed by [`PdfReader`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<Vec<RawPage>> {
        PdfReader::from_bytes(bytes)?.extract_pages()
    }
}
