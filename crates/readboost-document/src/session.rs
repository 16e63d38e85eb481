// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document session — owns the paragraph pool, the current excerpt and the
// host settings for one uploaded document, and runs the preview and export
// pipelines over them.
//
// State lives behind `RwLock`s and is replaced wholesale (`Arc` swap), never
// mutated in place, so readers always see a consistent pool/excerpt pair.
// Only one state-changing operation (open, regenerate, export) may run at a
// time; a second one is rejected with `OperationInProgress` rather than
// queued.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use rand::Rng;
use readboost_core::config::MAX_UPLOAD_BYTES;
use readboost_core::error::{ReadboostError, Result};
use readboost_core::{
    BoldingConfig, DocumentType, Excerpt, ExcerptConfig, ExportSummary, LayoutConfig, PageGeometry,
    Paragraph, SessionId, SessionSettings, SourceDocument,
};
use sha2::{Digest, Sha256};
use tracing::{info, instrument, warn};

use crate::layout::{Page, paginate, reflow};
use crate::pdf::{PdfExtractor, TextExtractor};
use crate::preview::{Preview, PreviewMode, preview};
use crate::render::{CancelToken, DownloadSink, RenderBackend, TextMeasure, render};
use crate::text::{full_text, normalize, segment, select_excerpt};

/// SHA-256 of `data`, hex encoded.
pub fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Holds the session's busy flag for the duration of one operation.
struct OperationGuard<'a>(&'a AtomicBool);

impl<'a> OperationGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| ReadboostError::OperationInProgress)
    }
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One uploaded document and everything derived from it.
pub struct DocumentSession<E: TextExtractor = PdfExtractor> {
    id: SessionId,
    extractor: E,
    geometry: PageGeometry,
    source: RwLock<Option<SourceDocument>>,
    paragraphs: RwLock<Arc<Vec<Paragraph>>>,
    excerpt: RwLock<Arc<Excerpt>>,
    settings: RwLock<SessionSettings>,
    busy: AtomicBool,
}

impl Default for DocumentSession<PdfExtractor> {
    fn default() -> Self {
        Self::new(PdfExtractor)
    }
}

impl<E: TextExtractor> DocumentSession<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            id: SessionId::new(),
            extractor,
            geometry: PageGeometry::LETTER,
            source: RwLock::new(None),
            paragraphs: RwLock::new(Arc::new(Vec::new())),
            excerpt: RwLock::new(Arc::new(Excerpt::default())),
            settings: RwLock::new(SessionSettings::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Start with the given settings instead of the defaults.
    pub fn with_settings(extractor: E, settings: SessionSettings) -> Result<Self> {
        settings.validate()?;
        let session = Self::new(extractor);
        *session.settings.write().unwrap_or_else(PoisonError::into_inner) = settings;
        Ok(session)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    // -- Document -------------------------------------------------------------

    /// Validate and extract an upload, segment it and pick a first excerpt.
    ///
    /// On any failure the previously loaded document, if any, is kept.
    #[instrument(skip_all, fields(session = %self.id, name = %name, bytes = bytes.len()))]
    pub fn open<R: Rng + ?Sized>(&self, name: &str, bytes: &[u8], rng: &mut R) -> Result<SourceDocument> {
        let document_type = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocumentType::from_extension)
            .ok_or_else(|| ReadboostError::UnsupportedDocument(format!("{name}: only PDF files are supported")))?;

        let size = bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(ReadboostError::FileTooLarge {
                size,
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let _guard = OperationGuard::acquire(&self.busy)?;
        let settings = self.settings();

        let pages = self.extractor.extract(bytes)?;
        let text = normalize(&full_text(&pages));
        let paragraphs = segment(&text, settings.excerpt.min_paragraph_len);
        if paragraphs.is_empty() {
            warn!(pages = pages.len(), "No paragraph long enough to show");
            return Err(ReadboostError::EmptyDocument);
        }
        let excerpt = select_excerpt(&paragraphs, &settings.excerpt.count_range, None, rng);

        let source = SourceDocument {
            name: name.to_string(),
            document_type,
            hash: content_hash(bytes),
            size,
            page_count: pages.len(),
            uploaded_at: Utc::now(),
        };

        info!(
            pages = source.page_count,
            paragraphs = paragraphs.len(),
            excerpt = excerpt.len(),
            "Document opened"
        );
        *self.paragraphs.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(paragraphs);
        *self.excerpt.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(excerpt);
        *self.source.write().unwrap_or_else(PoisonError::into_inner) = Some(source.clone());
        Ok(source)
    }

    /// Replace the current excerpt with a freshly drawn one.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn regenerate_excerpt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Arc<Excerpt>> {
        let _guard = OperationGuard::acquire(&self.busy)?;
        let paragraphs = self.paragraphs();
        if paragraphs.is_empty() {
            return Err(ReadboostError::EmptyDocument);
        }

        let range = self.settings().excerpt.count_range;
        let excerpt = Arc::new(select_excerpt(&paragraphs, &range, None, rng));
        info!(start = excerpt.start, len = excerpt.len(), "Excerpt regenerated");
        *self.excerpt.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&excerpt);
        Ok(excerpt)
    }

    pub fn source(&self) -> Option<SourceDocument> {
        self.source.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The full paragraph pool.
    pub fn paragraphs(&self) -> Arc<Vec<Paragraph>> {
        self.paragraphs.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn excerpt(&self) -> Arc<Excerpt> {
        self.excerpt.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    // -- Settings -------------------------------------------------------------

    pub fn settings(&self) -> SessionSettings {
        self.settings.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Rejects out-of-range tiers and leaves the current rule in place.
    pub fn set_bolding(&self, bolding: BoldingConfig) -> Result<()> {
        bolding.validate()?;
        self.settings.write().unwrap_or_else(PoisonError::into_inner).bolding = bolding;
        Ok(())
    }

    pub fn set_layout(&self, layout: LayoutConfig) -> Result<()> {
        layout.validate()?;
        self.settings.write().unwrap_or_else(PoisonError::into_inner).layout = layout;
        Ok(())
    }

    /// Takes effect on the next [`open`](Self::open) or
    /// [`regenerate_excerpt`](Self::regenerate_excerpt).
    pub fn set_excerpt_config(&self, excerpt: ExcerptConfig) -> Result<()> {
        excerpt.validate()?;
        self.settings.write().unwrap_or_else(PoisonError::into_inner).excerpt = excerpt;
        Ok(())
    }

    pub fn reset_settings(&self) {
        self.settings.write().unwrap_or_else(PoisonError::into_inner).reset();
    }

    // -- Preview and export ---------------------------------------------------

    /// Bolded projection of the excerpt or of the whole pool.
    pub fn preview(&self, mode: PreviewMode) -> Result<Preview> {
        let bolding = self.settings().bolding;
        let projected = match mode {
            PreviewMode::Excerpt => {
                let excerpt = self.excerpt();
                preview(&excerpt.paragraphs, &bolding, mode)
            }
            PreviewMode::Full => preview(&self.paragraphs(), &bolding, mode),
        };
        if projected.paragraphs.is_empty() {
            return Err(ReadboostError::EmptyDocument);
        }
        Ok(projected)
    }

    /// Reflow and paginate the current excerpt without rendering it.
    pub fn layout<M: TextMeasure + ?Sized>(&self, measure: &M) -> Result<Vec<Page>> {
        self.layout_with(&self.settings(), measure)
    }

    fn layout_with<M: TextMeasure + ?Sized>(&self, settings: &SessionSettings, measure: &M) -> Result<Vec<Page>> {
        let excerpt = self.excerpt();
        if excerpt.is_empty() {
            return Err(ReadboostError::EmptyDocument);
        }
        let lines = reflow(&excerpt, &settings.bolding, &settings.layout, &self.geometry, measure);
        Ok(paginate(&lines, &settings.layout, &self.geometry))
    }

    /// Render the current excerpt through `backend` and deliver it to `sink`.
    ///
    /// Widths are measured with `backend` itself, and measurement and drawing
    /// share one settings snapshot taken when the export starts. Nothing
    /// reaches the sink if rendering fails or `cancel` fires; session state
    /// is untouched either way.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn export<B, S>(&self, backend: &mut B, sink: &mut S, cancel: &CancelToken) -> Result<ExportSummary>
    where
        B: RenderBackend + ?Sized,
        S: DownloadSink + ?Sized,
    {
        let _guard = OperationGuard::acquire(&self.busy)?;
        cancel.check()?;

        let settings = self.settings();
        let pages = self.layout_with(&settings, &*backend)?;
        let line_count = pages.iter().map(|p| p.lines.len()).sum();
        let file_name = self
            .source()
            .map(|s| s.export_file_name())
            .unwrap_or_else(|| "enhanced-document.pdf".to_string());

        let byte_len = render(&pages, &settings.layout, &self.geometry, backend, sink, &file_name, cancel)?;

        info!(file_name = %file_name, pages = pages.len(), line_count, byte_len, "Export complete");
        Ok(ExportSummary {
            file_name,
            page_count: pages.len(),
            line_count,
            byte_len,
            created_at: Utc::now(),
        })
    }
}
