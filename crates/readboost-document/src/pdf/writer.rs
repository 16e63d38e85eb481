// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — the export rendering backend, built on `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Draw calls are buffered per page and the document is
// assembled in `serialize`.

use printpdf::{BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem};
use readboost_core::FontStyle;
use readboost_core::error::{ReadboostError, Result};
use tracing::{debug, info, instrument, warn};

use super::metrics::HelveticaMetrics;
use crate::render::{PageHandle, RenderBackend, TextMeasure};

/// Page whose draw operations have not been serialised yet.
struct PendingPage {
    width_pt: f32,
    height_pt: f32,
    ops: Vec<Op>,
}

/// Builds the exported PDF from positioned text runs.
///
/// Regular runs use built-in Helvetica, bold runs Helvetica-Bold; widths come
/// from [`HelveticaMetrics`], so measured and drawn widths agree.
pub struct PdfWriter {
    /// Title metadata embedded in the PDF /Info dictionary.
    title: String,
    pages: Vec<PendingPage>,
    serialized: bool,
}

impl PdfWriter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            serialized: false,
        }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new("Readboost Document")
    }
}

fn builtin_font(font: FontStyle) -> BuiltinFont {
    match font {
        FontStyle::Regular => BuiltinFont::Helvetica,
        FontStyle::Bold => BuiltinFont::HelveticaBold,
    }
}

/// printpdf sizes pages in millimetres; layout works in points.
fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

impl TextMeasure for PdfWriter {
    fn measure_width(&self, text: &str, font: FontStyle, size: f32) -> f32 {
        HelveticaMetrics.measure_width(text, font, size)
    }
}

impl RenderBackend for PdfWriter {
    fn add_page(&mut self, width: f32, height: f32) -> Result<PageHandle> {
        if self.serialized {
            return Err(ReadboostError::Render("document already serialised".into()));
        }
        self.pages.push(PendingPage {
            width_pt: width,
            height_pt: height,
            ops: Vec::new(),
        });
        Ok(PageHandle(self.pages.len() - 1))
    }

    fn draw_text(
        &mut self,
        page: PageHandle,
        text: &str,
        font: FontStyle,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()> {
        let page_count = self.pages.len();
        let target = self.pages.get_mut(page.0).ok_or_else(|| {
            ReadboostError::Render(format!(
                "page handle {} out of range (document has {} pages)",
                page.0, page_count
            ))
        })?;

        if let Some(ch) = text.chars().find(|&c| !is_winansi(c)) {
            warn!(text, unsupported = %ch, "Built-in fonts cannot draw this character; output will be garbled");
        }

        target.ops.push(Op::StartTextSection);
        target.ops.push(Op::SetTextCursor {
            pos: Point { x: Pt(x), y: Pt(y) },
        });
        target.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(size),
            font: builtin_font(font),
        });
        target.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: builtin_font(font),
        });
        target.ops.push(Op::EndTextSection);
        Ok(())
    }

    #[instrument(skip(self), fields(title = %self.title, pages = self.pages.len()))]
    fn serialize(&mut self) -> Result<Vec<u8>> {
        if self.serialized {
            return Err(ReadboostError::Render("document already serialised".into()));
        }
        if self.pages.is_empty() {
            return Err(ReadboostError::Render("cannot serialise a document without pages".into()));
        }
        self.serialized = true;

        let mut doc = PdfDocument::new(&self.title);
        let pages: Vec<PdfPage> = std::mem::take(&mut self.pages)
            .into_iter()
            .map(|page| PdfPage::new(pt_to_mm(page.width_pt), pt_to_mm(page.height_pt), page.ops))
            .collect();
        let page_count = pages.len();
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(warnings = warnings.len(), "printpdf save complete");
        info!(pages = page_count, bytes = output.len(), "PDF serialised");
        Ok(output)
    }
}

/// Whether a built-in (WinAnsi-encoded) font has a glyph for `ch`.
fn is_winansi(ch: char) -> bool {
    matches!(ch, ' '..='~' | '\u{A0}'..='\u{FF}')
        || matches!(
            ch,
            '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž' | '‘' | '’' | '“' | '”'
                | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž' | 'Ÿ'
        )
}
