// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory render backend that records every call. Serialises to a plain
// text listing of the draw calls, one per line.

use std::fmt::Write as _;

use readboost_core::FontStyle;
use readboost_core::error::{ReadboostError, Result};

use super::dispatch::DrawInstruction;
use super::{PageHandle, RenderBackend, TextMeasure};
use crate::pdf::HelveticaMetrics;

#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// (width, height) of every page added.
    pub pages: Vec<(f32, f32)>,
    pub draws: Vec<DrawInstruction>,
    pub serialize_calls: usize,
}

impl RecordingBackend {
    /// Draws on the given zero-based page.
    pub fn draws_on(&self, page: usize) -> impl Iterator<Item = &DrawInstruction> {
        self.draws.iter().filter(move |d| d.page == page)
    }
}

impl TextMeasure for RecordingBackend {
    fn measure_width(&self, text: &str, font: FontStyle, size: f32) -> f32 {
        HelveticaMetrics.measure_width(text, font, size)
    }
}

impl RenderBackend for RecordingBackend {
    fn add_page(&mut self, width: f32, height: f32) -> Result<PageHandle> {
        self.pages.push((width, height));
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
        if page.0 >= self.pages.len() {
            return Err(ReadboostError::Render(format!("no page {}", page.0)));
        }
        self.draws.push(DrawInstruction {
            page: page.0,
            text: text.to_string(),
            font,
            x,
            y,
            size,
        });
        Ok(())
    }

    fn serialize(&mut self) -> Result<Vec<u8>> {
        self.serialize_calls += 1;
        let mut out = String::new();
        for (index, (width, height)) in self.pages.iter().enumerate() {
            let _ = writeln!(out, "page {} {width}x{height}", index + 1);
            for d in self.draws_on(index) {
                let weight = if d.font.is_bold() { "B" } else { "R" };
                let _ = writeln!(out, "  {weight} {:.2} {:.2} {} {:?}", d.x, d.y, d.size, d.text);
            }
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_lists_draws() {
        let mut backend = RecordingBackend::default();
        let page = backend.add_page(612.0, 792.0).unwrap();
        backend.draw_text(page, "Re", FontStyle::Bold, 16.0, 50.0, 742.0).unwrap();
        backend.draw_text(page, "ading", FontStyle::Regular, 16.0, 72.0, 742.0).unwrap();

        let dump = String::from_utf8(backend.serialize().unwrap()).unwrap();
        assert_eq!(
            dump,
            "page 1 612x792\n  B 50.00 742.00 16 \"Re\"\n  R 72.00 742.00 16 \"ading\"\n"
        );
        assert_eq!(backend.serialize_calls, 1);
    }

    #[test]
    fn drawing_on_missing_page_fails() {
        let mut backend = RecordingBackend::default();
        let err = backend
            .draw_text(PageHandle(0), "x", FontStyle::Regular, 12.0, 0.0, 0.0)
            .unwrap_err();
        assert!(matches!(err, ReadboostError::Render(_)));
    }
}
