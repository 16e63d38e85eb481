// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line reflow — pack bolded words into lines that fit the page's content
// width, using measured glyph widths rather than character counts.
//
// Every word becomes an optional bold run followed by exactly one regular
// run. The regular run's width includes the trailing separator space, so
// placing runs back to back reproduces the gap between words. Words are
// never split across lines; a word wider than the content width sits alone
// on its line and overflows.

use rayon::prelude::*;
use readboost_core::{Alignment, BoldingConfig, Excerpt, FontStyle, LayoutConfig, PageGeometry, Paragraph};
use serde::Serialize;
use tracing::debug;

use crate::render::TextMeasure;
use crate::text::split_word;

/// A styled span of text with its measured width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub is_bold: bool,
    /// Advance width in points. For regular runs this includes the separator
    /// space that follows the word.
    pub width: f32,
}

impl TextRun {
    pub fn font(&self) -> FontStyle {
        FontStyle::from_bold(self.is_bold)
    }
}

/// One reflowed line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
    pub runs: Vec<TextRun>,
    /// Sum of run widths, separator spaces included.
    pub width: f32,
    pub word_count: usize,
    /// Position of the source paragraph within the excerpt.
    pub paragraph: usize,
    /// Last line of its paragraph; the paginator leaves a paragraph gap after
    /// it when another line follows.
    pub last_in_paragraph: bool,
    /// Extra space added after each word but the last when justifying.
    pub word_gap: f32,
}

/// Reflow every paragraph of `excerpt` into lines.
///
/// Paragraphs are measured in parallel; the result is in paragraph order.
///
/// # Panics
///
/// If `layout.font_size` is not positive.
pub fn reflow<M: TextMeasure + ?Sized>(
    excerpt: &Excerpt,
    cfg: &BoldingConfig,
    layout: &LayoutConfig,
    geometry: &PageGeometry,
    measure: &M,
) -> Vec<Line> {
    assert!(layout.font_size > 0.0, "font size must be positive, got {}", layout.font_size);

    let content_width = geometry.content_width();
    let lines: Vec<Line> = excerpt
        .paragraphs
        .par_iter()
        .enumerate()
        .map(|(index, paragraph)| reflow_paragraph(index, paragraph, cfg, layout, content_width, measure))
        .collect::<Vec<Vec<Line>>>()
        .into_iter()
        .flatten()
        .collect();

    debug!(
        paragraphs = excerpt.len(),
        lines = lines.len(),
        content_width,
        "Reflow complete"
    );
    lines
}

/// Split a word and measure its runs.
fn word_runs<M: TextMeasure + ?Sized>(
    word: &str,
    cfg: &BoldingConfig,
    font_size: f32,
    measure: &M,
) -> Vec<TextRun> {
    let split = split_word(word, cfg);
    let mut runs = Vec::with_capacity(2);
    if !split.bold.is_empty() {
        let width = measure.measure_width(&split.bold, FontStyle::Bold, font_size);
        runs.push(TextRun {
            text: split.bold,
            is_bold: true,
            width,
        });
    }
    let width = measure.measure_width(&format!("{} ", split.regular), FontStyle::Regular, font_size);
    runs.push(TextRun {
        text: split.regular,
        is_bold: false,
        width,
    });
    runs
}

fn reflow_paragraph<M: TextMeasure + ?Sized>(
    index: usize,
    paragraph: &Paragraph,
    cfg: &BoldingConfig,
    layout: &LayoutConfig,
    content_width: f32,
    measure: &M,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line {
        paragraph: index,
        ..Line::default()
    };

    for word in paragraph.words() {
        let runs = word_runs(word, cfg, layout.font_size, measure);
        let word_width: f32 = runs.iter().map(|r| r.width).sum();

        if current.word_count > 0 && current.width + word_width > content_width {
            let next = Line {
                paragraph: index,
                ..Line::default()
            };
            lines.push(std::mem::replace(&mut current, next));
        }

        current.width += word_width;
        current.word_count += 1;
        current.runs.extend(runs);
    }

    if current.word_count > 0 {
        lines.push(current);
    }
    if let Some(last) = lines.last_mut() {
        last.last_in_paragraph = true;
    }

    if layout.alignment == Alignment::Justify {
        let space = measure.measure_width(" ", FontStyle::Regular, layout.font_size);
        for line in lines.iter_mut().filter(|l| !l.last_in_paragraph && l.word_count > 1) {
            // The trailing space of the last word is not visible ink.
            let slack = content_width - (line.width - space);
            line.word_gap = (slack / (line.word_count - 1) as f32).max(0.0);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::HelveticaMetrics;
    use proptest::prelude::*;

    /// Every character is `unit` points wide regardless of font and size.
    struct Monospace {
        unit: f32,
    }

    impl TextMeasure for Monospace {
        fn measure_width(&self, text: &str, _font: FontStyle, _size: f32) -> f32 {
            text.chars().count() as f32 * self.unit
        }
    }

    fn excerpt(texts: &[&str]) -> Excerpt {
        Excerpt {
            start: 0,
            paragraphs: texts.iter().map(|t| Paragraph::new(t).unwrap()).collect(),
        }
    }

    fn line_text(line: &Line) -> String {
        let mut words = Vec::new();
        let mut word = String::new();
        for run in &line.runs {
            word.push_str(&run.text);
            if !run.is_bold {
                words.push(std::mem::take(&mut word));
            }
        }
        words.join(" ")
    }

    #[test]
    fn word_that_overflows_starts_a_new_line() {
        // First word is 509 letters + space = 510pt; "abcd " is 5pt more.
        let long = "x".repeat(509);
        let text = format!("{long} abcd");
        let lines = reflow(
            &excerpt(&[text.as_str()]),
            &BoldingConfig::default(),
            &LayoutConfig::default(),
            &PageGeometry::LETTER,
            &Monospace { unit: 1.0 },
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width, 510.0);
        assert_eq!(line_text(&lines[1]), "abcd");
    }

    #[test]
    fn word_that_exactly_fills_the_line_stays() {
        // 507 letters + space = 508pt; "abc " brings it to exactly 512pt.
        let long = "x".repeat(507);
        let text = format!("{long} abc");
        let lines = reflow(
            &excerpt(&[text.as_str()]),
            &BoldingConfig::default(),
            &LayoutConfig::default(),
            &PageGeometry::LETTER,
            &Monospace { unit: 1.0 },
        );
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, 512.0);
    }

    #[test]
    fn over_wide_word_sits_alone() {
        let huge = "y".repeat(600);
        let text = format!("tiny {huge} end");
        let lines = reflow(
            &excerpt(&[text.as_str()]),
            &BoldingConfig::default(),
            &LayoutConfig::default(),
            &PageGeometry::LETTER,
            &Monospace { unit: 1.0 },
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].word_count, 1);
        assert!(lines[1].width > PageGeometry::LETTER.content_width());
    }

    #[test]
    fn runs_carry_bold_prefix_and_spaced_remainder() {
        let lines = reflow(
            &excerpt(&["jumps"]),
            &BoldingConfig::new(1, 2, 3),
            &LayoutConfig::default(),
            &PageGeometry::LETTER,
            &Monospace { unit: 2.0 },
        );
        let runs = &lines[0].runs;
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].text.as_str(), runs[0].is_bold, runs[0].width), ("ju", true, 4.0));
        // "mps" plus the separator space.
        assert_eq!((runs[1].text.as_str(), runs[1].is_bold, runs[1].width), ("mps", false, 8.0));
    }

    #[test]
    fn fully_bold_word_keeps_an_empty_regular_run_for_the_gap() {
        let lines = reflow(
            &excerpt(&["a b"]),
            &BoldingConfig::new(1, 2, 3),
            &LayoutConfig::default(),
            &PageGeometry::LETTER,
            &Monospace { unit: 1.0 },
        );
        let runs = &lines[0].runs;
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[1].text, "");
        assert_eq!(runs[1].width, 1.0);
    }

    #[test]
    fn paragraphs_are_marked_and_ordered() {
        let lines = reflow(
            &excerpt(&["first paragraph here.", "second one.", "third."]),
            &BoldingConfig::default(),
            &LayoutConfig::default(),
            &PageGeometry::LETTER,
            &HelveticaMetrics,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().map(|l| l.paragraph).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(lines.iter().all(|l| l.last_in_paragraph));
    }

    #[test]
    fn justify_spreads_slack_except_on_last_line() {
        let text = (0..200).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let layout = LayoutConfig::default().with_alignment(Alignment::Justify);
        let measure = Monospace { unit: 5.0 };
        let lines = reflow(&excerpt(&[text.as_str()]), &BoldingConfig::default(), &layout, &PageGeometry::LETTER, &measure);
        assert!(lines.len() > 1);

        let first = &lines[0];
        let visible = first.width - 5.0 + first.word_gap * (first.word_count - 1) as f32;
        assert!((visible - 512.0).abs() < 1e-2, "justified width {visible}");
        assert_eq!(lines.last().unwrap().word_gap, 0.0);
    }

    #[test]
    fn round_trip_reproduces_cleaned_text() {
        let ex = excerpt(&[
            "The quick brown fox jumps over the lazy dog while readers skim every line.",
            "Readability depends on content and presentation for every reader of text.",
        ]);
        let lines = reflow(&ex, &BoldingConfig::new(2, 3, 4), &LayoutConfig::new(24.0, 1.0), &PageGeometry::LETTER, &HelveticaMetrics);
        let joined = lines.iter().map(line_text).collect::<Vec<_>>().join(" ");
        assert_eq!(joined, ex.cleaned_text());
    }

    #[test]
    #[should_panic(expected = "font size must be positive")]
    fn non_positive_font_size_is_a_programming_error() {
        reflow(
            &excerpt(&["word"]),
            &BoldingConfig::default(),
            &LayoutConfig::new(0.0, 1.5),
            &PageGeometry::LETTER,
            &HelveticaMetrics,
        );
    }

    proptest! {
        #[test]
        fn lines_fit_unless_single_over_wide_word(
            words in prop::collection::vec("[a-zA-Z]{1,40}", 1..120),
            font_size in 12.0f32..=24.0,
        ) {
            let text = words.join(" ");
            let lines = reflow(
                &excerpt(&[text.as_str()]),
                &BoldingConfig::default(),
                &LayoutConfig::new(font_size, 1.5),
                &PageGeometry::LETTER,
                &HelveticaMetrics,
            );
            for line in &lines {
                prop_assert!(line.width <= 512.0 || line.word_count == 1);
            }
            let total: usize = lines.iter().map(|l| l.word_count).sum();
            prop_assert_eq!(total, words.len());
        }
    }
}
