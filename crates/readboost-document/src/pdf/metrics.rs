// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Advance widths for the built-in Helvetica and Helvetica-Bold fonts, taken
// from the Adobe Core 14 AFM files (units of 1/1000 em).

use readboost_core::FontStyle;
use unicode_normalization::UnicodeNormalization;

use crate::render::TextMeasure;

/// Printable ASCII, 0x20 through 0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9 : ; < = > ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // @ A-O
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // P-Z [ \ ] ^ _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // ` a-o
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // p-z { | } ~
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for glyphs outside the tables.
///
/// The built-in fonts only cover WinAnsi; scripts such as Cyrillic or CJK are
/// measured at this width but cannot be drawn faithfully by the PDF writer,
/// which logs a warning when it meets them.
const FALLBACK_WIDTH: u16 = 556;

/// Glyph metrics of the two fonts the PDF writer draws with.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    /// Width of a single character in 1/1000 em.
    pub fn char_width(ch: char, font: FontStyle) -> u16 {
        let table = match font {
            FontStyle::Regular => &HELVETICA,
            FontStyle::Bold => &HELVETICA_BOLD,
        };
        match ch {
            ' '..='~' => table[ch as usize - 0x20],
            '¡' => 333,
            '¿' => 611,
            // Combining marks are drawn over the preceding letter.
            c if is_combining(c) => 0,
            c if c.is_whitespace() => table[0],
            // Accented letters take the width of their base letter.
            c => c
                .nfd()
                .next()
                .filter(|base| (' '..='~').contains(base))
                .map(|base| table[base as usize - 0x20])
                .unwrap_or(FALLBACK_WIDTH),
        }
    }
}

fn is_combining(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}' | '\u{20D0}'..='\u{20FF}' | '\u{FE20}'..='\u{FE2F}')
}

impl TextMeasure for HelveticaMetrics {
    fn measure_width(&self, text: &str, font: FontStyle, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| u32::from(Self::char_width(ch, font))).sum();
        units as f32 * size / 1000.0
    }
}
