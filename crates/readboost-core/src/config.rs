// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session settings exposed to the host UI.
//
// Everything here is in-memory and session-scoped. There is no file or
// environment configuration for the engine.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ReadboostError, Result};

/// Host range for every bolding tier.
pub const BOLD_LETTERS_RANGE: RangeInclusive<usize> = 1..=5;
/// Host range for the font size, in points.
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 12.0..=24.0;
/// Host range for the line-spacing multiplier.
pub const LINE_SPACING_RANGE: RangeInclusive<f32> = 1.0..=3.0;
/// Largest upload accepted by a session (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// How the bold-prefix length of a word is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoldingMethod {
    /// Tiered by word length (short / medium / long).
    #[default]
    Proportional,
    /// Every word gets `short_words` letters.
    Fixed,
    /// Every word gets its first letter only.
    FirstLetter,
}

/// Bold-prefix lengths for the three word-length tiers.
///
/// Tiers are non-decreasing by convention, but this is not enforced:
/// [`BoldingConfig::from_letters`] itself produces `short > medium` for
/// slider values above 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoldingConfig {
    /// Words of at most 3 letters.
    pub short_words: usize,
    /// Words of 4 to 6 letters.
    pub medium_words: usize,
    /// Words longer than 6 letters.
    pub long_words: usize,
    pub method: BoldingMethod,
}

impl BoldingConfig {
    pub fn new(short_words: usize, medium_words: usize, long_words: usize) -> Self {
        Self {
            short_words,
            medium_words,
            long_words,
            method: BoldingMethod::Proportional,
        }
    }

    /// Derive all three tiers from the single "letters to bold" slider.
    pub fn from_letters(letters: usize) -> Self {
        Self::new(letters, (letters + 1).min(3), (letters + 2).min(5))
    }

    pub fn with_method(mut self, method: BoldingMethod) -> Self {
        self.method = method;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("short_words", self.short_words),
            ("medium_words", self.medium_words),
            ("long_words", self.long_words),
        ] {
            if !BOLD_LETTERS_RANGE.contains(&value) {
                return Err(ReadboostError::InvalidConfig(format!(
                    "{name} must be between {} and {}, got {value}",
                    BOLD_LETTERS_RANGE.start(),
                    BOLD_LETTERS_RANGE.end()
                )));
            }
        }
        Ok(())
    }
}

impl Default for BoldingConfig {
    fn default() -> Self {
        Self::new(1, 2, 3)
    }
}

/// Horizontal alignment of reflowed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Runs are placed back to back from the left margin.
    #[default]
    Left,
    /// Leftover width is spread across word gaps, except on the last line
    /// of a paragraph.
    Justify,
}

/// Typography settings shared by reflow and pagination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Font size in points.
    pub font_size: f32,
    /// Multiplier applied to the font size for the line advance.
    pub line_spacing: f32,
    pub alignment: Alignment,
}

impl LayoutConfig {
    pub fn new(font_size: f32, line_spacing: f32) -> Self {
        Self {
            font_size,
            line_spacing,
            alignment: Alignment::Left,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Vertical advance between two lines of the same paragraph.
    pub fn line_advance(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    /// Vertical advance after the last line of a paragraph.
    pub fn paragraph_gap(&self) -> f32 {
        self.line_spacing * self.font_size * 1.5
    }

    pub fn validate(&self) -> Result<()> {
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(ReadboostError::InvalidConfig(format!(
                "font size must be between {} and {}, got {}",
                FONT_SIZE_RANGE.start(),
                FONT_SIZE_RANGE.end(),
                self.font_size
            )));
        }
        if !LINE_SPACING_RANGE.contains(&self.line_spacing) {
            return Err(ReadboostError::InvalidConfig(format!(
                "line spacing must be between {} and {}, got {}",
                LINE_SPACING_RANGE.start(),
                LINE_SPACING_RANGE.end(),
                self.line_spacing
            )));
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(16.0, 1.5)
    }
}

/// Paragraph filtering and excerpt window size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptConfig {
    /// Paragraph fragments shorter than this (in characters) are dropped.
    pub min_paragraph_len: usize,
    /// Inclusive range the excerpt size is drawn from.
    pub count_range: RangeInclusive<usize>,
}

impl ExcerptConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count_range.is_empty() || *self.count_range.start() == 0 {
            return Err(ReadboostError::InvalidConfig(format!(
                "excerpt range must be non-empty and start at 1 or more, got {:?}",
                self.count_range
            )));
        }
        Ok(())
    }
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            min_paragraph_len: 80,
            count_range: 3..=5,
        }
    }
}

/// All settings a host can tune for one document session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub bolding: BoldingConfig,
    pub layout: LayoutConfig,
    pub excerpt: ExcerptConfig,
}

impl SessionSettings {
    /// Restore every setting to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<()> {
        self.bolding.validate()?;
        self.layout.validate()?;
        self.excerpt.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_derivation_caps_medium_and_long() {
        assert_eq!(BoldingConfig::from_letters(1), BoldingConfig::new(1, 2, 3));
        assert_eq!(BoldingConfig::from_letters(2), BoldingConfig::new(2, 3, 4));
        assert_eq!(BoldingConfig::from_letters(4), BoldingConfig::new(4, 3, 5));
        assert_eq!(BoldingConfig::from_letters(5), BoldingConfig::new(5, 3, 5));
    }

    #[test]
    fn bolding_tiers_outside_host_range_are_rejected() {
        assert!(BoldingConfig::new(1, 2, 3).validate().is_ok());
        assert!(BoldingConfig::new(0, 2, 3).validate().is_err());
        assert!(BoldingConfig::new(1, 2, 6).validate().is_err());
    }

    #[test]
    fn layout_ranges() {
        assert!(LayoutConfig::new(12.0, 1.0).validate().is_ok());
        assert!(LayoutConfig::new(24.0, 3.0).validate().is_ok());
        assert!(LayoutConfig::new(11.0, 1.5).validate().is_err());
        assert!(LayoutConfig::new(16.0, 3.5).validate().is_err());
    }

    #[test]
    fn paragraph_gap_is_one_and_a_half_lines() {
        let layout = LayoutConfig::new(20.0, 1.5);
        assert!((layout.line_advance() - 30.0).abs() < f32::EPSILON);
        assert!((layout.paragraph_gap() - 45.0).abs() < f32::EPSILON);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut settings = SessionSettings::default();
        settings.bolding = BoldingConfig::from_letters(4).with_method(BoldingMethod::Fixed);
        settings.layout = LayoutConfig::new(22.0, 2.0).with_alignment(Alignment::Justify);
        settings.reset();
        assert_eq!(settings, SessionSettings::default());
    }

    #[test]
    fn empty_excerpt_range_is_rejected() {
        let cfg = ExcerptConfig {
            min_paragraph_len: 80,
            count_range: 0..=5,
        };
        assert!(cfg.validate().is_err());
        assert!(ExcerptConfig::default().validate().is_ok());
    }
}
