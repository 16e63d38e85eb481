// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments and their mapping onto session settings.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use readboost_core::{Alignment, BoldingConfig, BoldingMethod, ExcerptConfig, LayoutConfig, SessionSettings};

#[derive(Debug, Parser)]
#[command(name = "readboost")]
#[command(version)]
#[command(about = "Re-typeset a PDF excerpt with bolded word beginnings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a bolded preview of an excerpt (Markdown, or JSON with --json)
    Preview {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Preview every paragraph instead of a short excerpt
        #[arg(long)]
        full: bool,

        /// Emit the preview as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Write the bolded excerpt to a new PDF
    Export {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file or directory (defaults to the input's directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Proportional,
    Fixed,
    FirstLetter,
}

impl From<MethodArg> for BoldingMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Proportional => Self::Proportional,
            MethodArg::Fixed => Self::Fixed,
            MethodArg::FirstLetter => Self::FirstLetter,
        }
    }
}

/// Bolding, typography and excerpt options shared by both subcommands.
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// Letters to bold; derives all three word-length tiers
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub letters: Option<u8>,

    /// Bold letters for words of up to 3 letters
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub short: Option<u8>,

    /// Bold letters for words of 4 to 6 letters
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub medium: Option<u8>,

    /// Bold letters for words longer than 6 letters
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub long: Option<u8>,

    /// How the bold prefix length is chosen
    #[arg(long, value_enum, default_value = "proportional")]
    pub method: MethodArg,

    /// Font size in points (12-24)
    #[arg(long, default_value = "16")]
    pub font_size: f32,

    /// Line spacing multiplier (1.0-3.0)
    #[arg(long, default_value = "1.5")]
    pub line_spacing: f32,

    /// Justify lines instead of aligning them left
    #[arg(long)]
    pub justify: bool,

    /// Minimum paragraph length in characters
    #[arg(long, value_name = "CHARS", default_value = "80")]
    pub min_length: usize,

    /// Seed for excerpt selection, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl StyleArgs {
    /// Build session settings. `--letters` sets the tiers first; explicit
    /// `--short`/`--medium`/`--long` then override individual tiers.
    pub fn settings(&self) -> SessionSettings {
        let mut bolding = self
            .letters
            .map(|v| BoldingConfig::from_letters(usize::from(v)))
            .unwrap_or_default();
        if let Some(v) = self.short {
            bolding.short_words = usize::from(v);
        }
        if let Some(v) = self.medium {
            bolding.medium_words = usize::from(v);
        }
        if let Some(v) = self.long {
            bolding.long_words = usize::from(v);
        }

        let alignment = if self.justify { Alignment::Justify } else { Alignment::Left };

        SessionSettings {
            bolding: bolding.with_method(self.method.into()),
            layout: LayoutConfig::new(self.font_size, self.line_spacing).with_alignment(alignment),
            excerpt: ExcerptConfig {
                min_paragraph_len: self.min_length,
                ..ExcerptConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(args: &[&str]) -> StyleArgs {
        let mut argv = vec!["readboost", "preview", "book.pdf"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Preview { style, .. } => style,
            Command::Export { .. } => unreachable!(),
        }
    }

    #[test]
    fn defaults_match_session_defaults() {
        assert_eq!(style(&[]).settings(), SessionSettings::default());
    }

    #[test]
    fn letters_then_explicit_tiers() {
        let settings = style(&["--letters", "2", "--long", "5"]).settings();
        assert_eq!(settings.bolding, BoldingConfig::new(2, 3, 5));
    }

    #[test]
    fn layout_and_method_flags() {
        let settings = style(&[
            "--font-size",
            "20",
            "--line-spacing",
            "2",
            "--justify",
            "--method",
            "first-letter",
            "--min-length",
            "40",
        ])
        .settings();
        assert_eq!(settings.layout.font_size, 20.0);
        assert_eq!(settings.layout.line_spacing, 2.0);
        assert_eq!(settings.layout.alignment, Alignment::Justify);
        assert_eq!(settings.bolding.method, BoldingMethod::FirstLetter);
        assert_eq!(settings.excerpt.min_paragraph_len, 40);
    }

    #[test]
    fn tier_out_of_range_is_a_usage_error() {
        assert!(Cli::try_parse_from(["readboost", "preview", "a.pdf", "--short", "9"]).is_err());
    }

    #[test]
    fn export_takes_an_output_path() {
        let cli = Cli::try_parse_from(["readboost", "export", "a.pdf", "-o", "out/", "--seed", "3"]).unwrap();
        match cli.command {
            Command::Export { output, style, .. } => {
                assert_eq!(output, Some(PathBuf::from("out/")));
                assert_eq!(style.seed, Some(3));
            }
            Command::Preview { .. } => panic!("expected export"),
        }
    }
}
