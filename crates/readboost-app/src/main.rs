// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Readboost — bolded reflow of PDF excerpts for faster reading
//
// Entry point. Initialises logging, parses the command line and runs the
// preview or export pipeline over a single document session.

mod cli;
mod sink;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use readboost_core::config::MAX_UPLOAD_BYTES;
use readboost_core::human_errors::humanize_error;
use readboost_core::{ReadboostError, Result, SessionSettings};
use readboost_document::{CancelToken, DocumentSession, PdfWriter, PreviewMode};

use cli::{Cli, Command};
use sink::FileSink;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "readboost failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Preview { input, full, json, style } => {
            let session = open_session(&input, style.settings(), style.seed)?;
            let mode = if full { PreviewMode::Full } else { PreviewMode::Excerpt };
            let preview = session.preview(mode)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                println!("{}", preview.to_markdown());
            }
            tracing::info!(words = preview.word_count(), rule = %preview.rule_label(), "Preview printed");
            Ok(())
        }
        Command::Export { input, output, style } => {
            let session = open_session(&input, style.settings(), style.seed)?;
            let title = session
                .source()
                .map(|s| s.name)
                .unwrap_or_else(|| "Readboost Document".to_string());

            let mut writer = PdfWriter::new(title);
            let mut sink = FileSink::for_output(output.as_deref(), &input);
            let summary = session.export(&mut writer, &mut sink, &CancelToken::new())?;

            let path = sink.written().unwrap_or_else(|| Path::new(&summary.file_name));
            println!(
                "{} ({} pages, {} lines, {} bytes)",
                path.display(),
                summary.page_count,
                summary.line_count,
                summary.byte_len
            );
            Ok(())
        }
    }
}

/// Read `input` and open it in a fresh session with `settings`.
fn open_session(input: &Path, settings: SessionSettings, seed: Option<u64>) -> Result<DocumentSession> {
    let session = DocumentSession::with_settings(Default::default(), settings)?;
    check_upload_size(input)?;
    let bytes = std::fs::read(input)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let source = session.open(&name, &bytes, &mut rng)?;
    tracing::info!(session = %session.id(), pages = source.page_count, hash = %source.hash, "Document loaded");
    Ok(session)
}

/// Refuse oversized inputs before reading them into memory.
fn check_upload_size(input: &Path) -> Result<()> {
    let size = std::fs::metadata(input)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(ReadboostError::FileTooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}
