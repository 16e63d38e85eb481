// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Readboost.

use thiserror::Error;

/// Top-level error type for all Readboost operations.
///
/// Only the adapters (extraction, rendering) and the session layer produce
/// these. Segmentation, bolding, reflow and pagination are total functions
/// over well-formed input and never return an error.
#[derive(Debug, Error)]
pub enum ReadboostError {
    // -- Upload / extraction --
    #[error("unsupported document type: {0}")]
    UnsupportedDocument(String),

    #[error("document is too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("document contains no readable paragraphs")]
    EmptyDocument,

    // -- Export --
    #[error("rendering failed: {0}")]
    Render(String),

    #[error("export cancelled")]
    Cancelled,

    // -- Session --
    #[error("another operation is already running on this document")]
    OperationInProgress,

    #[error("invalid setting: {0}")]
    InvalidConfig(String),

    // -- Host I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ReadboostError>;
