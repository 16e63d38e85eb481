// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Readboost reflow engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a document session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported input document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Pdf,
}

impl DocumentType {
    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
        }
    }

    /// Infer document type from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Text extracted from one page of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    /// Zero-based page position in the source document.
    pub page_index: usize,
    pub text: String,
}

/// A normalized, trimmed, non-empty span of document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    /// Trim `text` and wrap it, or `None` if nothing but whitespace remains.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
            })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whitespace-delimited words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// A contiguous window of paragraphs taken from the session's paragraph pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Excerpt {
    /// Index of the first paragraph within the pool.
    pub start: usize,
    pub paragraphs: Vec<Paragraph>,
}

impl Excerpt {
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraph texts joined by single spaces, words separated by single spaces.
    pub fn cleaned_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.words().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A word split into its bold prefix and regular remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoldSplit {
    pub bold: String,
    pub regular: String,
}

impl BoldSplit {
    /// The word reassembled.
    pub fn word(&self) -> String {
        format!("{}{}", self.bold, self.regular)
    }
}

/// Font weight used for a text run. Measurement and drawing must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    pub fn from_bold(is_bold: bool) -> Self {
        if is_bold { Self::Bold } else { Self::Regular }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold)
    }
}

/// Fixed page geometry in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// US Letter with 50pt margins on every side.
    pub const LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
        margin: 50.0,
    };

    /// Usable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Baseline of the first line on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Metadata recorded about an uploaded source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    pub document_type: DocumentType,
    /// SHA-256 hash of the uploaded bytes, hex encoded.
    pub hash: String,
    pub size: u64,
    pub page_count: usize,
    pub uploaded_at: DateTime<Utc>,
}

impl SourceDocument {
    /// Name of the exported artifact: `enhanced-<stem>.pdf`.
    pub fn export_file_name(&self) -> String {
        let stem = std::path::Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("document");
        format!("enhanced-{stem}.pdf")
    }
}

/// What an export produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub file_name: String,
    pub page_count: usize,
    pub line_count: usize,
    pub byte_len: usize,
    pub created_at: DateTime<Utc>,
}
