// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for hosts.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how a host presents it; an empty document is an
// informational "nothing to show" state rather than a failure.

use crate::config::MAX_UPLOAD_BYTES;
use crate::error::ReadboostError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing went wrong; there is simply nothing to display.
    Informational,
    /// Retrying the same action may succeed.
    Transient,
    /// User must do something (pick another file, change a setting).
    ActionRequired,
    /// Cannot be fixed by retrying.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the host may offer to run the whole operation again.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `ReadboostError` into a `HumanError` for display.
pub fn humanize_error(err: &ReadboostError) -> HumanError {
    match err {
        // -- Upload / extraction --
        ReadboostError::UnsupportedDocument(detail) => HumanError {
            message: "This type of document isn't supported.".into(),
            suggestion: format!("Save the file as a PDF first, then upload the PDF. (File: {detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ReadboostError::FileTooLarge { .. } => HumanError {
            message: "This file is too large.".into(),
            suggestion: format!(
                "The maximum size is {} MB. Try splitting the document into smaller parts.",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ReadboostError::Extraction(detail) => humanize_extraction_error(detail),

        ReadboostError::EmptyDocument => HumanError {
            message: "There's nothing to show for this document.".into(),
            suggestion: "We couldn't find any paragraphs of text. Scanned pages and images can't be read; try a PDF that contains selectable text.".into(),
            retriable: false,
            severity: Severity::Informational,
        },

        // -- Export --
        ReadboostError::Render(_) => HumanError {
            message: "The enhanced PDF couldn't be created.".into(),
            suggestion: "Your preview is unchanged. Try exporting again, or pick different settings.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ReadboostError::Cancelled => HumanError {
            message: "Export cancelled.".into(),
            suggestion: "Nothing was saved. Start the export again whenever you're ready.".into(),
            retriable: true,
            severity: Severity::Informational,
        },

        // -- Session --
        ReadboostError::OperationInProgress => HumanError {
            message: "We're still working on your last request.".into(),
            suggestion: "Wait for it to finish, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ReadboostError::InvalidConfig(detail) => HumanError {
            message: "That setting isn't allowed.".into(),
            suggestion: format!("Pick a value within the slider range. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Host I/O --
        ReadboostError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "We don't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or choose a different location.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        ReadboostError::Serialization(_) => HumanError {
            message: "We had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

/// Parse extraction failure details into human-readable messages.
fn humanize_extraction_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("encrypt") || lower.contains("password") {
        HumanError {
            message: "This PDF is password protected.".into(),
            suggestion: "Open it in a PDF viewer, save an unprotected copy, and upload that instead.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else {
        HumanError {
            message: "There's a problem with this PDF file.".into(),
            suggestion: "The file may be damaged. Try opening it in a PDF viewer to check it works, or try a different file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_informational() {
        let human = humanize_error(&ReadboostError::EmptyDocument);
        assert_eq!(human.severity, Severity::Informational);
        assert!(!human.retriable);
    }

    #[test]
    fn encrypted_pdf_is_action_required() {
        let err = ReadboostError::Extraction("document is encrypted".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn malformed_pdf_is_permanent() {
        let err = ReadboostError::Extraction("invalid file header".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }

    #[test]
    fn render_failure_is_retriable() {
        let human = humanize_error(&ReadboostError::Render("page handle 3 out of range".into()));
        assert!(human.retriable);
        assert_eq!(human.severity, Severity::Transient);
    }

    #[test]
    fn too_large_mentions_limit() {
        let human = humanize_error(&ReadboostError::FileTooLarge {
            size: 20 * 1024 * 1024,
            limit: MAX_UPLOAD_BYTES,
        });
        assert!(human.suggestion.contains("10 MB"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = ReadboostError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
