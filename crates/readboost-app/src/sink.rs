// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-backed download sink for the command-line host.

use std::fs;
use std::path::{Path, PathBuf};

use readboost_core::Result;
use readboost_document::DownloadSink;
use tracing::info;

/// Where a delivered export ends up.
#[derive(Debug)]
enum Target {
    /// Inside this directory, under the export's own file name.
    Directory(PathBuf),
    /// At exactly this path.
    File(PathBuf),
}

/// Writes the delivered document to disk.
///
/// Bytes go to a `.part` file first and are renamed into place, so an
/// interrupted write never leaves a truncated PDF under the final name.
#[derive(Debug)]
pub struct FileSink {
    target: Target,
    written: Option<PathBuf>,
}

impl FileSink {
    /// Resolve the `-o` argument: an existing directory (or a path ending in
    /// a separator) receives the export under its own name, anything else is
    /// taken as the output file. Without `-o`, the input's directory is used.
    pub fn for_output(output: Option<&Path>, input: &Path) -> Self {
        let target = match output {
            Some(path) if path.is_dir() || path.as_os_str().to_string_lossy().ends_with(['/', '\\']) => {
                Target::Directory(path.to_path_buf())
            }
            Some(path) => Target::File(path.to_path_buf()),
            None => Target::Directory(
                input
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(".")),
            ),
        };
        Self { target, written: None }
    }

    /// Path of the last delivered file.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl DownloadSink for FileSink {
    fn deliver(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        let path = match &self.target {
            Target::Directory(dir) => dir.join(file_name),
            Target::File(path) => path.clone(),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut partial = path.clone().into_os_string();
        partial.push(".part");
        fs::write(&partial, &bytes)?;
        fs::rename(&partial, &path).inspect_err(|_| {
            let _ = fs::remove_file(&partial);
        })?;

        info!(path = %path.display(), bytes = bytes.len(), "Export written");
        self.written = Some(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_directory_under_export_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::for_output(Some(dir.path()), Path::new("book.pdf"));
        sink.deliver("enhanced-book.pdf", b"%PDF-1.7".to_vec()).unwrap();

        let expected = dir.path().join("enhanced-book.pdf");
        assert_eq!(sink.written(), Some(expected.as_path()));
        assert_eq!(fs::read(&expected).unwrap(), b"%PDF-1.7");
        assert!(!dir.path().join("enhanced-book.pdf.part").exists());
    }

    #[test]
    fn explicit_file_path_wins_over_export_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("mine.pdf");
        let mut sink = FileSink::for_output(Some(&out), Path::new("book.pdf"));
        sink.deliver("enhanced-book.pdf", vec![1, 2, 3]).unwrap();
        assert_eq!(fs::read(&out).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn failed_rename_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let out = dir.path().join("taken.pdf");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("keep"), b"x").unwrap();

        let mut sink = FileSink {
            target: Target::File(out.clone()),
            written: None,
        };
        assert!(sink.deliver("enhanced-book.pdf", vec![1, 2, 3]).is_err());
        assert!(!dir.path().join("taken.pdf.part").exists());
        assert!(sink.written().is_none());
    }

    #[test]
    fn defaults_to_input_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("book.pdf");
        let mut sink = FileSink::for_output(None, &input);
        sink.deliver("enhanced-book.pdf", vec![0]).unwrap();
        assert!(dir.path().join("enhanced-book.pdf").exists());
    }
}
