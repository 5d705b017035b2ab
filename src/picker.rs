// File selection: turning a path chosen by the user into an in-memory
// `SelectedFile`. The native dialog comes from `rfd`; when there is no
// desktop (ssh, CI) the user can type a path instead.

use crate::error::SelectError;
use anyhow::Result;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// A local file the user picked, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
    pub mime: String,
}

impl SelectedFile {
    /// Read `path` and infer the upload name and mime type from it.
    /// No size or type checks: whatever the user picked is uploaded.
    pub fn from_path(path: &Path) -> Result<Self, SelectError> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SelectError::NoFileName(path.to_path_buf()))?
            .to_string();
        let content = std::fs::read(path).map_err(|source| SelectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mime = mime_for(path).to_string();
        Ok(SelectedFile { name, content, mime })
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Mime type by extension, for the handful of document types the parser
/// is usually fed.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("odt") => "application/vnd.oasis.opendocument.text",
        Some("rtf") => "application/rtf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// How the user chooses a file.
#[derive(Debug, Clone, Copy)]
pub struct FilePicker {
    use_dialog: bool,
}

impl FilePicker {
    pub fn new(use_dialog: bool) -> Self {
        FilePicker { use_dialog }
    }

    /// Ask for a path. `None` means the user cancelled.
    pub fn pick(&self) -> Result<Option<PathBuf>> {
        if self.use_dialog {
            let start = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            let picked = rfd::FileDialog::new()
                .set_title("Choose a file to parse")
                .set_directory(start)
                .pick_file();
            return Ok(picked);
        }

        let typed: String = Input::new()
            .with_prompt("File path (empty to cancel)")
            .allow_empty(true)
            .interact_text()?;
        let typed = typed.trim();
        if typed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(typed)))
        }
    }
}
