//! Plain-text document loading.
//!
//! The pipeline's collaborator for getting text off disk: an extension gate,
//! a permissive byte decoder, and multi-document merging. Binary containers
//! (.docx and friends) are out of scope and rejected at the gate.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// File extensions accepted as plain text.
const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// UTF-8 byte order mark, stripped before decoding.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Errors that can occur when loading a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads a document as plain text.
///
/// # Arguments
///
/// * `path` - Path to a `.txt`, `.text`, or `.md` file
///
/// # Returns
///
/// The decoded text.
///
/// # Errors
///
/// `UnsupportedFormat` for any other extension (including binary containers
/// like `.docx`), `Io` when the file cannot be read.
pub fn load_document(path: &Path) -> Result<String, DocumentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DocumentError::UnsupportedFormat(
            path.display().to_string(),
        ));
    }

    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes))
}

/// Decodes raw bytes into text without failing.
///
/// UTF-8 is tried first, after stripping a byte order mark if present; any
/// non-UTF-8 input falls back to Latin-1, which maps every byte to a
/// character. The decode is total so that arbitrary input degrades to "no
/// citations found" downstream instead of an error.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Merges multiple document texts into one block, separated by blank lines
/// so sentence boundaries never bleed across document edges.
pub fn merge_documents(texts: &[String]) -> String {
    texts
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
