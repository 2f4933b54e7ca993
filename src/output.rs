//! Output rendering for extracted citations.
//!
//! Two renderings: a JSON object with a single `references` array (the
//! machine-readable shape) and a plain one-per-line text listing for
//! terminal use. An empty result is valid output, distinct from an error.

use serde::Serialize;

/// The machine-readable extraction result: `{"references": [...]}`.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    pub references: Vec<String>,
}

impl ExtractionReport {
    pub fn new(references: Vec<String>) -> Self {
        Self { references }
    }
}

/// Renders citations as a JSON report.
///
/// # Returns
///
/// A single-line JSON object; `{"references":[]}` for an empty result.
pub fn render_json(citations: &[String]) -> String {
    let report = ExtractionReport::new(citations.to_vec());
    // A struct of strings cannot fail to serialize.
    serde_json::to_string(&report).unwrap()
}

/// Renders citations as plain text, one per line, trailing newline included
/// when the list is non-empty.
pub fn render_text(citations: &[String]) -> String {
    if citations.is_empty() {
        return String::new();
    }
    let mut out = citations.join("\n");
    out.push('\n');
    out
}
