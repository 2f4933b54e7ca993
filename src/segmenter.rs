//! Sentence segmentation with abbreviation protection.
//!
//! Splits a block of plain text into ordered sentences. Known abbreviations,
//! single-letter initials, and decimal numbers are shielded behind a
//! placeholder character before the boundary scan so that their periods are
//! not mistaken for sentence ends.
//!
//! A boundary is only recognized when the sentence-ending mark is followed by
//! whitespace and an uppercase letter. A sentence-final abbreviation followed
//! by a lowercase continuation is therefore never split; this is intended
//! behavior, not a defect.

use regex::Regex;

/// Placeholder standing in for a protected period during the boundary scan.
/// Private-use codepoint, restored to a literal period afterwards.
const PROTECTED_DOT: char = '\u{F8FF}';

/// Abbreviation tokens whose terminal period must not end a sentence.
///
/// Covers titles (Dr., Mr., Mrs., Ms., Prof.), comparison (vs.), the
/// citation idiom (et al.), Latin abbreviations (i.e., e.g., cf.), and
/// scholarly tokens (Fig., No., Vol., pp., Ed., Eds.). Matching is
/// case-insensitive, so lowercase variants like "fig." are protected too.
/// Longer tokens come before their prefixes (Eds. before Ed., Mrs. before
/// Mr.) so alternation resolves them correctly.
const PROTECTED_ABBREVIATIONS: &[&str] = &[
    "i.e.", "e.g.", "et al.", "Dr.", "Mrs.", "Mr.", "Ms.", "Prof.", "vs.",
    "cf.", "Fig.", "No.", "Vol.", "pp.", "Eds.", "Ed.",
];

/// Regex-backed sentence segmenter.
///
/// All patterns are compiled once at construction; the segmenter is immutable
/// afterwards and safe to share across calls.
pub struct SentenceSegmenter {
    whitespace: Regex,
    abbreviation: Regex,
    initial: Regex,
    decimal: Regex,
    boundary: Regex,
}

impl SentenceSegmenter {
    /// Creates a segmenter with the default protection rules.
    pub fn new() -> Self {
        let alternation = PROTECTED_ABBREVIATIONS
            .iter()
            .map(|abbr| regex::escape(abbr))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            whitespace: Regex::new(r"\s+").unwrap(),
            abbreviation: Regex::new(&format!(r"(?i)\b(?:{})", alternation)).unwrap(),
            // Single-letter initial: "A. B" is an initial, not a sentence end
            initial: Regex::new(r"\b([A-Z])\.(\s+[A-Z])").unwrap(),
            decimal: Regex::new(r"(\d)\.(\d)").unwrap(),
            // Sentence-ending mark, whitespace, uppercase successor
            boundary: Regex::new(r"[.!?]\s+[A-Z]").unwrap(),
        }
    }

    /// Splits text into an ordered list of sentences.
    ///
    /// Whitespace runs are collapsed to single spaces, fragments are trimmed,
    /// and empty fragments are dropped. Degenerate input never fails: an
    /// empty string yields an empty list.
    ///
    /// # Arguments
    ///
    /// * `text` - The plain text to segment
    ///
    /// # Returns
    ///
    /// Sentences in document order, relative positions preserved.
    pub fn split(&self, text: &str) -> Vec<String> {
        let collapsed = self.whitespace.replace_all(text, " ");

        let protected = self
            .abbreviation
            .replace_all(&collapsed, |caps: &regex::Captures| {
                caps[0].replace('.', &PROTECTED_DOT.to_string())
            });
        let protected = self
            .initial
            .replace_all(&protected, format!("${{1}}{PROTECTED_DOT}${{2}}").as_str());
        let protected = self
            .decimal
            .replace_all(&protected, format!("${{1}}{PROTECTED_DOT}${{2}}").as_str())
            .into_owned();

        // Cut after the punctuation mark of every boundary match. The
        // uppercase letter is the last byte of the match and starts the next
        // fragment; the whitespace between them is discarded.
        let mut fragments = Vec::new();
        let mut start = 0;
        for boundary in self.boundary.find_iter(&protected) {
            fragments.push(protected[start..boundary.start() + 1].to_string());
            start = boundary.end() - 1;
        }
        fragments.push(protected[start..].to_string());

        fragments
            .into_iter()
            .map(|fragment| fragment.replace(PROTECTED_DOT, ".").trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: segments text with a freshly built default segmenter.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    SentenceSegmenter::new().split(text)
}
