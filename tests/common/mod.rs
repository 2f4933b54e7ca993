//! Shared test constants and helpers for integration tests.

/// A small paper-like document exercising several citation styles at once:
/// an abbreviation-protected sentence, a parenthetical citation, a grouped
/// parenthetical, a narrative citation, and a keyword ("enzyme") confined to
/// one sentence.
///
/// Sentence layout after segmentation:
///   0: "Dr. Smith reviewed the early literature (Doe, 1999)."
///   1: "Later work expanded the model (Smith, 2010; Jones et al., 2012)."
///   2: "The enzyme assay followed Brown (2015)."
///   3: "Unrelated methods are described elsewhere (White, 2018)."
///   4: "A final remark closes the paper."
pub const SAMPLE_PAPER: &str = "\
Dr. Smith reviewed the early literature (Doe, 1999). \
Later work expanded the model (Smith, 2010; Jones et al., 2012). \
The enzyme assay followed Brown (2015). \
Unrelated methods are described elsewhere (White, 2018). \
A final remark closes the paper.";

/// Build a document from individual sentences, single-space separated, the
/// way the segmenter would see already-normalized prose.
pub fn build_document(sentences: &[&str]) -> String {
    sentences.join(" ")
}
