//! The extraction pipeline: sentence selection, matching, deduplication.
//!
//! Ties the segmenter and the pattern set together. In keyword mode, only
//! sentences within one sentence of a keyword hit are scanned (the proximity
//! window); in extract-all mode every sentence is scanned. Either way the
//! resulting citations are deduplicated by canonical key, first seen wins.
//!
//! The pipeline is a pure function of its inputs: no shared mutable state,
//! no I/O, and no failure path — arbitrary text degrades to an empty result,
//! never an error.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;

use crate::citation::dedup_key;
use crate::patterns::PatternSet;
use crate::segmenter::SentenceSegmenter;

/// Whole-word, case-insensitive keyword containment test.
///
/// # Arguments
///
/// * `sentence` - The sentence to search
/// * `keyword` - The keyword, matched as a whole word
pub fn keyword_in_sentence(sentence: &str, keyword: &str) -> bool {
    keyword_matcher(keyword).is_match(sentence)
}

fn keyword_matcher(keyword: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).unwrap()
}

/// Expands keyword-hit indices to the proximity window: every index within
/// distance 1 of a hit, clipped to `[0, len)`, ascending. Out-of-range
/// neighbors are silently dropped; there is no wraparound.
pub fn proximity_window(hits: &[usize], len: usize) -> Vec<usize> {
    let mut allowed = BTreeSet::new();
    for &hit in hits {
        if hit > 0 {
            allowed.insert(hit - 1);
        }
        allowed.insert(hit);
        allowed.insert(hit + 1);
    }
    allowed.into_iter().filter(|&index| index < len).collect()
}

/// The citation extraction pipeline.
///
/// Owns the compiled segmenter and pattern set; both are built once and
/// never mutated, so a single extractor can serve any number of calls,
/// concurrently if desired. The pattern set is injectable for tests that
/// need an alternate rule list.
pub struct CitationExtractor {
    segmenter: SentenceSegmenter,
    patterns: PatternSet,
}

impl CitationExtractor {
    /// Builds an extractor with the default rule list.
    pub fn new() -> Self {
        Self::with_patterns(PatternSet::new())
    }

    /// Builds an extractor around a caller-supplied pattern set.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
            patterns,
        }
    }

    /// Extracts every citation in the text (extract-all mode).
    ///
    /// # Returns
    ///
    /// Deduplicated canonical citations, ordered by sentence then rule
    /// priority within each sentence. Empty when nothing matches.
    pub fn extract_all(&self, text: &str) -> Vec<String> {
        let sentences = self.segmenter.split(text);
        let indices: Vec<usize> = (0..sentences.len()).collect();
        self.collect_citations(&sentences, &indices)
    }

    /// Extracts citations appearing within one sentence of the keyword.
    ///
    /// A keyword with no hits yields an empty result; so does an empty or
    /// blank keyword (callers that consider that a usage error must reject
    /// it before calling).
    ///
    /// # Arguments
    ///
    /// * `text` - The plain text to scan
    /// * `keyword` - Whole-word, case-insensitive search term
    pub fn extract_near_keyword(&self, text: &str, keyword: &str) -> Vec<String> {
        if keyword.trim().is_empty() {
            return Vec::new();
        }

        let sentences = self.segmenter.split(text);
        let matcher = keyword_matcher(keyword);
        let hits: Vec<usize> = sentences
            .iter()
            .enumerate()
            .filter(|(_, sentence)| matcher.is_match(sentence))
            .map(|(index, _)| index)
            .collect();

        let indices = proximity_window(&hits, sentences.len());
        self.collect_citations(&sentences, &indices)
    }

    /// Runs the pattern set over the selected sentences in ascending index
    /// order and deduplicates by canonical key, preserving first-seen order.
    fn collect_citations(&self, sentences: &[String], indices: &[usize]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();

        for &index in indices {
            for citation in self.patterns.extract_from_span(&sentences[index]) {
                if seen.insert(dedup_key(&citation)) {
                    ordered.push(citation);
                }
            }
        }

        ordered
    }
}

impl Default for CitationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: extract-all with a freshly built default extractor.
pub fn extract_all_citations(text: &str) -> Vec<String> {
    CitationExtractor::new().extract_all(text)
}

/// Convenience wrapper: keyword-proximity extraction with a freshly built
/// default extractor.
pub fn extract_citations_near_keyword(text: &str, keyword: &str) -> Vec<String> {
    CitationExtractor::new().extract_near_keyword(text, keyword)
}
