//! citegrep: extraction of in-text academic citations from plain text.
//!
//! This library provides functionality to:
//! - Segment plain text into sentences with abbreviation protection
//! - Recognize in-text citations with an ordered set of pattern rules
//! - Decompose grouped parentheticals like `(Smith, 2010; Jones et al., 2012)`
//! - Restrict results to citations near a keyword and deduplicate them
//! - Load plain-text documents and render results as JSON or text

pub mod citation;
pub mod document;
pub mod extractor;
pub mod output;
pub mod patterns;
pub mod segmenter;

pub use citation::{canonicalize_fragment, dedup_key, is_valid_citation};
pub use document::{decode_text, load_document, merge_documents, DocumentError};
pub use extractor::{
    extract_all_citations, extract_citations_near_keyword, keyword_in_sentence,
    proximity_window, CitationExtractor,
};
pub use output::{render_json, render_text, ExtractionReport};
pub use patterns::{CitationRule, PatternSet};
pub use segmenter::{split_into_sentences, SentenceSegmenter};
