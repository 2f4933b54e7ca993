//! Citation canonicalization and validation.
//!
//! A canonical citation is one of `Surname, Year`, `Surname & Surname, Year`,
//! or `Surname et al., Year`, where the year may carry a single lowercase
//! disambiguation letter (e.g. `2010a`). Candidates that fail validation are
//! silently discarded; that discard is the designed filter for false
//! positives from the deliberately wide trigger patterns, not an error path.

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::{SURNAME, YEAR};

/// Year token accepted by validation: 1900-2099, optional letter suffix.
static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}[a-z]?\b").unwrap());

// Anchored bare shapes used to re-render grouped-citation fragments.
static ET_AL_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^({SURNAME})\s+et\s+al\.[\s,]*({YEAR})$")).unwrap()
});
static TWO_AUTHOR_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({SURNAME})\s+(?:&|and)\s+({SURNAME})[\s,]*({YEAR})$"
    ))
    .unwrap()
});
static SIMPLE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^({SURNAME})[\s,]+({YEAR})$")).unwrap()
});

/// Collapses internal whitespace runs to single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonicalizes a grouped-citation fragment.
///
/// The fragment is whitespace-collapsed, then re-rendered with canonical
/// separators when it matches a known bare shape end-to-end (et-al,
/// two-author, simple). A fragment with no recognized shape is kept
/// collapsed as-is and left to validation.
///
/// # Arguments
///
/// * `fragment` - One semicolon-separated part of a grouped parenthetical
///
/// # Returns
///
/// The canonical (or collapsed) citation candidate.
pub fn canonicalize_fragment(fragment: &str) -> String {
    let collapsed = normalize_whitespace(fragment);

    if let Some(caps) = ET_AL_FRAGMENT.captures(&collapsed) {
        return format!("{} et al., {}", &caps[1], &caps[2]);
    }
    if let Some(caps) = TWO_AUTHOR_FRAGMENT.captures(&collapsed) {
        return format!("{} & {}, {}", &caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = SIMPLE_FRAGMENT.captures(&collapsed) {
        return format!("{}, {}", &caps[1], &caps[2]);
    }

    collapsed
}

/// Validation predicate for citation candidates.
///
/// All of the following must hold:
/// - contains a year token in [1900, 2099], optional lowercase letter suffix
/// - the first character is an ASCII uppercase letter
/// - total length is at least 7 characters
pub fn is_valid_citation(citation: &str) -> bool {
    if !YEAR_TOKEN.is_match(citation) {
        return false;
    }
    if !citation
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
    {
        return false;
    }
    citation.chars().count() >= 7
}

/// Deduplication key: lowercased with all whitespace removed.
///
/// Two citations with equal keys are the same citation for output purposes,
/// regardless of original casing or spacing.
pub fn dedup_key(citation: &str) -> String {
    citation
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
