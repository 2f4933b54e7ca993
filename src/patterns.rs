//! Citation pattern recognition.
//!
//! An ordered, immutable list of recognizer rules, each pairing a trigger
//! shape with a canonicalization function, plus the grouped-citation
//! splitter for semicolon-delimited parentheticals like
//! `(Smith, 2010; Jones et al., 2012)`.
//!
//! Rule order is fixed and significant: it decides which rule claims an
//! ambiguous span, and output is rule-major — all matches of rule 1 in a
//! span are emitted before any match of rule 2, regardless of text position.
//! Grouped parentheticals are discharged as a unit: their spans are masked
//! from the single-citation rules and their fragments are emitted last.

use regex::{Captures, Regex};

use crate::citation::{canonicalize_fragment, is_valid_citation, normalize_whitespace};

/// Surname shape: capitalized token of letters/apostrophes/hyphens, with an
/// optional second capitalized word for multi-barrel names.
pub(crate) const SURNAME: &str = r"[A-Z][A-Za-z'\-]+(?:\s[A-Z][A-Za-z'\-]+)?";

/// Year shape in trigger position: four digits plus an optional lowercase
/// disambiguation letter. Range enforcement is the validator's job.
pub(crate) const YEAR: &str = r"\d{4}[a-z]?";

/// A single recognizer rule: a trigger shape paired with the function that
/// renders its captures into canonical form.
pub struct CitationRule {
    name: &'static str,
    trigger: Regex,
    render: fn(&Captures) -> String,
}

impl CitationRule {
    fn new(name: &'static str, trigger: &str, render: fn(&Captures) -> String) -> Self {
        Self {
            name,
            trigger: Regex::new(trigger).unwrap(),
            render,
        }
    }

    /// The rule's name, stable and unique within the set.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All canonical candidates this rule produces for a span, left to
    /// right. Candidates are normalized but not yet validated.
    pub fn matches_in(&self, span: &str) -> Vec<String> {
        self.scan(span).into_iter().map(|(_, c)| c).collect()
    }

    /// Like [`matches_in`](Self::matches_in), but keeps each match's start
    /// offset so grouped spans can be masked out.
    pub(crate) fn scan(&self, span: &str) -> Vec<(usize, String)> {
        self.trigger
            .captures_iter(span)
            .map(|caps| {
                let start = caps.get(0).unwrap().start();
                let candidate = normalize_whitespace(&(self.render)(&caps));
                (start, candidate)
            })
            .collect()
    }
}

fn render_et_al(caps: &Captures) -> String {
    format!("{} et al., {}", &caps[1], &caps[2])
}

fn render_two_author(caps: &Captures) -> String {
    format!("{} & {}, {}", &caps[1], &caps[2], &caps[3])
}

fn render_narrative(caps: &Captures) -> String {
    // The author group is captured verbatim; the "and" spelling is
    // re-expressed with the canonical ampersand separator.
    let authors = normalize_whitespace(&caps[1]).replace(" and ", " & ");
    format!("{}, {}", authors, &caps[2])
}

fn render_simple(caps: &Captures) -> String {
    format!("{}, {}", &caps[1], &caps[2])
}

/// A grouped parenthetical: its byte span within the scanned text and the
/// validated citations its fragments produced, in fragment order.
struct GroupedCitations {
    span: (usize, usize),
    citations: Vec<String>,
}

/// The process-wide ordered rule list.
///
/// Constructed once, immutable afterwards, and injectable wherever the
/// extraction pipeline runs — tests may build alternates, production code
/// uses [`PatternSet::new`].
pub struct PatternSet {
    rules: Vec<CitationRule>,
    grouped: Regex,
    year_probe: Regex,
}

impl PatternSet {
    /// Builds the default rule list in priority order.
    pub fn new() -> Self {
        let rules = vec![
            CitationRule::new(
                "et-al",
                &format!(r"\b({SURNAME})\s+et\s+al\.[\s,]*({YEAR})"),
                render_et_al,
            ),
            CitationRule::new(
                "et-al-parenthetical",
                &format!(r"\(({SURNAME})\s+et\s+al\.[\s,]*({YEAR})\)"),
                render_et_al,
            ),
            CitationRule::new(
                "two-author",
                &format!(r"\b({SURNAME})\s+(?:&|and)\s+({SURNAME})[\s,]*({YEAR})"),
                render_two_author,
            ),
            CitationRule::new(
                "two-author-parenthetical",
                &format!(r"\(({SURNAME})\s+(?:&|and)\s+({SURNAME})[\s,]*({YEAR})\)"),
                render_two_author,
            ),
            CitationRule::new(
                "narrative",
                &format!(r"\b({SURNAME}(?:\s+(?:&|and)\s+{SURNAME})?)\s+\(({YEAR})\)"),
                render_narrative,
            ),
            CitationRule::new(
                "parenthetical",
                &format!(r"\(({SURNAME})[\s,]+({YEAR})\)"),
                render_simple,
            ),
        ];

        Self {
            rules,
            // Parenthetical with at least two year-bearing fragments
            // separated by a semicolon.
            grouped: Regex::new(r"\(([^)]*\d{4}[^)]*;[^)]*\d{4}[^)]*)\)").unwrap(),
            year_probe: Regex::new(r"\d{4}").unwrap(),
        }
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[CitationRule] {
        &self.rules
    }

    /// Rule names in priority order, grouped splitting last.
    pub fn rule_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.rules.iter().map(|r| r.name()).collect();
        names.push("grouped");
        names
    }

    /// Extracts canonical, validated citations from a single text span.
    ///
    /// Matches are emitted rule-major: every match of a rule, left to right,
    /// before any match of the next rule; grouped-parenthetical fragments
    /// come last. A single-rule match whose start falls inside a grouped
    /// parenthetical is dropped, so a fragment is never counted twice.
    /// Duplicate canonical strings may appear; deduplication is the
    /// pipeline's job, not the pattern set's.
    ///
    /// # Arguments
    ///
    /// * `span` - The text to scan (normally one sentence, any text works)
    ///
    /// # Returns
    ///
    /// Validated canonical citations; empty when nothing matches. Zero
    /// matches is steady-state, not an error.
    pub fn extract_from_span(&self, span: &str) -> Vec<String> {
        let groups = self.grouped_citations(span);
        let inside_group =
            |pos: usize| groups.iter().any(|g| pos >= g.span.0 && pos < g.span.1);

        let mut citations = Vec::new();
        for rule in &self.rules {
            for (start, candidate) in rule.scan(span) {
                if inside_group(start) {
                    continue;
                }
                if is_valid_citation(&candidate) {
                    citations.push(candidate);
                }
            }
        }

        for group in groups {
            citations.extend(group.citations);
        }

        citations
    }

    /// Detects grouped parentheticals and decomposes them into validated
    /// citations, one per semicolon-separated fragment in fragment order.
    /// A detected parenthetical claims its whole span even when none of its
    /// fragments survive validation.
    fn grouped_citations(&self, span: &str) -> Vec<GroupedCitations> {
        let mut groups = Vec::new();

        for caps in self.grouped.captures_iter(span) {
            let hit = caps.get(0).unwrap();
            let inner = caps.get(1).unwrap().as_str();

            let mut citations = Vec::new();
            for fragment in inner.split(';') {
                let fragment = fragment.trim();
                if fragment.is_empty() || !self.year_probe.is_match(fragment) {
                    continue;
                }
                let candidate = canonicalize_fragment(fragment);
                if is_valid_citation(&candidate) {
                    citations.push(candidate);
                }
            }

            groups.push(GroupedCitations {
                span: (hit.start(), hit.end()),
                citations,
            });
        }

        groups
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}
