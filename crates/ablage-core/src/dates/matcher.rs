//! Surface-pattern matching for date substrings.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Surface form of a matched date substring.
///
/// Each kind defines how the three captured groups map onto year/month/day;
/// the mapping itself is applied by [`super::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `YYYY-MM-DD`.
    Iso,
    /// `D.M.YYYY` or `D/M/YYYY`, day first.
    NumericDmy,
    /// `D Month YYYY` with a full month name (e.g. `3. März 2024`).
    WrittenMonthFull,
    /// `D Mon YYYY` with an abbreviated month token of 3+ letters.
    WrittenMonthAbbrev,
}

/// One date-shaped occurrence found in a text line.
///
/// No calendar validation has happened yet; `31.04.2024` produces a
/// `RawMatch` that the normalizer later drops.
#[derive(Debug, Clone)]
pub struct RawMatch {
    /// The matched substring.
    pub text: String,
    /// Which surface pattern matched.
    pub kind: PatternKind,
    /// Full text of the line the match was found in.
    pub line: String,
    /// Zero-based line index within the document.
    pub line_index: usize,
    /// Character span of the match within the line.
    pub span: (usize, usize),
    /// The three captured groups, in source order.
    pub groups: (String, String, String),
}

/// Month-name vocabulary for written-month date forms.
///
/// Twelve entries, January first; each entry lists all accepted spellings so
/// that accented and unaccented variants (März / Maerz) both resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthVocabulary {
    spellings: Vec<Vec<String>>,
}

impl MonthVocabulary {
    /// Build a vocabulary from twelve spelling lists, January first.
    pub fn new(spellings: Vec<Vec<String>>) -> Self {
        Self { spellings }
    }

    /// The German month names, including unaccented umlaut variants.
    pub fn german() -> Self {
        let raw: [&[&str]; 12] = [
            &["januar"],
            &["februar"],
            &["märz", "maerz"],
            &["april"],
            &["mai"],
            &["juni"],
            &["juli"],
            &["august"],
            &["september"],
            &["oktober"],
            &["november"],
            &["dezember"],
        ];
        Self::new(
            raw.iter()
                .map(|names| names.iter().map(|n| n.to_string()).collect())
                .collect(),
        )
    }

    /// Iterate `(month number, spellings)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.spellings
            .iter()
            .enumerate()
            .map(|(i, names)| (i as u32 + 1, names.as_slice()))
    }

    /// All full spellings, used to build the full-name pattern.
    fn full_names(&self) -> Vec<&str> {
        self.spellings
            .iter()
            .flat_map(|names| names.iter().map(String::as_str))
            .collect()
    }
}

impl Default for MonthVocabulary {
    fn default() -> Self {
        Self::german()
    }
}

/// Finds date-shaped substrings in text lines.
///
/// Patterns are tried in priority order: ISO, numeric day-first, written
/// month (full name), written month (abbreviation). Overlapping matches of
/// lower-priority patterns are discarded.
pub struct DateMatcher {
    vocab: MonthVocabulary,
    iso: Regex,
    numeric: Regex,
    written_full: Regex,
    written_abbrev: Regex,
}

impl DateMatcher {
    /// Create a matcher for the given month vocabulary.
    pub fn new(vocab: MonthVocabulary) -> Self {
        let names: Vec<String> = vocab
            .full_names()
            .iter()
            .map(|n| regex::escape(n))
            .collect();
        let written_full = Regex::new(&format!(
            r"(?i)\b(\d{{1,2}})\.?\s+({})\s+(\d{{4}})\b",
            names.join("|")
        ))
        .unwrap();

        Self {
            vocab,
            iso: Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap(),
            numeric: Regex::new(r"\b(\d{1,2})[./](\d{1,2})[./](\d{4})\b").unwrap(),
            written_full,
            written_abbrev: Regex::new(r"(?i)\b(\d{1,2})\.?\s+(\p{L}{3,})\.?\s+(\d{4})\b")
                .unwrap(),
        }
    }

    /// The vocabulary this matcher was built with.
    pub fn vocabulary(&self) -> &MonthVocabulary {
        &self.vocab
    }

    /// Find all non-overlapping date occurrences in one line.
    pub fn find_in_line(&self, line: &str, line_index: usize) -> Vec<RawMatch> {
        let mut matches: Vec<RawMatch> = Vec::new();

        let patterns = [
            (PatternKind::Iso, &self.iso),
            (PatternKind::NumericDmy, &self.numeric),
            (PatternKind::WrittenMonthFull, &self.written_full),
            (PatternKind::WrittenMonthAbbrev, &self.written_abbrev),
        ];

        for (kind, regex) in patterns {
            for caps in regex.captures_iter(line) {
                let full = caps.get(0).expect("capture group 0 always present");
                let span = (full.start(), full.end());

                // Higher-priority patterns keep their span.
                if matches
                    .iter()
                    .any(|m| span.0 < m.span.1 && m.span.0 < span.1)
                {
                    continue;
                }

                matches.push(RawMatch {
                    text: full.as_str().to_string(),
                    kind,
                    line: line.to_string(),
                    line_index,
                    span,
                    groups: (
                        caps[1].to_string(),
                        caps[2].to_string(),
                        caps[3].to_string(),
                    ),
                });
            }
        }

        matches.sort_by_key(|m| m.span.0);
        matches
    }
}

impl Default for DateMatcher {
    fn default() -> Self {
        Self::new(MonthVocabulary::german())
    }
}
