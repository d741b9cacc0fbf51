//! Context scoring for date candidates.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Score contributions and thresholds for the context scorer.
///
/// The default values are heuristic constants tuned against a corpus of
/// scanned German correspondence; they carry no derivation and are expected
/// to be recalibrated empirically rather than treated as optimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Line mentions a date of birth.
    pub birth_cue: i32,
    /// Line mentions an issuance/reference date.
    pub document_cue: i32,
    /// Line suggests the document itself is a birth-record type.
    pub negative_cue: i32,
    /// Date falls inside the recency window.
    pub recent: i32,
    /// Date falls outside the recency window.
    pub stale: i32,
    /// Date lies further in the future than the grace period.
    pub future: i32,
    /// Occurrence sits in the first lines of the document.
    pub early_position: i32,
    /// Year at or below the plausibility cutoff.
    pub ancient: i32,

    /// Length of the recency window in years.
    pub recency_years: u32,
    /// Days a date may lie ahead of "now" before it counts as future.
    pub future_grace_days: i64,
    /// Number of leading lines that earn the early-position bonus.
    pub early_lines: usize,
    /// Years at or below this value are implausible document dates.
    pub ancient_cutoff_year: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            birth_cue: -20,
            document_cue: 10,
            negative_cue: -5,
            recent: 6,
            stale: -2,
            future: -5,
            early_position: 2,
            ancient: -6,
            recency_years: 10,
            future_grace_days: 31,
            early_lines: 40,
            ancient_cutoff_year: 1985,
        }
    }
}

/// Cue phrases checked against the line surrounding a date occurrence.
///
/// Matching is a case-insensitive substring test, so entries are stored
/// lower-case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CueLexicon {
    /// Birth-date context (`Geburtsdatum: ...`).
    pub birth: Vec<String>,
    /// Document-date context (`Rechnungsdatum: ...`).
    pub document: Vec<String>,
    /// The document itself is a birth-record type.
    pub negative: Vec<String>,
}

impl Default for CueLexicon {
    fn default() -> Self {
        fn own(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }
        Self {
            birth: own(&["geburtsdatum", "geboren am", "geb."]),
            document: own(&[
                "rechnungsdatum",
                "ausstellungsdatum",
                "belegdatum",
                "ausgestellt",
                "datiert",
                "stand:",
            ]),
            negative: own(&["geburtsurkunde", "stammbuch", "abstammungsurkunde"]),
        }
    }
}

/// Scores one date occurrence from its surrounding line and position.
///
/// All applicable contributions are summed; a line may trigger several cues
/// at once. Pure and side-effect free.
#[derive(Debug, Clone, Default)]
pub struct ContextScorer {
    weights: ScoreWeights,
    cues: CueLexicon,
}

impl ContextScorer {
    pub fn new(weights: ScoreWeights, cues: CueLexicon) -> Self {
        Self { weights, cues }
    }

    /// The weights this scorer applies.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score a normalized date found on `line` at `line_index`, relative to
    /// `today`.
    pub fn score(&self, line: &str, line_index: usize, date: NaiveDate, today: NaiveDate) -> i32 {
        let w = &self.weights;
        let line = line.to_lowercase();
        let mut score = 0;

        if self.cues.birth.iter().any(|cue| line.contains(cue.as_str())) {
            score += w.birth_cue;
        }
        if self.cues.document.iter().any(|cue| line.contains(cue.as_str())) {
            score += w.document_cue;
        }
        if self.cues.negative.iter().any(|cue| line.contains(cue.as_str())) {
            score += w.negative_cue;
        }

        let in_window = today
            .checked_sub_months(Months::new(w.recency_years * 12))
            .is_none_or(|start| date >= start);
        score += if in_window { w.recent } else { w.stale };

        if (date - today).num_days() > w.future_grace_days {
            score += w.future;
        }

        if line_index < w.early_lines {
            score += w.early_position;
        }

        if date.year() <= w.ancient_cutoff_year {
            score += w.ancient;
        }

        score
    }
}
