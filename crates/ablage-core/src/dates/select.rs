//! Best-candidate selection across a whole document.

use chrono::NaiveDate;
use tracing::debug;

use super::matcher::DateMatcher;
use super::normalize::normalize;
use super::score::ContextScorer;

/// A normalized date paired with its context score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub date: NaiveDate,
    pub score: i32,
}

/// Picks the most plausible document date out of every date occurrence.
///
/// Stateless apart from its immutable configuration; safe to share across
/// threads and invoke concurrently.
#[derive(Default)]
pub struct DateSelector {
    matcher: DateMatcher,
    scorer: ContextScorer,
}

impl DateSelector {
    pub fn new(matcher: DateMatcher, scorer: ContextScorer) -> Self {
        Self { matcher, scorer }
    }

    /// All scored candidates in document order.
    ///
    /// The same date appearing on two lines yields two candidates; context
    /// differs per occurrence.
    pub fn candidates(&self, text: &str, today: NaiveDate) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (line_index, line) in text.lines().enumerate() {
            for raw in self.matcher.find_in_line(line, line_index) {
                let Some(date) = normalize(&raw, self.matcher.vocabulary()) else {
                    continue;
                };
                let score = self.scorer.score(&raw.line, raw.line_index, date, today);
                candidates.push(Candidate { date, score });
            }
        }

        candidates
    }

    /// Select the document date: maximum score, ties broken towards the more
    /// recent date. Falls back to `today` when the text yields no candidate,
    /// so the result is total.
    pub fn select(&self, text: &str, today: NaiveDate) -> NaiveDate {
        let candidates = self.candidates(text, today);
        debug!(count = candidates.len(), "scored date candidates");

        candidates
            .into_iter()
            .max_by(|a, b| a.score.cmp(&b.score).then(a.date.cmp(&b.date)))
            .map(|best| {
                debug!(date = %best.date, score = best.score, "selected document date");
                best.date
            })
            .unwrap_or(today)
    }
}

/// Choose the document date for `text` as an ISO `YYYY-MM-DD` string.
///
/// `now` is sampled once by the caller, which keeps the result deterministic
/// for a fixed `(text, now)` pair.
pub fn choose_document_date(text: &str, now: NaiveDate) -> String {
    DateSelector::default()
        .select(text, now)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_empty_text_falls_back_to_today() {
        assert_eq!(choose_document_date("", today()), "2025-06-01");
        assert_eq!(choose_document_date("kein datum hier", today()), "2025-06-01");
    }

    #[test]
    fn test_invoice_date_beats_birth_date() {
        let text = "Geburtsdatum: 01.01.1970\nRechnungsdatum: 15.03.2024";

        assert_eq!(choose_document_date(text, today()), "2024-03-15");
    }

    #[test]
    fn test_sole_negative_candidate_is_still_returned() {
        let text = "Stammbuch der Familie, ausgefertigt 12.05.1979";
        let selector = DateSelector::default();

        let candidates = selector.candidates(text, today());
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].score < 0);

        assert_eq!(choose_document_date(text, today()), "1979-05-12");
    }

    #[test]
    fn test_identical_dates_scored_per_occurrence() {
        let text = "irgendwas 10.10.2020\nRechnungsdatum: 10.10.2020";
        let selector = DateSelector::default();

        let candidates = selector.candidates(text, today());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].date, candidates[1].date);
        assert!(candidates[1].score > candidates[0].score);

        assert_eq!(selector.select(text, today()), candidates[1].date);
    }

    #[test]
    fn test_tie_break_prefers_more_recent_date() {
        // Identical context on both lines, so both candidates score the same.
        let text = "am 01.05.2021\nam 01.05.2022";

        assert_eq!(choose_document_date(text, today()), "2022-05-01");

        // Order in the text must not matter.
        let text = "am 01.05.2022\nam 01.05.2021";
        assert_eq!(choose_document_date(text, today()), "2022-05-01");
    }

    #[test]
    fn test_failed_normalization_is_dropped_silently() {
        let text = "Termin am 31.04.2024\nRechnungsdatum: 15.03.2024";

        assert_eq!(choose_document_date(text, today()), "2024-03-15");
    }

    #[test]
    fn test_mixed_forms_in_one_document() {
        let text = "Vertrag vom 1. Februar 2023\nStand: 2024-06-30\nunterschrieben 03.02.2023";
        let selector = DateSelector::default();

        assert_eq!(selector.candidates(text, today()).len(), 3);
        // "Stand:" is a document cue, the others carry none.
        assert_eq!(selector.select(text, today()), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }
}
