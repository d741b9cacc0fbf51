//! Calendar normalization of raw date matches.

use chrono::NaiveDate;

use super::matcher::{MonthVocabulary, PatternKind, RawMatch};

/// Fold German special characters to their ASCII spellings and lower-case.
///
/// Applied to both sides of every month-name comparison so that `MÄRZ`,
/// `März` and `Maerz` all resolve to the same entry.
pub fn fold_accents(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        match c {
            'ä' => folded.push_str("ae"),
            'ö' => folded.push_str("oe"),
            'ü' => folded.push_str("ue"),
            'ß' => folded.push_str("ss"),
            _ => folded.push(c),
        }
    }
    folded
}

/// Resolve a month token against the vocabulary.
///
/// Full forms need an exact (folded) spelling; abbreviated forms accept any
/// month with a matching 3+ letter prefix.
fn resolve_month(vocab: &MonthVocabulary, token: &str, allow_prefix: bool) -> Option<u32> {
    let token = fold_accents(token);

    for (number, spellings) in vocab.entries() {
        for spelling in spellings {
            let spelling = fold_accents(spelling);
            if spelling == token || (allow_prefix && spelling.starts_with(&token)) {
                return Some(number);
            }
        }
    }
    None
}

/// Turn a raw match into a real calendar date, or `None` if the values do not
/// form one (day 31 in April, month 13, unknown month name, ...).
pub fn normalize(raw: &RawMatch, vocab: &MonthVocabulary) -> Option<NaiveDate> {
    let (day, month, year) = match raw.kind {
        PatternKind::Iso => (
            raw.groups.2.parse().ok()?,
            raw.groups.1.parse().ok()?,
            raw.groups.0.parse().ok()?,
        ),
        PatternKind::NumericDmy => (
            raw.groups.0.parse().ok()?,
            raw.groups.1.parse().ok()?,
            raw.groups.2.parse().ok()?,
        ),
        PatternKind::WrittenMonthFull => (
            raw.groups.0.parse().ok()?,
            resolve_month(vocab, &raw.groups.1, false)?,
            raw.groups.2.parse().ok()?,
        ),
        PatternKind::WrittenMonthAbbrev => (
            raw.groups.0.parse().ok()?,
            resolve_month(vocab, &raw.groups.1, true)?,
            raw.groups.2.parse().ok()?,
        ),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::super::matcher::DateMatcher;
    use super::*;

    fn normalize_line(line: &str) -> Option<NaiveDate> {
        let matcher = DateMatcher::default();
        let matches = matcher.find_in_line(line, 0);
        matches
            .first()
            .and_then(|m| normalize(m, matcher.vocabulary()))
    }

    #[test]
    fn test_round_trip_all_forms() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert_eq!(normalize_line("2024-03-15"), Some(date));
        assert_eq!(normalize_line("15.03.2024"), Some(date));
        assert_eq!(normalize_line("15/3/2024"), Some(date));
        assert_eq!(normalize_line("15. März 2024"), Some(date));
        assert_eq!(normalize_line("15. Maerz 2024"), Some(date));
        assert_eq!(normalize_line("15. Mär. 2024"), Some(date));
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert_eq!(normalize_line("31.04.2024"), None);
        assert_eq!(normalize_line("0.01.2024"), None);
        assert_eq!(normalize_line("32.01.2024"), None);
        assert_eq!(normalize_line("15.13.2024"), None);
        assert_eq!(normalize_line("30.02.2024"), None);
        // Feb 29 only exists in leap years.
        assert_eq!(normalize_line("29.02.2023"), None);
        assert!(normalize_line("29.02.2024").is_some());
    }

    #[test]
    fn test_rejects_unknown_month_token() {
        assert_eq!(normalize_line("12. Foo 2024"), None);
        assert_eq!(normalize_line("12. Xyz. 2024"), None);
    }

    #[test]
    fn test_abbrev_prefix_resolution() {
        assert_eq!(
            normalize_line("1. Sep 2023"),
            NaiveDate::from_ymd_opt(2023, 9, 1)
        );
        assert_eq!(
            normalize_line("1. Sept. 2023"),
            NaiveDate::from_ymd_opt(2023, 9, 1)
        );
        assert_eq!(
            normalize_line("1. Dez. 2023"),
            NaiveDate::from_ymd_opt(2023, 12, 1)
        );
    }

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("MÄRZ"), "maerz");
        assert_eq!(fold_accents("Größe"), "groesse");
        assert_eq!(fold_accents("april"), "april");
    }

    #[test]
    fn test_numeric_is_day_first() {
        // 03.04. is the 3rd of April, not March 4th.
        assert_eq!(
            normalize_line("03.04.2024"),
            NaiveDate::from_ymd_opt(2024, 4, 3)
        );
    }
}
