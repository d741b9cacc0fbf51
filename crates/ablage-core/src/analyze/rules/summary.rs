//! Fallback short summary.
//!
//! The real summarization service lives outside this crate; this produces a
//! usable Kurzfassung from the text itself so the field is never empty.

/// First sentences of the text, whitespace collapsed, capped at `max_chars`
/// characters (never cutting inside a word).
pub fn summarize(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut summary = String::new();
    for word in collapsed.split(' ') {
        let next_len = summary.chars().count() + word.chars().count() + 1;
        if next_len > max_chars {
            break;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(word);
    }
    summary.push('…');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_passes_through() {
        assert_eq!(summarize("Rechnung   über\nStrom", 240), "Rechnung über Strom");
    }

    #[test]
    fn test_long_text_is_capped_at_word_boundary() {
        let text = "wort ".repeat(100);
        let summary = summarize(&text, 24);

        assert!(summary.ends_with('…'));
        assert!(summary.chars().count() <= 25);
        assert!(!summary.contains("wor…"));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize("", 240), "");
    }

    #[test]
    fn test_umlauts_do_not_break_cap() {
        let text = "Größenänderung ".repeat(50);
        let summary = summarize(&text, 40);
        assert!(summary.chars().count() <= 41);
    }
}
