//! Sender extraction for German documents.

use super::patterns::{COMPANY_SUFFIX, GREETING, POSTAL_LINE, SENDER_LABEL};
use super::ExtractionMatch;

/// Extract the sender from document text.
///
/// Tried in order: an explicit `Absender:` label, a letterhead line with a
/// company form (GmbH, AG, ...) within the first `scan_lines` lines, and
/// finally the first plausible non-empty line.
pub fn extract_sender(text: &str, scan_lines: usize) -> Option<ExtractionMatch<String>> {
    if let Some(caps) = SENDER_LABEL.captures(text) {
        let name = caps[1].trim();
        if !name.is_empty() {
            return Some(ExtractionMatch::new(name.to_string(), 0.95, &caps[0]));
        }
    }

    let head = text.lines().take(scan_lines);
    for line in head.clone() {
        let line = line.trim();
        if COMPANY_SUFFIX.is_match(line) && !GREETING.is_match(line) {
            return Some(ExtractionMatch::new(line.to_string(), 0.8, line));
        }
    }

    head.map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !GREETING.is_match(line)
                && !POSTAL_LINE.is_match(line)
                && line.chars().filter(|c| c.is_alphabetic()).count() >= 3
        })
        .map(|line| ExtractionMatch::new(line.to_string(), 0.5, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_sender() {
        let text = "Irgendein Kopf\nAbsender: Finanzamt München\nweiter im Text";

        let sender = extract_sender(text, 15).unwrap();
        assert_eq!(sender.value, "Finanzamt München");
        assert!(sender.confidence > 0.9);
    }

    #[test]
    fn test_letterhead_company() {
        let text = "Stadtwerke Leipzig GmbH\nPostfach 10 11 12\n04109 Leipzig\n\nRechnung";

        let sender = extract_sender(text, 15).unwrap();
        assert_eq!(sender.value, "Stadtwerke Leipzig GmbH");
    }

    #[test]
    fn test_first_line_fallback_skips_greeting_and_postal() {
        let text = "\n12345 Beispielstadt\nSehr geehrter Herr Muster,\nKanzlei Beispiel\n";

        let sender = extract_sender(text, 15).unwrap();
        assert_eq!(sender.value, "Kanzlei Beispiel");
        assert!(sender.confidence < 0.6);
    }

    #[test]
    fn test_no_sender_found() {
        assert!(extract_sender("", 15).is_none());
        assert!(extract_sender("123\n456", 15).is_none());
    }

    #[test]
    fn test_company_outside_scan_window_ignored() {
        let mut text = String::new();
        for _ in 0..20 {
            text.push_str("x y z\n");
        }
        text.push_str("Muster GmbH\n");

        let sender = extract_sender(&text, 15).unwrap();
        // Falls back to the first plausible line, not the late company line.
        assert_eq!(sender.value, "x y z");
    }
}
