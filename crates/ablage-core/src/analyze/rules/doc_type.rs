//! Keyword classification of document types.

use crate::models::document::DocumentType;

/// Keyword table, checked in order. A Mahnung routinely mentions the
/// Rechnung it refers to, so the more specific classes come first.
const KEYWORDS: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::Mahnung,
        &["mahnung", "zahlungserinnerung", "mahngebühr", "letzte aufforderung"],
    ),
    (
        DocumentType::Kontoauszug,
        &["kontoauszug", "buchungstag", "kontostand", "wertstellung"],
    ),
    (
        DocumentType::Urkunde,
        &["urkunde", "stammbuch", "beurkundung", "standesamt"],
    ),
    (
        DocumentType::Bescheid,
        &["bescheid", "bewilligung", "festsetzung", "widerspruchsfrist"],
    ),
    (
        DocumentType::Vertrag,
        &["vertrag", "vereinbarung", "vertragspartner", "kündigungsfrist"],
    ),
    (
        DocumentType::Rechnung,
        &["rechnung", "invoice", "rechnungsnummer", "rechnungsbetrag"],
    ),
];

/// Classify the document type from keyword hits.
///
/// Each class scores the number of lines containing one of its keywords; the
/// highest count wins, table order breaks ties. No hits at all yields
/// [`DocumentType::Sonstiges`].
pub fn classify_document_type(text: &str) -> DocumentType {
    let text = text.to_lowercase();

    let mut best = DocumentType::Sonstiges;
    let mut best_hits = 0usize;

    for (doc_type, keywords) in KEYWORDS {
        let hits = text
            .lines()
            .filter(|line| keywords.iter().any(|k| line.contains(k)))
            .count();
        if hits > best_hits {
            best = *doc_type;
            best_hits = hits;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rechnung() {
        let text = "Rechnung Nr. 2024-001\nRechnungsbetrag: 119,00 €";
        assert_eq!(classify_document_type(text), DocumentType::Rechnung);
    }

    #[test]
    fn test_mahnung_beats_mentioned_rechnung() {
        let text = "Zahlungserinnerung\nIhre Rechnung vom 15.03.2024 ist überfällig.\nMahngebühr: 5,00 €";
        assert_eq!(classify_document_type(text), DocumentType::Mahnung);
    }

    #[test]
    fn test_classify_kontoauszug() {
        let text = "Kontoauszug 3/2024\nBuchungstag Wertstellung Betrag\nKontostand: 1.234,56";
        assert_eq!(classify_document_type(text), DocumentType::Kontoauszug);
    }

    #[test]
    fn test_unknown_text_is_sonstiges() {
        assert_eq!(classify_document_type("Hallo Welt"), DocumentType::Sonstiges);
        assert_eq!(classify_document_type(""), DocumentType::Sonstiges);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify_document_type("RECHNUNGSNUMMER 42"),
            DocumentType::Rechnung
        );
    }
}
