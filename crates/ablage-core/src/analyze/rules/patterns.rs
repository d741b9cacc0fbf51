//! Common regex patterns for German document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount patterns (German format: 1.234,56)
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"\b(\d{1,3}(?:\.\d{3})+|\d+),(\d{2})\b"
    ).unwrap();

    pub static ref AMOUNT_WITH_CURRENCY: Regex = Regex::new(
        r"(\d{1,3}(?:\.\d{3})+|\d+),(\d{2})\s*(?:€|EUR|Euro)"
    ).unwrap();

    // Labeled totals
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)\b(?:gesamtbetrag|rechnungsbetrag|endbetrag|gesamtsumme|zu\s+zahlen(?:der\s+betrag)?|zahlbetrag|summe)[\s:]*((?:\d{1,3}(?:\.\d{3})+|\d+),\d{2})"
    ).unwrap();

    // Sender identification
    pub static ref SENDER_LABEL: Regex = Regex::new(
        r"(?i)(?:absender|aussteller)[\s:]+(.+?)(?:\n|$)"
    ).unwrap();

    pub static ref COMPANY_SUFFIX: Regex = Regex::new(
        r"(?i)\b(?:GmbH\s*&\s*Co\.\s*KG|GmbH|AG|e\.\s?V\.|KG|OHG|UG|mbH|Bank|Sparkasse|Versicherung|Krankenkasse|Stadtwerke|Finanzamt)\b"
    ).unwrap();

    // Lines that never identify the sender
    pub static ref GREETING: Regex = Regex::new(
        r"(?i)^(?:sehr\s+geehrte|mit\s+freundlichen|guten\s+tag|liebe[rs]?\s)"
    ).unwrap();

    // Postal code + city line (5-digit German PLZ)
    pub static ref POSTAL_LINE: Regex = Regex::new(
        r"^\d{5}\s+\p{L}+"
    ).unwrap();
}
