//! Amount extraction for German documents.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT_PATTERN, AMOUNT_WITH_CURRENCY, TOTAL_AMOUNT};
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in AMOUNT_PATTERN.captures_iter(text) {
            let integer_part = caps[1].replace('.', "");
            let decimal_part = &caps[2];

            let amount_str = format!("{}.{}", integer_part, decimal_part);
            if let Ok(amount) = Decimal::from_str(&amount_str) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, 0.8, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extracted amounts from a document.
#[derive(Debug, Clone, Default)]
pub struct DocumentAmounts {
    /// The main amount of the document.
    pub total: Option<ExtractionMatch<Decimal>>,
    /// All detected amounts.
    pub all_amounts: Vec<ExtractionMatch<Decimal>>,
}

/// Extract amounts from document text.
///
/// A labeled total (Gesamtbetrag, zu zahlen, ...) wins; next best is an
/// amount with an attached currency marker; otherwise the largest amount
/// found anywhere serves as the total.
pub fn extract_amounts(text: &str) -> DocumentAmounts {
    let mut result = DocumentAmounts::default();
    let extractor = AmountExtractor::new();

    result.all_amounts = extractor.extract_all(text);

    if let Some(caps) = TOTAL_AMOUNT.captures(text) {
        if let Some(amount) = parse_german_amount(&caps[1]) {
            result.total = Some(ExtractionMatch::new(amount, 0.95, &caps[0]));
        }
    }

    if result.total.is_none() {
        if let Some(caps) = AMOUNT_WITH_CURRENCY.captures(text) {
            let raw = format!("{},{}", &caps[1], &caps[2]);
            if let Some(amount) = parse_german_amount(&raw) {
                result.total = Some(ExtractionMatch::new(amount, 0.85, &caps[0]));
            }
        }
    }

    if result.total.is_none() && !result.all_amounts.is_empty() {
        let max_amount = result
            .all_amounts
            .iter()
            .max_by(|a, b| a.value.cmp(&b.value))
            .cloned();
        result.total = max_amount;
    }

    result
}

/// Parse a German-formatted amount (e.g., "1.234,56" or "1234,56").
pub fn parse_german_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    // German convention: '.' groups thousands, ',' separates decimals.
    let normalized = cleaned.replace('.', "").replace(',', ".");

    Decimal::from_str(&normalized).ok()
}
