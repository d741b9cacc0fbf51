//! Document metadata models.
//!
//! Wire field names are German because the downstream filing automation
//! consumes them as `datum`, `betrag`, `absender`, `typ` and `kurzfassung`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured metadata describing one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Classified document type.
    #[serde(rename = "typ")]
    pub doc_type: DocumentType,

    /// Sender / issuing party, when one could be identified.
    #[serde(rename = "absender", skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// The document date (serialized as `YYYY-MM-DD`).
    #[serde(rename = "datum")]
    pub document_date: NaiveDate,

    /// Main amount, when the document carries one.
    #[serde(rename = "betrag", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Short plain-text summary.
    #[serde(rename = "kurzfassung")]
    pub summary: String,
}

/// Document classes relevant for filing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Invoice (Rechnung).
    Rechnung,
    /// Payment reminder (Mahnung / Zahlungserinnerung).
    Mahnung,
    /// Contract (Vertrag).
    Vertrag,
    /// Bank statement (Kontoauszug).
    Kontoauszug,
    /// Official notice (Bescheid).
    Bescheid,
    /// Certificate / civil record (Urkunde).
    Urkunde,
    /// Anything else.
    #[default]
    Sonstiges,
}

/// Result of analyzing one document text.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Extracted metadata.
    pub metadata: DocumentMetadata,
    /// Non-fatal extraction issues.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}
