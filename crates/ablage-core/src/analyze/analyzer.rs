//! Text analyzer combining the rule extractors and the date pipeline.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::dates::{ContextScorer, DateMatcher, DateSelector};
use crate::error::Result;
use crate::models::config::{AblageConfig, AnalysisConfig};
use crate::models::document::{AnalysisResult, DocumentMetadata};

use super::rules::{classify_document_type, extract_amounts, extract_sender, summarize};
use super::DocumentAnalyzer;

/// Analyzes extracted document text into filing metadata.
pub struct TextAnalyzer {
    config: AnalysisConfig,
    selector: DateSelector,
}

impl TextAnalyzer {
    /// Create an analyzer with default (German) configuration.
    pub fn new() -> Self {
        Self::with_config(&AblageConfig::default())
    }

    /// Create an analyzer from explicit configuration.
    pub fn with_config(config: &AblageConfig) -> Self {
        let matcher = DateMatcher::new(config.dates.months.clone());
        let scorer = ContextScorer::new(config.dates.weights.clone(), config.dates.cues.clone());

        Self {
            config: config.analysis.clone(),
            selector: DateSelector::new(matcher, scorer),
        }
    }

    /// Analyze with an explicit "now", for deterministic results.
    ///
    /// `today` is used both by the date scorer and as the fallback document
    /// date when the text contains no recognizable date.
    pub fn analyze_at(&self, text: &str, today: NaiveDate) -> Result<AnalysisResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("analyzing {} characters of text", text.len());

        let doc_type = classify_document_type(text);

        let sender = extract_sender(text, self.config.sender_scan_lines);
        if sender.is_none() {
            warnings.push("could not identify a sender".to_string());
        }

        let document_date = self.selector.select(text, today);

        let amounts = extract_amounts(text);
        if amounts.total.is_none() {
            warnings.push("no amount found".to_string());
        }

        let metadata = DocumentMetadata {
            doc_type,
            sender: sender.map(|m| m.value),
            document_date,
            amount: amounts.total.map(|m| m.value),
            summary: summarize(text, self.config.max_summary_chars),
        };

        debug!(
            doc_type = ?metadata.doc_type,
            date = %metadata.document_date,
            "extracted document metadata"
        );

        Ok(AnalysisResult {
            metadata,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer for TextAnalyzer {
    fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        self.analyze_at(text, Utc::now().date_naive())
    }
}
