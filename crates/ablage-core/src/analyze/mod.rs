//! Document analysis module.

mod analyzer;
pub mod rules;

pub use analyzer::TextAnalyzer;

use crate::error::Result;
use crate::models::document::AnalysisResult;

/// Trait for document analyzers.
pub trait DocumentAnalyzer {
    /// Analyze extracted document text into filing metadata.
    fn analyze(&self, text: &str) -> Result<AnalysisResult>;
}
