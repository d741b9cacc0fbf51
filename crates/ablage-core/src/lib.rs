//! Core library for German document filing automation.
//!
//! This crate provides:
//! - Document date selection (find, normalize and score every date in a text,
//!   pick the most plausible one)
//! - Field extraction from extracted document text (sender, amount, type)
//! - Document metadata models with German wire field names
//!
//! The crate consumes plain text that was already produced by PDF text
//! extraction or OCR; it knows nothing about file formats or transports.

pub mod analyze;
pub mod dates;
pub mod error;
pub mod models;

pub use error::{AblageError, Result};
pub use models::config::{AblageConfig, AnalysisConfig, DateConfig};
pub use models::document::{AnalysisResult, DocumentMetadata, DocumentType};

pub use analyze::{DocumentAnalyzer, TextAnalyzer};
pub use dates::{
    choose_document_date, Candidate, ContextScorer, CueLexicon, DateMatcher, DateSelector,
    MonthVocabulary, PatternKind, RawMatch, ScoreWeights,
};
