//! Data models for document analysis.

pub mod config;
pub mod document;
