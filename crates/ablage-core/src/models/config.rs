//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dates::{CueLexicon, MonthVocabulary, ScoreWeights};
use crate::error::{AblageError, Result};

/// Main configuration for the ablage pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AblageConfig {
    /// Field extraction configuration.
    pub analysis: AnalysisConfig,

    /// Date selection configuration.
    pub dates: DateConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum length of the generated summary, in characters.
    pub max_summary_chars: usize,

    /// Number of leading lines scanned for the sender.
    pub sender_scan_lines: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_summary_chars: 240,
            sender_scan_lines: 15,
        }
    }
}

/// Date selection configuration.
///
/// Vocabulary, cue lexicon and weights are plain data here so tests (or a
/// deployment for another language) can swap them without touching code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Month-name vocabulary for written date forms.
    pub months: MonthVocabulary,

    /// Cue phrases for context scoring.
    pub cues: CueLexicon,

    /// Score contributions and thresholds.
    pub weights: ScoreWeights,
}

impl AblageConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AblageError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_json() {
        let config = AblageConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AblageConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.analysis.max_summary_chars, 240);
        assert_eq!(parsed.dates.weights.birth_cue, -20);
        assert_eq!(parsed.dates.weights.document_cue, 10);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AblageConfig =
            serde_json::from_str(r#"{"analysis": {"max_summary_chars": 100}}"#).unwrap();

        assert_eq!(parsed.analysis.max_summary_chars, 100);
        assert_eq!(parsed.analysis.sender_scan_lines, 15);
        assert_eq!(parsed.dates.weights.early_lines, 40);
    }
}
