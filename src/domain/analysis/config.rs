//! Tunable thresholds for the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Thresholds used by the normalizer and extractor.
///
/// Defaults match the behavior the operator tool shipped with; the
/// configuration layer can override them from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lines shorter than this many characters are discarded as OCR noise.
    pub min_line_len: usize,
    /// Lines longer than this are collected as candidate customer
    /// messages even without a question mark.
    pub message_line_len: usize,
    /// Minimum digit-run length accepted as a phone number.
    pub phone_min_digits: usize,
    /// Maximum digit-run length accepted as a phone number.
    pub phone_max_digits: usize,
    /// Interaction history keeps at most this many characters of text.
    pub excerpt_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_line_len: 3,
            message_line_len: 20,
            phone_min_digits: 10,
            phone_max_digits: 13,
            excerpt_len: 120,
        }
    }
}
