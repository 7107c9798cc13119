//! Text normalization for OCR captures.
//!
//! Pure function of the input text: splits into candidate message lines
//! and produces the lowercased full-text view all lexicon matching runs
//! against. No entity extraction happens here.

use super::config::AnalysisConfig;

/// Normalized view of one OCR capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// The whole capture, lowercased, for pattern matching.
    pub full_text: String,
    /// Trimmed lines judged likely to be the customer's own words:
    /// interrogative, or longer than the message-line threshold. Shorter
    /// lines are mostly UI chrome and the business's own prior replies.
    pub client_messages: Vec<String>,
}

/// Normalizes a raw OCR capture.
pub fn normalize(raw: &str, config: &AnalysisConfig) -> NormalizedText {
    let client_messages = raw
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= config.min_line_len)
        .filter(|line| line.contains('?') || line.chars().count() > config.message_line_len)
        .map(str::to_string)
        .collect();

    NormalizedText {
        full_text: raw.to_lowercase(),
        client_messages,
    }
}
