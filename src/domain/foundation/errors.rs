//! Error types for the engine.
//!
//! The analysis pipeline is total: missing patterns become absent values
//! and every classification resolves to some enum variant. The only
//! engine-level failure is receiving no usable text from the OCR step.

use thiserror::Error;

/// Errors that can occur when analyzing an OCR capture.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The OCR step produced no text, or only whitespace.
    #[error("OCR capture contains no usable text")]
    EmptyCapture,

    /// The upstream OCR step reported a failure instead of text.
    #[error("OCR extraction failed: {0}")]
    OcrFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_capture_displays_correctly() {
        let err = EngineError::EmptyCapture;
        assert_eq!(format!("{}", err), "OCR capture contains no usable text");
    }

    #[test]
    fn ocr_failed_includes_reason() {
        let err = EngineError::OcrFailed("timeout".to_string());
        assert_eq!(format!("{}", err), "OCR extraction failed: timeout");
    }
}
