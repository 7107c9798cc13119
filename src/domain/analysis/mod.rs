//! Per-capture analysis pipeline: normalize, extract, classify.

mod classifier;
mod config;
mod extractor;
mod normalizer;
mod result;

pub use classifier::{classify_sentiment, resolve_stage};
pub use config::AnalysisConfig;
pub use extractor::{extract, Extraction};
pub use normalizer::{normalize, NormalizedText};
pub use result::{
    AnalysisResult, ConversationStage, ExtractedEntities, Sentiment, Urgency,
};
