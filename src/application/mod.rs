//! Application layer: the engine façade.

mod engine;

pub use engine::{AnalysisEnvelope, ConversationEngine, EngineReport, OcrCapture};
