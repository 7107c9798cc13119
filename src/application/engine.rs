//! Engine façade.
//!
//! The only entry point external callers use. One analysis call runs the
//! whole pipeline to completion before returning: normalize, extract,
//! classify, read memory, generate, write memory. The engine is fully
//! synchronous; the OCR step that produces the input text is an external
//! collaborator and is never awaited here.

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::analysis::{
    classify_sentiment, extract, normalize, resolve_stage, AnalysisResult,
};
use crate::domain::foundation::EngineError;
use crate::domain::memory::{InteractionRecord, MemorySummary};
use crate::domain::pricing::{PriceBook, DEFAULT_PRICE_BOOK};
use crate::domain::response::{ResponseCandidate, ResponseGenerator};
use crate::ports::MemoryStore;
use serde::{Deserialize, Serialize};

/// Output of the external OCR collaborator, consumed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrCapture {
    /// Extracted text.
    pub text: String,
    /// Reported extraction confidence, 0-100. Opaque to the engine;
    /// carried through for the operator and for logging only.
    pub confidence: f32,
}

impl OcrCapture {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Combined result of one successful analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineReport {
    /// Per-capture analysis.
    pub analysis: AnalysisResult,
    /// Ranked reply suggestions, never empty.
    pub responses: Vec<ResponseCandidate>,
    /// Memory summary after this interaction was recorded.
    pub memory: MemorySummary,
}

/// Outer result envelope for upstream consumers.
///
/// On failure the analysis is absent but `responses` still carries one
/// usable fallback template, so a broken capture still leaves the
/// operator with an actionable suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<EngineReport>,
    pub responses: Vec<ResponseCandidate>,
}

/// Orchestrates the analysis pipeline over a pluggable memory store.
pub struct ConversationEngine {
    store: Arc<dyn MemoryStore>,
    config: EngineConfig,
    price_book: PriceBook,
    generator: ResponseGenerator,
}

impl ConversationEngine {
    /// Creates an engine with default configuration and the shipped
    /// price book.
    pub fn new(store: Arc<dyn MemoryStore>) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
            price_book: DEFAULT_PRICE_BOOK.clone(),
            generator: ResponseGenerator::new(),
        }
    }

    /// Overrides the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the price book.
    pub fn with_price_book(mut self, price_book: PriceBook) -> Self {
        self.price_book = price_book;
        self
    }

    /// Analyzes one OCR capture for the given client identifier.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyCapture` when the capture holds no
    /// usable text. Everything else is total: missing patterns become
    /// absent values and every classification resolves.
    pub fn analyze(
        &self,
        client_id: &str,
        capture: &OcrCapture,
    ) -> Result<EngineReport, EngineError> {
        if capture.text.trim().is_empty() {
            return Err(EngineError::EmptyCapture);
        }

        let analysis_config = &self.config.analysis;
        let normalized = normalize(&capture.text, analysis_config);
        let extraction = extract(&capture.text, &normalized, analysis_config);
        let (sentiment, urgency) = classify_sentiment(&normalized.full_text);
        let stage = resolve_stage(&extraction);

        debug!(
            client_id,
            confidence = capture.confidence,
            intents = extraction.intents.len(),
            %stage,
            "capture analyzed"
        );

        let analysis = AnalysisResult {
            detected_intents: extraction.intents.clone(),
            entities: extraction.entities.clone(),
            sentiment,
            urgency,
            conversation_stage: stage,
            client_messages: normalized.client_messages,
            product_ambiguous: extraction.product_ambiguous,
        };

        let prior_memory = self.store.recall(client_id);
        let responses = self
            .generator
            .generate(&analysis, prior_memory.as_ref(), &self.price_book);

        let interaction = InteractionRecord::new(
            &capture.text,
            extraction.intents,
            stage,
            analysis_config.excerpt_len,
        );
        self.store.record(client_id, interaction, &extraction.entities);

        let memory = self.store.summary(client_id).unwrap_or_default();

        info!(
            client_id,
            %stage,
            suggestions = responses.len(),
            total_interactions = memory.total_interactions,
            "analysis complete"
        );

        Ok(EngineReport {
            analysis,
            responses,
            memory,
        })
    }

    /// Like [`analyze`](Self::analyze), but degrades gracefully: on
    /// failure the envelope still carries one fallback suggestion.
    pub fn analyze_or_fallback(&self, client_id: &str, capture: &OcrCapture) -> AnalysisEnvelope {
        match self.analyze(client_id, capture) {
            Ok(report) => AnalysisEnvelope {
                success: true,
                error: None,
                responses: report.responses.clone(),
                report: Some(report),
            },
            Err(err) => self.failure_envelope(err),
        }
    }

    /// Builds the failure envelope for an engine or upstream OCR error.
    pub fn failure_envelope(&self, error: EngineError) -> AnalysisEnvelope {
        AnalysisEnvelope {
            success: false,
            error: Some(error.to_string()),
            report: None,
            responses: vec![fallback_response()],
        }
    }

    /// Operator maintenance: memory summary for a client identifier.
    pub fn memory_summary(&self, client_id: &str) -> Option<MemorySummary> {
        self.store.summary(client_id)
    }

    /// Operator maintenance: clears a client's memory. Returns true if
    /// anything was removed.
    pub fn clear_memory(&self, client_id: &str) -> bool {
        info!(client_id, "clearing client memory");
        self.store.clear(client_id)
    }
}

/// The one suggestion a failed analysis still offers.
fn fallback_response() -> ResponseCandidate {
    ResponseCandidate {
        title: "Lista de precios".to_string(),
        content: "¡Hola! Gracias por tu mensaje. Te comparto nuestra lista de \
                  precios de etiquetas, llaveros y medallas grabadas. ¿Te \
                  interesa algún producto en particular?"
            .to_string(),
        rationale: "No se pudo analizar la captura; se sugiere la respuesta \
                    general."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMemoryStore;
    use crate::domain::analysis::{ConversationStage, Sentiment};
    use crate::domain::lexicon::Intent;

    fn engine() -> ConversationEngine {
        ConversationEngine::new(Arc::new(InMemoryMemoryStore::new()))
    }

    fn capture(text: &str) -> OcrCapture {
        OcrCapture::new(text, 87.5)
    }

    #[test]
    fn empty_capture_is_the_only_failure() {
        let engine = engine();
        let err = engine.analyze("wa-1", &capture("   \n  ")).unwrap_err();
        assert_eq!(err, EngineError::EmptyCapture);
    }

    #[test]
    fn failure_envelope_still_offers_a_suggestion() {
        let engine = engine();
        let envelope = engine.analyze_or_fallback("wa-1", &capture(""));

        assert!(!envelope.success);
        assert!(envelope.error.is_some());
        assert!(envelope.report.is_none());
        assert_eq!(envelope.responses.len(), 1);
    }

    #[test]
    fn successful_envelope_mirrors_the_report() {
        let engine = engine();
        let envelope = engine.analyze_or_fallback("wa-1", &capture("hola, precio?"));

        assert!(envelope.success);
        assert!(envelope.error.is_none());
        let report = envelope.report.expect("report missing");
        assert_eq!(report.responses, envelope.responses);
    }

    #[test]
    fn analysis_records_the_interaction() {
        let engine = engine();
        engine.analyze("wa-1", &capture("hola!")).unwrap();
        engine.analyze("wa-1", &capture("cuanto salen las etiquetas?")).unwrap();

        let summary = engine.memory_summary("wa-1").unwrap();
        assert_eq!(summary.total_interactions, 2);
    }

    #[test]
    fn report_memory_counts_the_current_interaction() {
        let engine = engine();
        let report = engine.analyze("wa-1", &capture("hola!")).unwrap();
        assert_eq!(report.memory.total_interactions, 1);
    }

    #[test]
    fn clear_memory_resets_the_client() {
        let engine = engine();
        engine.analyze("wa-1", &capture("hola!")).unwrap();

        assert!(engine.clear_memory("wa-1"));
        assert!(engine.memory_summary("wa-1").is_none());
    }

    #[test]
    fn full_scenario_price_quantity_material() {
        let engine = engine();
        let report = engine
            .analyze("wa-1", &capture("Hola, cuanto sale 200 etiquetas en eco cuero?"))
            .unwrap();

        let analysis = &report.analysis;
        assert!(analysis.has_intent(Intent::PriceInquiry));
        assert!(analysis.has_intent(Intent::Greeting));
        assert_eq!(analysis.entities.requested_quantity, Some(200));
        assert_eq!(analysis.entities.requested_material.as_deref(), Some("ecocuero"));
        assert_eq!(analysis.entities.requested_product.as_deref(), Some("etiquetas"));
        assert_eq!(analysis.conversation_stage, ConversationStage::Negotiation);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);

        // The 200-unit ecocuero tier backs the primary suggestion.
        assert!(report.responses[0].content.contains("$72"));
    }
}
