//! Charla Insight - Conversation Intelligence Engine
//!
//! Given OCR-extracted text from a chat-conversation screenshot, the
//! engine classifies the customer's intent, tracks the conversation
//! stage, extracts structured entities (name, phone, product, quantity,
//! material), estimates sentiment and urgency, and produces ranked,
//! templated reply suggestions while keeping per-client conversational
//! memory across screenshots.
//!
//! The engine is a deliberate best-effort heuristic assistant for a
//! human operator, not an autonomous agent: pattern tables, not trained
//! models.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use charla_insight::adapters::memory::InMemoryMemoryStore;
//! use charla_insight::application::{ConversationEngine, OcrCapture};
//!
//! let engine = ConversationEngine::new(Arc::new(InMemoryMemoryStore::new()));
//! let capture = OcrCapture::new("Hola, cuanto salen 100 llaveros?", 92.0);
//!
//! let report = engine.analyze("wa-5491165874421", &capture).unwrap();
//! assert!(!report.responses.is_empty());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
