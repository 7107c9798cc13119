//! Per-client conversational memory.
//!
//! One `ConversationMemory` per client identifier, created lazily on
//! first analysis and appended to on every subsequent one. Interaction
//! history is append-only; client facts are overwritten only by new
//! non-empty values, so a later null extraction never erases a known
//! fact. The engine itself never deletes memory; clearing is a
//! caller-invoked maintenance operation.

use crate::domain::analysis::{ConversationStage, ExtractedEntities};
use crate::domain::foundation::Timestamp;
use crate::domain::lexicon::Intent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One analyzed capture, as remembered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// When the analysis ran.
    pub occurred_at: Timestamp,
    /// Truncated extracted text, for operator review.
    pub excerpt: String,
    /// Intents detected on that capture.
    pub intents: BTreeSet<Intent>,
    /// Stage resolved on that capture.
    pub stage: ConversationStage,
}

impl InteractionRecord {
    /// Creates a record, truncating the text to `excerpt_len` characters.
    pub fn new(
        text: &str,
        intents: BTreeSet<Intent>,
        stage: ConversationStage,
        excerpt_len: usize,
    ) -> Self {
        Self {
            occurred_at: Timestamp::now(),
            excerpt: truncate_chars(text, excerpt_len),
            intents,
            stage,
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Durable facts about one client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFacts {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl ClientFacts {
    /// Merges newly extracted values, preferring existing non-null facts
    /// when the new extraction is null.
    pub fn merge(&mut self, entities: &ExtractedEntities) {
        if let Some(name) = &entities.client_name {
            if !name.is_empty() {
                self.name = Some(name.clone());
            }
        }
        if let Some(phone) = &entities.phone_number {
            if !phone.is_empty() {
                self.phone = Some(phone.clone());
            }
        }
    }
}

/// Accumulated memory for one client identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMemory {
    /// Append-only interaction history, oldest first.
    pub interactions: Vec<InteractionRecord>,
    /// Durable client facts.
    pub facts: ClientFacts,
    /// Previously requested products, duplicates allowed, request order.
    pub last_products: Vec<String>,
}

impl ConversationMemory {
    /// Creates an empty memory record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one interaction and folds its extraction into the facts.
    pub fn record(&mut self, interaction: InteractionRecord, entities: &ExtractedEntities) {
        self.facts.merge(entities);
        if let Some(product) = &entities.requested_product {
            self.last_products.push(product.clone());
        }
        self.interactions.push(interaction);
    }

    /// Builds the operator-facing summary view.
    pub fn summary(&self) -> MemorySummary {
        MemorySummary {
            total_interactions: self.interactions.len(),
            client_info: self.facts.clone(),
            known_products: dedup_preserving_order(&self.last_products),
        }
    }
}

fn dedup_preserving_order(products: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.as_str()))
        .cloned()
        .collect()
}

/// Operator-facing memory summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySummary {
    pub total_interactions: usize,
    pub client_info: ClientFacts,
    /// De-duplicated product list, first-seen order.
    pub known_products: Vec<String>,
}
