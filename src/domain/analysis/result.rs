//! Analysis output types.
//!
//! Everything here is derived, stateless per call: one capture in, one
//! `AnalysisResult` out. All entity fields are optional; downstream
//! consumers must never assume presence.

use crate::domain::lexicon::Intent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The classifier's single best guess at where in the sales funnel the
/// current message sits.
///
/// Resolved by a fixed priority cascade; always exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    /// Opening contact, nothing concrete yet.
    Initial,
    /// Customer is asking about prices or options.
    Inquiry,
    /// A concrete product and quantity are on the table.
    Negotiation,
    /// Customer is asking how to pay.
    Payment,
    /// Customer confirmed the order.
    Closing,
}

impl ConversationStage {
    /// Returns a short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Inquiry => "inquiry",
            Self::Negotiation => "negotiation",
            Self::Payment => "payment",
            Self::Closing => "closing",
        }
    }

    /// All stages, in funnel order.
    pub fn all() -> &'static [ConversationStage] {
        &[
            Self::Initial,
            Self::Inquiry,
            Self::Negotiation,
            Self::Payment,
            Self::Closing,
        ]
    }
}

impl Default for ConversationStage {
    fn default() -> Self {
        Self::Initial
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Discrete sentiment label for the capture as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Neutral,
    Positive,
    Hesitant,
    Urgent,
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::Neutral
    }
}

/// Operator-facing urgency flag derived alongside sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Normal,
    High,
}

impl Default for Urgency {
    fn default() -> Self {
        Self::Normal
    }
}

/// Structured values pulled from the raw text. Every field is optional;
/// a failed match is an absent value, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Customer name, only when self-introduced.
    pub client_name: Option<String>,
    /// First 10-13 digit run found anywhere in the text.
    pub phone_number: Option<String>,
    /// Canonical product family name.
    pub requested_product: Option<String>,
    /// Positive quantity parsed from a digits-plus-unit-word run.
    pub requested_quantity: Option<u32>,
    /// Canonical material name.
    pub requested_material: Option<String>,
}

impl ExtractedEntities {
    /// Returns true when no entity was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.client_name.is_none()
            && self.phone_number.is_none()
            && self.requested_product.is_none()
            && self.requested_quantity.is_none()
            && self.requested_material.is_none()
    }
}

/// Full per-capture analysis: intents, entities, classification, and the
/// candidate customer message lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Every intent whose pattern matched. Independent per label.
    pub detected_intents: BTreeSet<Intent>,
    /// Extracted entity values.
    #[serde(flatten)]
    pub entities: ExtractedEntities,
    /// Single discrete sentiment label.
    pub sentiment: Sentiment,
    /// Urgency flag.
    pub urgency: Urgency,
    /// Resolved conversation stage. Always exactly one value.
    pub conversation_stage: ConversationStage,
    /// Lines judged likely to be the customer's own words.
    pub client_messages: Vec<String>,
    /// True when keywords from more than one product family were present
    /// and the priority order had to break the tie.
    pub product_ambiguous: bool,
}

impl AnalysisResult {
    /// Returns true if the given intent was detected.
    pub fn has_intent(&self, intent: Intent) -> bool {
        self.detected_intents.contains(&intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_defaults_to_initial() {
        assert_eq!(ConversationStage::default(), ConversationStage::Initial);
    }

    #[test]
    fn sentiment_defaults_to_neutral() {
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }

    #[test]
    fn urgency_defaults_to_normal() {
        assert_eq!(Urgency::default(), Urgency::Normal);
    }

    #[test]
    fn stage_serializes_to_snake_case() {
        let json = serde_json::to_string(&ConversationStage::Negotiation).unwrap();
        assert_eq!(json, "\"negotiation\"");
    }

    #[test]
    fn stage_deserializes_from_snake_case() {
        let stage: ConversationStage = serde_json::from_str("\"closing\"").unwrap();
        assert_eq!(stage, ConversationStage::Closing);
    }

    #[test]
    fn all_stages_have_labels() {
        for stage in ConversationStage::all() {
            assert!(!stage.label().is_empty());
        }
    }

    #[test]
    fn empty_entities_report_empty() {
        assert!(ExtractedEntities::default().is_empty());
    }

    #[test]
    fn entities_with_a_product_are_not_empty() {
        let entities = ExtractedEntities {
            requested_product: Some("etiquetas".to_string()),
            ..Default::default()
        };
        assert!(!entities.is_empty());
    }

    #[test]
    fn analysis_result_flattens_entities_in_json() {
        let result = AnalysisResult {
            detected_intents: BTreeSet::new(),
            entities: ExtractedEntities {
                requested_product: Some("llaveros".to_string()),
                ..Default::default()
            },
            sentiment: Sentiment::Neutral,
            urgency: Urgency::Normal,
            conversation_stage: ConversationStage::Initial,
            client_messages: vec![],
            product_ambiguous: false,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["requested_product"], "llaveros");
        assert_eq!(json["conversation_stage"], "initial");
    }
}
