//! Stage and sentiment classification.
//!
//! Both classifications are total and deterministic: a fixed priority
//! order is evaluated top to bottom and the first match wins. Stage is
//! re-resolved fresh on every call from the current extraction only;
//! prior memory never feeds the cascade.

use super::extractor::Extraction;
use super::result::{ConversationStage, Sentiment, Urgency};
use crate::domain::lexicon::{Intent, SENTIMENT_RULES};

/// Assigns exactly one sentiment/urgency pair.
///
/// Rules are checked in the lexicon's declared order; urgency language
/// short-circuits everything else.
pub fn classify_sentiment(full_text: &str) -> (Sentiment, Urgency) {
    for rule in SENTIMENT_RULES.iter() {
        if rule.pattern.is_match(full_text) {
            return (rule.sentiment, rule.urgency);
        }
    }
    (Sentiment::Neutral, Urgency::Normal)
}

/// Resolves the conversation stage from the current extraction.
///
/// Fixed cascade, evaluated top to bottom:
/// 1. confirmation → closing
/// 2. payment inquiry → payment
/// 3. product and quantity both extracted → negotiation
/// 4. price inquiry → inquiry
/// 5. greeting → initial
/// 6. default → initial
pub fn resolve_stage(extraction: &Extraction) -> ConversationStage {
    if extraction.intents.contains(&Intent::Confirmation) {
        ConversationStage::Closing
    } else if extraction.intents.contains(&Intent::Payment) {
        ConversationStage::Payment
    } else if extraction.entities.requested_product.is_some()
        && extraction.entities.requested_quantity.is_some()
    {
        ConversationStage::Negotiation
    } else if extraction.intents.contains(&Intent::PriceInquiry) {
        ConversationStage::Inquiry
    } else {
        // Greeting-only and no-signal captures both sit at the opening.
        ConversationStage::Initial
    }
}
