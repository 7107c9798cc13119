//! Sentiment cue rules.
//!
//! An explicit ordered list rather than nested conditionals: the priority
//! order itself is a reviewable artifact. Rules are evaluated top to
//! bottom against the lowercased full text and the first match wins, so a
//! message carrying both urgency and price resistance reads as urgent.

use crate::domain::analysis::{Sentiment, Urgency};
use once_cell::sync::Lazy;
use regex::Regex;

/// One sentiment rule: the label pair it assigns and the cue pattern.
#[derive(Debug)]
pub struct SentimentRule {
    pub sentiment: Sentiment,
    pub urgency: Urgency,
    pub pattern: Regex,
}

/// Sentiment rules in priority order: urgent, then positive, then
/// hesitant. No match means neutral/normal.
pub static SENTIMENT_RULES: Lazy<Vec<SentimentRule>> = Lazy::new(|| {
    let table: &[(Sentiment, Urgency, &str)] = &[
        (
            Sentiment::Urgent,
            Urgency::High,
            r"urgente|lo necesito (ya|ahora|urgente)|para hoy\b|cuanto antes|apurad[oa]",
        ),
        (
            Sentiment::Positive,
            Urgency::Normal,
            r"me encanta|me encant[oó]|me gusta|genial|perfecto|excelente|buen[ií]simo|hermos[oa]|qu[eé] lindo",
        ),
        (
            Sentiment::Hesitant,
            Urgency::Normal,
            r"muy caro|car[ií]simo|no me alcanza|mucha plata|est[aá] caro|sale caro|no llego con",
        ),
    ];

    table
        .iter()
        .map(|(sentiment, urgency, pattern)| SentimentRule {
            sentiment: *sentiment,
            urgency: *urgency,
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid sentiment pattern for {sentiment:?}: {e}")),
        })
        .collect()
});
