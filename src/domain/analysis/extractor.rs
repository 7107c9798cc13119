//! Intent detection and entity extraction.
//!
//! Intent matching runs each lexicon pattern independently against the
//! lowercased full text; the result is the full matched set, undeduped
//! and unranked. Entity extraction runs against the raw text where
//! casing matters (names) and the lowercased view elsewhere. A missed
//! pattern yields an absent value, never an error.

use super::config::AnalysisConfig;
use super::normalizer::NormalizedText;
use super::result::ExtractedEntities;
use crate::domain::lexicon::{
    Intent, INTENT_PATTERNS, MATERIALS, NAME_PATTERN, PRODUCT_FAMILIES, QUANTITY_PATTERN,
};
use std::collections::BTreeSet;

/// Output of one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub intents: BTreeSet<Intent>,
    pub entities: ExtractedEntities,
    /// More than one product family's keywords were present; the
    /// priority order broke the tie.
    pub product_ambiguous: bool,
}

/// Runs intent detection and entity extraction over one capture.
pub fn extract(raw: &str, normalized: &NormalizedText, config: &AnalysisConfig) -> Extraction {
    let intents = detect_intents(&normalized.full_text);
    let (requested_product, product_ambiguous) = extract_product(&normalized.full_text);

    let entities = ExtractedEntities {
        client_name: extract_name(raw),
        phone_number: extract_phone(raw, config),
        requested_product,
        requested_quantity: extract_quantity(&normalized.full_text),
        requested_material: extract_material(&normalized.full_text),
    };

    Extraction {
        intents,
        entities,
        product_ambiguous,
    }
}

/// Tests every lexicon pattern independently; multiple intents may be
/// simultaneously true.
fn detect_intents(full_text: &str) -> BTreeSet<Intent> {
    INTENT_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(full_text))
        .map(|(intent, _)| *intent)
        .collect()
}

/// Name is captured only behind an explicit self-introduction phrase,
/// from the raw text so casing is preserved.
fn extract_name(raw: &str) -> Option<String> {
    NAME_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First maximal digit run whose length falls inside the configured
/// phone bounds. No validation beyond digit count.
fn extract_phone(raw: &str, config: &AnalysisConfig) -> Option<String> {
    let mut run = String::new();
    let mut runs = Vec::new();

    for c in raw.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else if !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }

    runs.into_iter()
        .find(|r| r.len() >= config.phone_min_digits && r.len() <= config.phone_max_digits)
}

/// Walks the product-family table in priority order; first family with a
/// present keyword wins. Also reports whether more than one family
/// matched, so the ambiguity can be surfaced to the operator.
fn extract_product(full_text: &str) -> (Option<String>, bool) {
    let matched: Vec<&str> = PRODUCT_FAMILIES
        .iter()
        .filter(|family| family.keywords.iter().any(|kw| full_text.contains(kw)))
        .map(|family| family.canonical)
        .collect();

    (
        matched.first().map(|canonical| canonical.to_string()),
        matched.len() > 1,
    )
}

/// First digit run immediately followed by a unit word, parsed as a
/// positive integer.
fn extract_quantity(full_text: &str) -> Option<u32> {
    QUANTITY_PATTERN
        .captures(full_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|qty| *qty > 0)
}

/// Walks the material table in priority order; first matching keyword
/// wins.
fn extract_material(full_text: &str) -> Option<String> {
    MATERIALS
        .iter()
        .find(|material| material.keywords.iter().any(|kw| full_text.contains(kw)))
        .map(|material| material.canonical.to_string())
}
