//! Fixed pattern lexicon.
//!
//! Intent labels map to text-matching patterns; auxiliary matchers cover
//! entities (name, phone, quantity, product, material) and sentiment
//! cues. Tables are compiled once at first use and never mutated at
//! runtime. Keeping them as data rather than inline conditionals lets the
//! patterns be unit-tested in isolation from the classification cascade.

mod entity;
mod intent;
mod sentiment;

pub use entity::{
    Material, ProductFamily, MATERIALS, NAME_PATTERN, PRODUCT_FAMILIES, QUANTITY_PATTERN,
};
pub use intent::{Intent, INTENT_PATTERNS};
pub use sentiment::{SentimentRule, SENTIMENT_RULES};
