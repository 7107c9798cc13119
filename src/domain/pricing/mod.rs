//! Price book keyed by (product, material) with quantity tiers.
//!
//! Lookup uses the nearest-tier-up rule: the smallest listed tier
//! quantity that is >= the requested quantity; if the request exceeds
//! every tier, the largest tier applies.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One quantity tier: unit price in ARS at this tier quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub quantity: u32,
    pub unit_price: f64,
}

/// A resolved quote for a concrete request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The tier quantity the price was read from.
    pub tier_quantity: u32,
    pub unit_price: f64,
    /// Unit price times the requested quantity.
    pub total: f64,
}

/// Price table keyed by (product, material).
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    tiers: HashMap<(String, String), Vec<PriceTier>>,
}

impl PriceBook {
    /// Creates an empty price book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds tiers for a (product, material) pair. Tiers are stored in
    /// ascending quantity order regardless of input order.
    pub fn with_tiers(
        mut self,
        product: &str,
        material: &str,
        mut tiers: Vec<PriceTier>,
    ) -> Self {
        tiers.sort_by_key(|tier| tier.quantity);
        self.tiers
            .insert((product.to_string(), material.to_string()), tiers);
        self
    }

    /// Resolves a quote by the nearest-tier-up rule.
    ///
    /// Returns `None` when the (product, material) pair is not priced or
    /// has no tiers.
    pub fn quote(&self, product: &str, material: &str, quantity: u32) -> Option<Quote> {
        let tiers = self
            .tiers
            .get(&(product.to_string(), material.to_string()))?;

        let tier = tiers
            .iter()
            .find(|tier| tier.quantity >= quantity)
            .or_else(|| tiers.last())?;

        Some(Quote {
            tier_quantity: tier.quantity,
            unit_price: tier.unit_price,
            total: tier.unit_price * f64::from(quantity),
        })
    }
}

/// The default price book the operator tool ships with.
pub static DEFAULT_PRICE_BOOK: Lazy<PriceBook> = Lazy::new(|| {
    fn tier(quantity: u32, unit_price: f64) -> PriceTier {
        PriceTier {
            quantity,
            unit_price,
        }
    }

    PriceBook::new()
        .with_tiers(
            "etiquetas",
            "ecocuero",
            vec![tier(50, 95.0), tier(100, 85.0), tier(200, 72.0), tier(500, 60.0)],
        )
        .with_tiers(
            "etiquetas",
            "cuero",
            vec![tier(50, 140.0), tier(100, 125.0), tier(200, 110.0), tier(500, 95.0)],
        )
        .with_tiers(
            "llaveros",
            "madera",
            vec![tier(25, 220.0), tier(50, 190.0), tier(100, 160.0), tier(250, 135.0)],
        )
        .with_tiers(
            "llaveros",
            "acrilico",
            vec![tier(25, 250.0), tier(50, 215.0), tier(100, 180.0), tier(250, 150.0)],
        )
        .with_tiers(
            "medallas",
            "aluminio",
            vec![tier(10, 480.0), tier(25, 430.0), tier(50, 390.0), tier(100, 350.0)],
        )
});
