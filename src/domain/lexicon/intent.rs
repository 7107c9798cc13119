//! Intent labels and their matching patterns.
//!
//! One pattern per intent, matched independently against the lowercased
//! full text of a capture. Several intents can fire on the same message;
//! ranking is the classifier's job, not the lexicon's.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A discrete category of customer communicative purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Asking what something costs.
    PriceInquiry,
    /// Asking how long production or delivery takes.
    DeliveryTime,
    /// Asking about minimum order size or wholesale terms.
    MinimumQuantity,
    /// Asking whether/how orders are shipped.
    Shipping,
    /// Asking which materials are available.
    MaterialInquiry,
    /// Asking about sizes or dimensions.
    SizeInquiry,
    /// Asking about available colors.
    ColorInquiry,
    /// Asking about logo/design file requirements.
    DesignFormat,
    /// Asking how to pay.
    Payment,
    /// Confirming the order.
    Confirmation,
    /// Opening greeting.
    Greeting,
    /// Closing/thanks.
    Farewell,
    /// Seeking a discount or pushing back on price.
    Discount,
}

impl Intent {
    /// Returns a short label for the intent, suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceInquiry => "price inquiry",
            Self::DeliveryTime => "delivery time",
            Self::MinimumQuantity => "minimum quantity",
            Self::Shipping => "shipping",
            Self::MaterialInquiry => "material inquiry",
            Self::SizeInquiry => "size inquiry",
            Self::ColorInquiry => "color inquiry",
            Self::DesignFormat => "design format",
            Self::Payment => "payment",
            Self::Confirmation => "confirmation",
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Discount => "discount",
        }
    }

    /// All intent labels, in declaration order.
    pub fn all() -> &'static [Intent] {
        &[
            Self::PriceInquiry,
            Self::DeliveryTime,
            Self::MinimumQuantity,
            Self::Shipping,
            Self::MaterialInquiry,
            Self::SizeInquiry,
            Self::ColorInquiry,
            Self::DesignFormat,
            Self::Payment,
            Self::Confirmation,
            Self::Greeting,
            Self::Farewell,
            Self::Discount,
        ]
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Intent → pattern table, compiled once at first use.
///
/// Patterns accept both accented and accent-stripped spellings since OCR
/// output frequently loses diacritics.
pub static INTENT_PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    let table: &[(Intent, &str)] = &[
        (
            Intent::PriceInquiry,
            r"cu[aá]nto\s+(sale|salen|cuesta|cuestan|vale|valen)|precio|presupuesto|cotiza",
        ),
        (
            Intent::DeliveryTime,
            r"demora|tardan?\b|tiempo de entrega|para cu[aá]ndo|cu[aá]ndo (está|estaría|estar[ií]a|lo tengo)|d[ií]as h[aá]biles",
        ),
        (
            Intent::MinimumQuantity,
            r"m[ií]nim[oa]|por mayor|mayorista|al por mayor",
        ),
        (
            Intent::Shipping,
            r"env[ií]os?\b|env[ií]an|hacen env|llega a|por correo|retir[oa]r?\b",
        ),
        (
            Intent::MaterialInquiry,
            r"qu[eé] materiales?|materiales? (tienen|hay|usan|manejan)|de qu[eé] material",
        ),
        (
            Intent::SizeInquiry,
            r"medidas?\b|tama[ñn]os?\b|dimensiones|cent[ií]metros|\bcms?\b",
        ),
        (Intent::ColorInquiry, r"colores?\b"),
        (
            Intent::DesignFormat,
            r"logo|dise[ñn]o|archivo|vector|formato|\bpng\b|\bpdf\b|corel|illustrator",
        ),
        (
            Intent::Payment,
            r"c[oó]mo (se paga|pago|abono)|formas? de pago|se[ñn]a\b|transferencia|efectivo|mercado\s?pago|tarjeta|\bcbu\b|\balias\b",
        ),
        (
            Intent::Confirmation,
            r"confirmo|confirmad[oa]|lo quiero|los quiero|me lo llevo|quiero encargar|hagamos el pedido|dale,? avanc",
        ),
        (
            Intent::Greeting,
            r"\bhola\b|buen d[ií]a|buen[ao]s (d[ií]as|tardes|noches)|\bbuenas\b|qu[eé] tal",
        ),
        (
            Intent::Farewell,
            r"\bgracias\b|\bchau\b|hasta luego|nos vemos|saludos",
        ),
        (
            Intent::Discount,
            r"descuento|rebaja|m[aá]s barato|mejor[aá]s? el precio|bonificaci[oó]n|oferta",
        ),
    ];

    table
        .iter()
        .map(|(intent, pattern)| {
            let re = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid lexicon pattern for {intent:?}: {e}"));
            (*intent, re)
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_for(intent: Intent) -> &'static Regex {
        INTENT_PATTERNS
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, re)| re)
            .expect("intent missing from pattern table")
    }

    #[test]
    fn every_intent_has_a_pattern() {
        for intent in Intent::all() {
            assert!(
                INTENT_PATTERNS.iter().any(|(i, _)| i == intent),
                "no pattern for {intent:?}"
            );
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&Intent::PriceInquiry).unwrap();
        assert_eq!(json, "\"price_inquiry\"");
    }

    mod pattern_coverage {
        use super::*;

        #[test]
        fn price_inquiry_matches_common_phrasings() {
            let re = pattern_for(Intent::PriceInquiry);
            assert!(re.is_match("cuanto sale el llavero"));
            assert!(re.is_match("cuánto cuesta?"));
            assert!(re.is_match("me pasas el precio?"));
            assert!(re.is_match("necesito una cotizacion"));
        }

        #[test]
        fn price_inquiry_ignores_unrelated_text() {
            let re = pattern_for(Intent::PriceInquiry);
            assert!(!re.is_match("hola, buen dia"));
        }

        #[test]
        fn delivery_time_matches_both_accented_and_plain() {
            let re = pattern_for(Intent::DeliveryTime);
            assert!(re.is_match("cuanto demora el pedido"));
            assert!(re.is_match("para cuándo estaría?"));
            assert!(re.is_match("para cuando lo tengo"));
        }

        #[test]
        fn greeting_matches_hola_as_word_only() {
            let re = pattern_for(Intent::Greeting);
            assert!(re.is_match("hola, como estas"));
            assert!(!re.is_match("rockola del barrio"));
        }

        #[test]
        fn confirmation_matches_order_commitment() {
            let re = pattern_for(Intent::Confirmation);
            assert!(re.is_match("listo, confirmo el pedido"));
            assert!(re.is_match("los quiero para el viernes"));
        }

        #[test]
        fn payment_matches_payment_channels() {
            let re = pattern_for(Intent::Payment);
            assert!(re.is_match("aceptan mercadopago?"));
            assert!(re.is_match("te paso por transferencia"));
            assert!(re.is_match("como se paga"));
        }

        #[test]
        fn discount_matches_price_pushback() {
            let re = pattern_for(Intent::Discount);
            assert!(re.is_match("me haces un descuento?"));
            assert!(re.is_match("no hay algo mas barato"));
        }

        #[test]
        fn shipping_matches_delivery_questions() {
            let re = pattern_for(Intent::Shipping);
            assert!(re.is_match("hacen envios al interior?"));
            assert!(re.is_match("se puede retirar por el local?"));
        }

        #[test]
        fn design_format_matches_file_questions() {
            let re = pattern_for(Intent::DesignFormat);
            assert!(re.is_match("en que formato te mando el logo"));
            assert!(re.is_match("tengo el archivo en pdf"));
        }
    }
}
