//! Entity matchers: name, quantity, product families, materials.
//!
//! Name and quantity use compiled patterns; product and material use
//! keyword tables walked in declared priority order. Priority order is
//! part of the contract: when several families match, the first listed
//! wins, so reordering a table changes behavior.

use once_cell::sync::Lazy;
use regex::Regex;

/// Captures a name only when preceded by an explicit self-introduction.
///
/// Runs against the raw (non-lowercased) text so the capitalized capture
/// preserves the customer's own casing.
pub static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:soy|me llamo|mi nombre es)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñ]+(?:\s+[A-ZÁÉÍÓÚÑ][a-záéíóúñ]+)?)",
    )
    .expect("invalid name pattern")
});

/// Captures a digit run immediately followed by a unit word.
///
/// Unit words include the generic ones and the product-family nouns, so
/// "200 etiquetas" reads as a quantity of 200.
pub static QUANTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:unidades|unidad|piezas|pieza|etiquetas|llaveros|medallas|\bu\b)")
        .expect("invalid quantity pattern")
});

/// A product family: canonical name plus the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct ProductFamily {
    pub canonical: &'static str,
    pub keywords: &'static [&'static str],
}

/// Product families in priority order. First family with a matching
/// keyword wins.
pub const PRODUCT_FAMILIES: &[ProductFamily] = &[
    ProductFamily {
        canonical: "etiquetas",
        keywords: &["etiqueta", "label"],
    },
    ProductFamily {
        canonical: "llaveros",
        keywords: &["llavero", "keychain"],
    },
    ProductFamily {
        canonical: "medallas",
        keywords: &["medalla", "chapita"],
    },
];

/// A material: canonical name plus synonyms.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub canonical: &'static str,
    pub keywords: &'static [&'static str],
}

/// Materials in priority order.
///
/// "ecocuero" must precede "cuero": the phrase "eco cuero" also contains
/// the bare keyword, and the priority walk is what disambiguates it.
pub const MATERIALS: &[Material] = &[
    Material {
        canonical: "ecocuero",
        keywords: &["eco cuero", "eco-cuero", "ecocuero"],
    },
    Material {
        canonical: "cuero",
        keywords: &["cuero"],
    },
    Material {
        canonical: "madera",
        keywords: &["madera"],
    },
    Material {
        canonical: "acrilico",
        keywords: &["acrilico", "acrílico"],
    },
    Material {
        canonical: "aluminio",
        keywords: &["aluminio"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    mod name_pattern {
        use super::*;

        #[test]
        fn captures_after_soy() {
            let caps = NAME_PATTERN.captures("Hola, soy Marcela").unwrap();
            assert_eq!(&caps[1], "Marcela");
        }

        #[test]
        fn captures_after_me_llamo() {
            let caps = NAME_PATTERN.captures("me llamo Juan Pablo").unwrap();
            assert_eq!(&caps[1], "Juan Pablo");
        }

        #[test]
        fn requires_introduction_phrase() {
            assert!(NAME_PATTERN.captures("Marcela pregunta por llaveros").is_none());
        }

        #[test]
        fn requires_capitalized_name() {
            assert!(NAME_PATTERN.captures("soy cliente nuevo").is_none());
        }
    }

    mod quantity_pattern {
        use super::*;

        #[test]
        fn captures_digits_before_unit_word() {
            let caps = QUANTITY_PATTERN.captures("quiero 200 etiquetas").unwrap();
            assert_eq!(&caps[1], "200");
        }

        #[test]
        fn captures_digits_before_generic_unit() {
            let caps = QUANTITY_PATTERN.captures("serian 50 unidades").unwrap();
            assert_eq!(&caps[1], "50");
        }

        #[test]
        fn ignores_bare_numbers() {
            // A phone-looking number with no unit word is not a quantity.
            assert!(QUANTITY_PATTERN.captures("llamame al 1155443322").is_none());
        }
    }

    mod priority_tables {
        use super::*;

        #[test]
        fn ecocuero_is_listed_before_cuero() {
            let eco = MATERIALS.iter().position(|m| m.canonical == "ecocuero");
            let cuero = MATERIALS.iter().position(|m| m.canonical == "cuero");
            assert!(eco.unwrap() < cuero.unwrap());
        }

        #[test]
        fn etiquetas_is_the_top_product_family() {
            assert_eq!(PRODUCT_FAMILIES[0].canonical, "etiquetas");
        }

        #[test]
        fn every_family_has_keywords() {
            for family in PRODUCT_FAMILIES {
                assert!(!family.keywords.is_empty());
            }
            for material in MATERIALS {
                assert!(!material.keywords.is_empty());
            }
        }
    }
}
