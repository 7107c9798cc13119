//! Reply suggestion generation.
//!
//! Fixed priority/aggregation procedure: one primary response chosen by
//! the resolved stage, then independent appends per orthogonal intent,
//! then a generic fallback if nothing fired, then a shipping-data nudge
//! when the conversation has moved past the opening and shipping was not
//! already addressed. Output order is stable and never empty; it encodes
//! suggested priority for the operator, not a hard score.

use crate::domain::analysis::{AnalysisResult, ConversationStage, Sentiment};
use crate::domain::lexicon::Intent;
use crate::domain::memory::ConversationMemory;
use crate::domain::pricing::PriceBook;
use serde::{Deserialize, Serialize};

/// One suggested reply: template text with variables substituted, plus a
/// fixed rationale so the operator can see why it was suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCandidate {
    pub title: String,
    pub content: String,
    pub rationale: String,
}

impl ResponseCandidate {
    fn new(title: &str, content: String, rationale: &str) -> Self {
        Self {
            title: title.to_string(),
            content,
            rationale: rationale.to_string(),
        }
    }
}

/// Generates the ordered candidate list for one analyzed capture.
#[derive(Debug, Clone, Default)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the stage-primary, intent-append, fallback and nudge passes.
    pub fn generate(
        &self,
        analysis: &AnalysisResult,
        memory: Option<&ConversationMemory>,
        price_book: &PriceBook,
    ) -> Vec<ResponseCandidate> {
        let mut responses = Vec::new();

        if let Some(primary) = self.stage_response(analysis, memory, price_book) {
            responses.push(primary);
        }

        self.append_intent_responses(analysis, &mut responses);

        if responses.is_empty() {
            responses.push(generic_price_list());
        }

        // Closing nudge: once past the opening, make sure shipping data
        // gets requested unless the customer already brought shipping up.
        if analysis.conversation_stage != ConversationStage::Initial
            && !analysis.has_intent(Intent::Shipping)
        {
            responses.push(shipping_data_request());
        }

        responses
    }

    /// One canonical template per stage. The initial-stage greeting only
    /// fires on an actual greeting; a capture with no signals at all
    /// falls through to the generic fallback instead.
    fn stage_response(
        &self,
        analysis: &AnalysisResult,
        memory: Option<&ConversationMemory>,
        price_book: &PriceBook,
    ) -> Option<ResponseCandidate> {
        match analysis.conversation_stage {
            ConversationStage::Initial => {
                if analysis.has_intent(Intent::Greeting) {
                    Some(greeting(memory))
                } else {
                    None
                }
            }
            ConversationStage::Inquiry => {
                Some(price_overview(analysis.entities.requested_product.as_deref()))
            }
            ConversationStage::Negotiation => Some(quote_offer(analysis, price_book)),
            ConversationStage::Payment => Some(payment_details()),
            ConversationStage::Closing => Some(order_confirmation(memory)),
        }
    }

    /// Independent appends for orthogonal intents, in fixed order.
    fn append_intent_responses(
        &self,
        analysis: &AnalysisResult,
        responses: &mut Vec<ResponseCandidate>,
    ) {
        if analysis.has_intent(Intent::Shipping) {
            responses.push(shipping_info());
        }
        if analysis.has_intent(Intent::DeliveryTime) {
            responses.push(delivery_time_info());
        }
        if analysis.has_intent(Intent::DesignFormat) {
            responses.push(design_format_info());
        }
        if analysis.has_intent(Intent::Discount) && analysis.sentiment == Sentiment::Hesitant {
            responses.push(discount_rebuttal());
        }
    }
}

fn greeting(memory: Option<&ConversationMemory>) -> ResponseCandidate {
    let known_name = memory.and_then(|m| m.facts.name.as_deref());
    let content = match known_name {
        Some(name) => format!(
            "¡Hola {name}! Qué bueno verte de nuevo. ¿En qué te puedo ayudar hoy? \
             Trabajamos etiquetas, llaveros y medallas grabadas."
        ),
        None => "¡Hola! Gracias por escribirnos. Trabajamos etiquetas, llaveros y \
                 medallas grabadas personalizadas. ¿Qué producto te interesa?"
            .to_string(),
    };
    ResponseCandidate::new(
        "Saludo inicial",
        content,
        "El cliente saludó y la conversación recién empieza.",
    )
}

fn price_overview(product: Option<&str>) -> ResponseCandidate {
    let content = match product {
        Some(product) => format!(
            "¡Gracias por tu consulta! Los precios de {product} dependen de la \
             cantidad y el material. Contame cuántas unidades necesitás y te paso \
             el presupuesto exacto."
        ),
        None => "¡Gracias por tu consulta! Te paso la lista de precios: trabajamos \
                 por cantidad y material. ¿Qué producto y cuántas unidades estás \
                 necesitando?"
            .to_string(),
    };
    ResponseCandidate::new(
        "Consulta de precio",
        content,
        "El cliente preguntó precios; falta cantidad para cotizar en firme.",
    )
}

fn quote_offer(analysis: &AnalysisResult, price_book: &PriceBook) -> ResponseCandidate {
    let entities = &analysis.entities;
    // Negotiation stage guarantees product and quantity are present.
    let product = entities.requested_product.as_deref().unwrap_or("el producto");
    let quantity = entities.requested_quantity.unwrap_or(0);

    let content = match entities.requested_material.as_deref() {
        Some(material) => match price_book.quote(product, material, quantity) {
            Some(quote) => format!(
                "¡Perfecto! {quantity} {product} en {material} quedan en \
                 ${unit:.0} c/u, total ${total:.0}. ¿Avanzamos?",
                unit = quote.unit_price,
                total = quote.total,
            ),
            None => format!(
                "¡Perfecto! {quantity} {product} en {material}: dejame confirmarte \
                 el precio exacto y te escribo en un rato."
            ),
        },
        None => format!(
            "¡Genial! Para cotizarte {quantity} {product} me falta saber el \
             material: tenemos ecocuero, cuero, madera, acrílico y aluminio. \
             ¿Cuál preferís?"
        ),
    };

    ResponseCandidate::new(
        "Cotización",
        content,
        "Hay producto y cantidad concretos; corresponde cotizar.",
    )
}

fn payment_details() -> ResponseCandidate {
    ResponseCandidate::new(
        "Formas de pago",
        "Aceptamos transferencia, Mercado Pago y efectivo. Para confirmar el \
         pedido pedimos una seña del 50% y el resto contra entrega. Te paso el \
         alias cuando me confirmes."
            .to_string(),
        "El cliente preguntó cómo pagar.",
    )
}

fn order_confirmation(memory: Option<&ConversationMemory>) -> ResponseCandidate {
    let known_phone = memory.and_then(|m| m.facts.phone.as_deref());
    let content = match known_phone {
        Some(_) => "¡Buenísimo, pedido confirmado! Te mando el detalle y el alias \
                    para la seña. Cualquier cambio avisame por acá."
            .to_string(),
        None => "¡Buenísimo, pedido confirmado! Pasame un teléfono de contacto y \
                 te mando el detalle con el alias para la seña."
            .to_string(),
    };
    ResponseCandidate::new(
        "Confirmación de pedido",
        content,
        "El cliente confirmó; cerrar el pedido y coordinar la seña.",
    )
}

fn shipping_info() -> ResponseCandidate {
    ResponseCandidate::new(
        "Envíos",
        "Hacemos envíos a todo el país por correo (llega en 3 a 5 días hábiles) \
         y moto en el día dentro de la ciudad. También podés retirar por el \
         taller sin cargo."
            .to_string(),
        "El cliente preguntó por envíos.",
    )
}

fn delivery_time_info() -> ResponseCandidate {
    ResponseCandidate::new(
        "Tiempos de producción",
        "Los pedidos estándar demoran 5 a 7 días hábiles desde la seña. Si lo \
         necesitás antes avisame y vemos si entra en producción rápida."
            .to_string(),
        "El cliente preguntó por plazos de entrega.",
    )
}

fn design_format_info() -> ResponseCandidate {
    ResponseCandidate::new(
        "Formato del diseño",
        "El logo lo recibimos ideal en vector (PDF, SVG o CDR). Si solo tenés \
         PNG o JPG mandalo igual: si está en buena calidad lo adaptamos sin \
         costo."
            .to_string(),
        "El cliente preguntó por el formato del archivo de diseño.",
    )
}

fn discount_rebuttal() -> ResponseCandidate {
    ResponseCandidate::new(
        "Respuesta a objeción de precio",
        "Entiendo que el precio es importante. El grabado es láser y el material \
         es de primera, por eso dura años. A partir de mayor cantidad el precio \
         unitario baja bastante: ¿te cotizo una cantidad más grande?"
            .to_string(),
        "El cliente busca descuento y se mostró dudoso por el precio.",
    )
}

fn generic_price_list() -> ResponseCandidate {
    ResponseCandidate::new(
        "Lista de precios",
        "¡Hola! Gracias por tu mensaje. Te comparto nuestra lista de precios de \
         etiquetas, llaveros y medallas grabadas. ¿Te interesa algún producto en \
         particular?"
            .to_string(),
        "No se detectó una consulta concreta; se sugiere la lista general.",
    )
}

fn shipping_data_request() -> ResponseCandidate {
    ResponseCandidate::new(
        "Pedir datos de envío",
        "Para ir adelantando, ¿me pasás código postal o zona? Así te confirmo \
         costo y tiempo de envío junto con el pedido."
            .to_string(),
        "La conversación avanzó y todavía no se habló de envío.",
    )
}
