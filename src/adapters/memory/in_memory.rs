//! In-process memory store.
//!
//! Backs the `MemoryStore` port with a `RwLock`-guarded table keyed by
//! client identifier. This is the store the engine ships with; memory
//! lives for the lifetime of the process with no eviction, expiry, or
//! size bound.
//!
//! # Panics
//!
//! Methods panic if an internal lock is poisoned, which only happens
//! after another thread panicked while holding it.

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use crate::domain::analysis::ExtractedEntities;
use crate::domain::memory::{ConversationMemory, InteractionRecord, MemorySummary};
use crate::ports::MemoryStore;

/// In-process `MemoryStore` backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryMemoryStore {
    clients: RwLock<HashMap<String, ConversationMemory>>,
}

impl InMemoryMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of clients with recorded memory.
    pub fn client_count(&self) -> usize {
        self.clients
            .read()
            .expect("InMemoryMemoryStore: clients lock poisoned")
            .len()
    }
}

impl MemoryStore for InMemoryMemoryStore {
    fn recall(&self, client_id: &str) -> Option<ConversationMemory> {
        self.clients
            .read()
            .expect("InMemoryMemoryStore: clients lock poisoned")
            .get(client_id)
            .cloned()
    }

    fn record(
        &self,
        client_id: &str,
        interaction: InteractionRecord,
        entities: &ExtractedEntities,
    ) {
        let mut clients = self
            .clients
            .write()
            .expect("InMemoryMemoryStore: clients write lock poisoned");
        let memory = clients.entry(client_id.to_string()).or_default();
        memory.record(interaction, entities);
        debug!(
            client_id,
            interactions = memory.interactions.len(),
            "recorded interaction"
        );
    }

    fn summary(&self, client_id: &str) -> Option<MemorySummary> {
        self.clients
            .read()
            .expect("InMemoryMemoryStore: clients lock poisoned")
            .get(client_id)
            .map(ConversationMemory::summary)
    }

    fn clear(&self, client_id: &str) -> bool {
        let removed = self
            .clients
            .write()
            .expect("InMemoryMemoryStore: clients write lock poisoned")
            .remove(client_id)
            .is_some();
        if removed {
            debug!(client_id, "cleared client memory");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ConversationStage;
    use std::collections::BTreeSet;

    fn interaction(text: &str) -> InteractionRecord {
        InteractionRecord::new(text, BTreeSet::new(), ConversationStage::Initial, 120)
    }

    #[test]
    fn recall_on_unknown_client_returns_none() {
        let store = InMemoryMemoryStore::new();
        assert!(store.recall("wa-123").is_none());
    }

    #[test]
    fn record_creates_memory_lazily() {
        let store = InMemoryMemoryStore::new();
        store.record("wa-123", interaction("hola"), &ExtractedEntities::default());

        let memory = store.recall("wa-123").unwrap();
        assert_eq!(memory.interactions.len(), 1);
        assert_eq!(store.client_count(), 1);
    }

    #[test]
    fn second_record_appends_instead_of_recreating() {
        let store = InMemoryMemoryStore::new();
        store.record("wa-123", interaction("hola"), &ExtractedEntities::default());
        store.record("wa-123", interaction("precio?"), &ExtractedEntities::default());

        assert_eq!(store.recall("wa-123").unwrap().interactions.len(), 2);
        assert_eq!(store.client_count(), 1);
    }

    #[test]
    fn clients_are_isolated_by_identifier() {
        let store = InMemoryMemoryStore::new();
        store.record("wa-1", interaction("hola"), &ExtractedEntities::default());
        store.record("wa-2", interaction("buenas"), &ExtractedEntities::default());

        assert_eq!(store.recall("wa-1").unwrap().interactions.len(), 1);
        assert_eq!(store.recall("wa-2").unwrap().interactions.len(), 1);
    }

    #[test]
    fn summary_reflects_recorded_entities() {
        let store = InMemoryMemoryStore::new();
        let entities = ExtractedEntities {
            client_name: Some("Marcela".to_string()),
            requested_product: Some("etiquetas".to_string()),
            ..Default::default()
        };
        store.record("wa-123", interaction("soy Marcela"), &entities);

        let summary = store.summary("wa-123").unwrap();
        assert_eq!(summary.total_interactions, 1);
        assert_eq!(summary.client_info.name.as_deref(), Some("Marcela"));
        assert_eq!(summary.known_products, vec!["etiquetas"]);
    }

    #[test]
    fn clear_removes_only_the_given_client() {
        let store = InMemoryMemoryStore::new();
        store.record("wa-1", interaction("hola"), &ExtractedEntities::default());
        store.record("wa-2", interaction("buenas"), &ExtractedEntities::default());

        assert!(store.clear("wa-1"));
        assert!(store.recall("wa-1").is_none());
        assert!(store.recall("wa-2").is_some());
    }

    #[test]
    fn clear_on_unknown_client_returns_false() {
        let store = InMemoryMemoryStore::new();
        assert!(!store.clear("wa-404"));
    }
}
