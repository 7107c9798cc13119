//! Memory store port.
//!
//! Defines the contract for per-client conversational memory. The
//! default adapter is an in-process table; callers wanting persistence
//! beyond process lifetime plug in their own implementation.
//!
//! # Caller obligation
//!
//! Access is per-key read-then-write within a single analysis call, with
//! no cross-call locking: concurrent calls for the *same* client
//! identifier race and the last write wins. Callers must serialize
//! calls per client identifier.

use crate::domain::analysis::ExtractedEntities;
use crate::domain::memory::{ConversationMemory, InteractionRecord, MemorySummary};

/// Store port for per-client conversational memory.
pub trait MemoryStore: Send + Sync {
    /// Returns the client's memory, if any interaction was recorded.
    fn recall(&self, client_id: &str) -> Option<ConversationMemory>;

    /// Appends one interaction for the client, creating the memory
    /// record lazily on first use, and merges the extraction into the
    /// client's durable facts.
    fn record(
        &self,
        client_id: &str,
        interaction: InteractionRecord,
        entities: &ExtractedEntities,
    );

    /// Returns the operator-facing summary for the client, if known.
    fn summary(&self, client_id: &str) -> Option<MemorySummary>;

    /// Clears the client's memory. Returns true if anything was removed.
    ///
    /// The engine never calls this itself; it is a caller-invoked
    /// maintenance operation.
    fn clear(&self, client_id: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn memory_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn MemoryStore) {}
    }
}
