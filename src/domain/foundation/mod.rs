//! Foundation value objects shared across the domain.

mod errors;
mod timestamp;

pub use errors::EngineError;
pub use timestamp::Timestamp;
