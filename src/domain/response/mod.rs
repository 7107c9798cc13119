//! Reply suggestion templates and generation.

mod generator;

pub use generator::{ResponseCandidate, ResponseGenerator};
