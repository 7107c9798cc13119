//! Domain layer: pure analysis logic, memory records, pricing and
//! response templates. No I/O happens here.

pub mod analysis;
pub mod foundation;
pub mod lexicon;
pub mod memory;
pub mod pricing;
pub mod response;
