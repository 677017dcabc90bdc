//! Capability traits at the boundaries of the engine.

mod llm;
mod oracle;
mod semantic;

pub use llm::*;
pub use oracle::*;
pub use semantic::*;
