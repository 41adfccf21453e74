//! Model request building and response extraction

pub mod extract;
pub mod request;

// Re-export main types for convenience
pub use extract::{RefusalPolicy, extract};
pub use request::{GenerationConfig, GenerationRequest};
