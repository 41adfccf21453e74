//! API Lambda handlers and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod status;

// Re-export the main handler for convenience
pub use handler::{Summarizer, handler};
