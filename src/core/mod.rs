/*!
 * Core Module
 * Fundamental simulator types and error handling
 */

pub mod errors;
pub mod label;
pub mod serde;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use label::Label;
pub use types::*;
