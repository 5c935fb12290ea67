//! Unified error type for the deck generator.
//!
//! Configuration problems (unknown palette, unusable content file, output
//! path that cannot be written) are kept apart from failures inside the
//! package serializer so callers can map them to exit codes.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
