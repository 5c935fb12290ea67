//! Common types and utilities shared by the deck and format layers.
//!
//! Holds the crate-wide error type, XML text escaping and the unit
//! conversions used when placing shapes on a slide.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use xml::escape_xml;
