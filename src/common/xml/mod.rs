//! XML helpers for the hand-emitted OOXML parts.

mod escape;

pub use escape::escape_xml;
