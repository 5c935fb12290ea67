//! Office Open XML writing.
//!
//! - [`opc`]: the packaging layer (parts, relationships, content types, ZIP)
//! - [`pptx`]: PresentationML slides, shapes, notes and template parts

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
