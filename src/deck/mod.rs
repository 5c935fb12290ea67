//! The deck assembler.
//!
//! [`build`] turns a [`ContentConfig`], a palette name and an optional
//! screenshot directory into a [`Deck`]; [`render`] lays the deck out and
//! writes the `.pptx` package.

pub mod assemble;
pub mod content;
pub mod notes;
pub mod palette;
pub mod render;
pub mod screenshots;
pub mod slide;

pub use assemble::{Deck, build};
pub use content::{ContentConfig, load_content};
pub use palette::{Palette, PaletteName, Rgb};
pub use render::{RenderSummary, generate, render};
pub use screenshots::ScreenshotSet;
pub use slide::{ProblemLayout, SlideContent, SlideKind, SlideSpec};
