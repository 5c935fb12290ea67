//! demodeck - assemble demo and pitch PowerPoint decks
//!
//! This library turns a fixed-shape content description into a ten-slide
//! `.pptx` presentation: cover, agenda, problem, scale, solution, demo,
//! results, roadmap, ask and closing, each with speaker notes.
//!
//! # Features
//!
//! - **Content from YAML**: every field has a template default, so a partial
//!   (or empty) content file still yields a complete deck
//! - **Palettes**: `default` and `iceberg`; the iceberg palette swaps the
//!   problem slide for a visible-vs-hidden cost illustration
//! - **Screenshots**: images named after a slide number (`4.png`,
//!   `Slide_05.jpg`) are embedded on slides 4 to 8, scaled to fit and centered
//! - **Deterministic output**: identical input gives byte-identical files
//!
//! # Example
//!
//! ```no_run
//! use demodeck::{ContentConfig, build, render};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut content = ContentConfig::default();
//! content.title.product_name = "Acme Scanner".to_string();
//!
//! let deck = build(&content, "default", Some(Path::new("screenshots")))?;
//! let summary = render(&deck, Path::new("demo.pptx"))?;
//! println!("{} slides, {} images", summary.slides, summary.images);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`deck`]: content, palettes, slide specs, assembly and rendering
//! - [`ooxml`]: the PresentationML writer and OPC packaging underneath
//! - [`common`]: errors, XML escaping and unit conversion

pub mod common;
pub mod deck;
pub mod ooxml;

pub use common::{Error, Result};
pub use deck::{
    ContentConfig, Deck, PaletteName, RenderSummary, SlideKind, SlideSpec, build, generate,
    load_content, render,
};
