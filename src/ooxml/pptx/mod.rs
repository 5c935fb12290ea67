//! PowerPoint (.pptx) presentation writing.
//!
//! Presentations are built in memory with [`MutablePresentation`], which
//! hands out [`MutableSlide`]s for placing text boxes, auto shapes and
//! pictures, then serialized as a PresentationML package.
//!
//! # Example
//!
//! ```rust,no_run
//! use demodeck::common::unit::Rect;
//! use demodeck::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! pres.set_widescreen();
//! let slide = pres.add_slide();
//! slide
//!     .add_text_box("Hello", Rect::from_inches(0.75, 1.0, 11.8, 1.2))
//!     .font_size(28.0)
//!     .bold(true);
//! slide.set_notes("TIMING: 30 seconds");
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod format;
pub mod template;
pub mod writer;

pub use format::{ImageFormat, TextAlign, TextAnchor, TextFormat};
pub use template::ThemeColors;
pub use writer::{Geometry, MutablePresentation, MutableShape, MutableSlide, Paragraph};
