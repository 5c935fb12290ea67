//! Open Packaging Convention (OPC) writer.
//!
//! An OPC package is a ZIP archive holding parts (XML or binary blobs),
//! a `[Content_Types].xml` map and `.rels` relationship files. This module
//! only writes packages; the generator never reads one back.

pub mod constants;
pub mod package;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::{OpcPackage, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
