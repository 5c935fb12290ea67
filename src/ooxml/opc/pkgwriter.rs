//! Package writer for OPC packages.
//!
//! This module serializes an [`OpcPackage`] into ZIP bytes, writing the
//! `[Content_Types].xml`, package relationships, and all parts with their
//! relationships.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::package::{OpcPackage, Part};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::path::Path;

const CONTENT_TYPES_MEMBER: &str = "[Content_Types].xml";
const PACKAGE_RELS_MEMBER: &str = "_rels/.rels";

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use demodeck::ooxml::opc::{OpcPackage, PackageWriter};
///
/// let pkg = OpcPackage::new();
/// // ... add parts to package ...
/// PackageWriter::write("output.pptx", &pkg)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    ///
    /// The package is fully serialized before the file is touched, so a
    /// serialization failure never leaves a partial file behind.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        // Write [Content_Types].xml
        let cti = ContentTypesItem::from_package(package);
        phys_writer.write(CONTENT_TYPES_MEMBER, cti.to_xml().as_bytes())?;

        // Write package-level relationships (_rels/.rels)
        phys_writer.write(PACKAGE_RELS_MEMBER, package.rels().to_xml().as_bytes())?;

        // Write all parts and their relationships
        for part in package.iter_parts() {
            Self::write_part(&mut phys_writer, part)?;
        }

        phys_writer.finish()
    }

    fn write_part(phys_writer: &mut PhysPkgWriter, part: &Part) -> Result<()> {
        if is_precompressed(part.content_type()) {
            phys_writer.write_stored(part.membername(), part.blob())?;
        } else {
            phys_writer.write(part.membername(), part.blob())?;
        }

        if !part.rels().is_empty() {
            phys_writer.write(&part.rels_membername(), part.rels().to_xml().as_bytes())?;
        }

        Ok(())
    }
}

fn is_precompressed(content_type: &str) -> bool {
    matches!(content_type, ct::PNG | ct::JPEG | ct::GIF)
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping. Both maps
/// are ordered so the emitted XML does not depend on hashing.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();

        // Add standard defaults
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();

        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.ext(), part.content_type());
        }

        cti
    }

    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, ext: &str, content_type: &str) {
        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_ascii_lowercase(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext.to_ascii_lowercase().as_str(), content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", ct::PNG)
                | ("jpg", ct::JPEG)
                | ("jpeg", ct::JPEG)
                | ("gif", ct::GIF)
                | ("bmp", ct::BMP)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::rel::Relationships;
    use std::io::{Cursor, Read};

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        pkg.relate_to("/ppt/presentation.xml", rt::OFFICE_DOCUMENT);

        let mut rels = Relationships::new();
        rels.get_or_add(rt::IMAGE, "../media/image1.png");
        pkg.add_part(
            Part::xml("/ppt/slides/slide1.xml", ct::PML_SLIDE, "<p:sld/>").with_rels(rels),
        );
        pkg.add_part(Part::new("/ppt/media/image1.png", ct::PNG, vec![0x89, b'P', b'N', b'G']));
        pkg
    }

    #[test]
    fn test_content_types_xml() {
        let cti = ContentTypesItem::from_package(&sample_package());
        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains(r#"PartName="/ppt/media/image1.png""#));
    }

    #[test]
    fn test_archive_members() {
        let bytes = PackageWriter::to_bytes(&sample_package()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"ppt/slides/_rels/slide1.xml.rels".to_string()));

        let mut rels = String::new();
        archive
            .by_name("_rels/.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains(r#"Target="ppt/presentation.xml""#));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");
        assert!(PackageWriter::write(&path, &sample_package()).is_err());
        assert!(!path.exists());
    }
}
