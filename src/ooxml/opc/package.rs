//! In-memory OPC package under construction.

use crate::ooxml::opc::rel::Relationships;

/// A part in an OPC package.
///
/// Parts are the fundamental units of content in a package. Each part has a
/// unique partname (an absolute URI such as `/ppt/slides/slide1.xml`), a
/// content type, its serialized bytes and its outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: String,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    ///
    /// # Arguments
    /// * `partname` - Absolute partname, starting with `/`
    /// * `content_type` - The content type of this part
    /// * `blob` - The serialized content of this part
    pub fn new(partname: impl Into<String>, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname: partname.into(),
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Create an XML part from a string.
    pub fn xml(partname: impl Into<String>, content_type: &str, xml: impl Into<String>) -> Self {
        Self::new(partname, content_type, xml.into().into_bytes())
    }

    /// Attach relationships to this part.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    /// Get the partname of this part.
    #[inline]
    pub fn partname(&self) -> &str {
        &self.partname
    }

    /// Get the content type of this part.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the binary content of this part.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Get the relationships for this part.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// File extension of the partname, without the dot.
    pub fn ext(&self) -> &str {
        self.partname
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    /// ZIP member name: the partname without its leading slash.
    pub fn membername(&self) -> &str {
        self.partname.trim_start_matches('/')
    }

    /// ZIP member name of this part's relationships,
    /// e.g. `ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_membername(&self) -> String {
        let member = self.membername();
        match member.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None => format!("_rels/{}.rels", member),
        }
    }
}

/// An OPC package: package-level relationships plus an ordered list of parts.
///
/// Parts are written in insertion order, which keeps the archive layout
/// stable for identical input.
#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the package.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Add a package-level relationship (written to `_rels/.rels`).
    pub fn relate_to(&mut self, partname: &str, reltype: &str) -> String {
        self.rels
            .get_or_add(reltype, partname.trim_start_matches('/'))
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over all parts.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get a part by partname.
    pub fn part(&self, partname: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname == partname)
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_part_names() {
        let part = Part::xml("/ppt/slides/slide3.xml", ct::PML_SLIDE, "<p:sld/>");
        assert_eq!(part.ext(), "xml");
        assert_eq!(part.membername(), "ppt/slides/slide3.xml");
        assert_eq!(part.rels_membername(), "ppt/slides/_rels/slide3.xml.rels");
    }

    #[test]
    fn test_package_rels() {
        let mut pkg = OpcPackage::new();
        let rid = pkg.relate_to("/ppt/presentation.xml", rt::OFFICE_DOCUMENT);
        assert_eq!(rid, "rId1");
        assert_eq!(
            pkg.rels().get("rId1").map(|r| r.target_ref()),
            Some("ppt/presentation.xml")
        );
    }

    #[test]
    fn test_part_lookup() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new("/ppt/media/image1.png", ct::PNG, vec![1, 2, 3]));
        assert_eq!(pkg.part_count(), 1);
        assert_eq!(pkg.part("/ppt/media/image1.png").map(|p| p.blob().len()), Some(3));
        assert!(pkg.part("/ppt/media/image2.png").is_none());
    }
}
