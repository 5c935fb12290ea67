/// Slide types and XML generation for PPTX presentations.
use crate::common::unit::Rect;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::ImageFormat;
use super::relmap::RelationshipMapper;
use super::shape::{Geometry, MutableShape};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier within the presentation)
    pub(crate) slide_id: u32,
    /// Slide name, written to `p:cSld/@name`
    pub(crate) name: Option<String>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
    /// Solid background color (hex RGB)
    pub(crate) background: Option<String>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            name: None,
            shapes: Vec::new(),
            notes: None,
            background: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set the slide name shown in the outline and selection pane.
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Get the slide name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set speaker notes for the slide.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Set a solid background color (hex RGB).
    pub fn set_background_color(&mut self, color: &str) {
        self.background = Some(color.to_string());
    }

    /// Get the background color.
    pub fn background_color(&self) -> Option<&str> {
        self.background.as_deref()
    }

    fn next_shape_id(&self) -> u32 {
        // IDs: 1=group, 2+=shapes
        (self.shapes.len() + 2) as u32
    }

    /// Add a text box to the slide and return it for formatting.
    pub fn add_text_box(&mut self, text: &str, rect: Rect) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), text.to_string(), rect);
        self.push_shape(shape)
    }

    /// Add an auto shape (rectangle, rounded rectangle, ellipse).
    pub fn add_shape(
        &mut self,
        geometry: Geometry,
        rect: Rect,
        fill_color: Option<&str>,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_auto_shape(
            self.next_shape_id(),
            geometry,
            rect,
            fill_color.map(str::to_string),
        );
        self.push_shape(shape)
    }

    /// Add a picture to the slide from bytes.
    ///
    /// The image format is detected from the data; unknown formats are rejected.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        rect: Rect,
        description: Option<String>,
    ) -> Result<&mut MutableShape> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let desc = description.unwrap_or_else(|| "Picture".to_string());
        let shape = MutableShape::new_picture(self.next_shape_id(), data, format, rect, desc);
        Ok(self.push_shape(shape))
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Iterate over the shapes on this slide.
    pub fn shapes(&self) -> impl Iterator<Item = &MutableShape> {
        self.shapes.iter()
    }

    /// All text on the slide, one line per paragraph, in shape order.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .map(|s| s.text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Collect all images from this slide.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.get_image_data())
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up relationships)
    /// * `rel_mapper` - The relationship mapper containing actual relationship IDs
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        match self.name {
            Some(ref name) => write!(xml, r#"<p:cSld name="{}">"#, escape_xml(name))?,
            None => xml.push_str("<p:cSld>"),
        }

        // Background must come before spTree
        if let Some(ref color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color
            )?;
        }

        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.is_picture() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                rid
            } else {
                None
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content.
    ///
    /// Each line of the notes text becomes its own paragraph.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;
        Some(notes_xml(notes_text))
    }
}

fn write_group_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}

fn notes_xml(notes_text: &str) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:notes xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);

    // Slide image placeholder
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="sldImg"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");
    xml.push_str("</p:sp>");

    // Notes text shape
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Notes Placeholder 2"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    for line in notes_text.lines() {
        if line.trim().is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
            continue;
        }
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
        write!(xml, "<a:t>{}</a:t>", escape_xml(line.trim_end()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:notes>");

    Ok(xml)
}
