/// Shape types and XML generation for PPTX slides.
use crate::common::unit::{Rect, pt_to_emu_f64, pt_to_font_size};
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{ImageFormat, TextAlign, TextAnchor, TextFormat};

/// One paragraph of a text body: a single run with uniform formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub format: TextFormat,
    pub align: TextAlign,
    /// Line spacing as a multiple of single spacing (1.2 = 120%)
    pub line_spacing: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Text content of a text box or auto shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: TextAnchor,
    pub wrap: bool,
}

impl TextBody {
    fn new(first: Paragraph) -> Self {
        Self {
            paragraphs: vec![first],
            anchor: TextAnchor::Top,
            wrap: true,
        }
    }

    fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rect,
    RoundRect,
    Ellipse,
    Triangle,
    Trapezoid,
}

impl Geometry {
    fn preset(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::RoundRect => "roundRect",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::Trapezoid => "trapezoid",
        }
    }
}

/// Outline of an auto shape.
#[derive(Debug, Clone, PartialEq)]
pub enum LineStyle {
    None,
    Solid { color: String, width_pt: f64 },
}

/// A shape on a slide (text box, auto shape, picture).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        rect: Rect,
        body: TextBody,
    },
    AutoShape {
        geometry: Geometry,
        rect: Rect,
        fill_color: Option<String>,
        line: Option<LineStyle>,
        body: Option<TextBody>,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        rect: Rect,
        description: String,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, text: String, rect: Rect) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                rect,
                body: TextBody::new(Paragraph::new(text)),
            },
        }
    }

    /// Create a new auto shape with no text.
    pub(crate) fn new_auto_shape(
        shape_id: u32,
        geometry: Geometry,
        rect: Rect,
        fill_color: Option<String>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::AutoShape {
                geometry,
                rect,
                fill_color,
                line: None,
                body: None,
            },
        }
    }

    /// Create a new picture shape.
    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        rect: Rect,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Picture {
                data,
                format,
                rect,
                description,
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Position and size of the shape.
    pub fn rect(&self) -> Rect {
        match &self.shape_type {
            ShapeType::TextBox { rect, .. }
            | ShapeType::AutoShape { rect, .. }
            | ShapeType::Picture { rect, .. } => *rect,
        }
    }

    /// Whether this shape is a picture.
    pub fn is_picture(&self) -> bool {
        matches!(self.shape_type, ShapeType::Picture { .. })
    }

    /// Plain text of the shape, one line per paragraph.
    pub fn text(&self) -> String {
        match &self.shape_type {
            ShapeType::TextBox { body, .. } => body.text(),
            ShapeType::AutoShape { body: Some(body), .. } => body.text(),
            _ => String::new(),
        }
    }

    /// Paragraphs of the shape's text body, if it has one.
    pub fn paragraphs(&self) -> &[Paragraph] {
        match &self.shape_type {
            ShapeType::TextBox { body, .. } => &body.paragraphs,
            ShapeType::AutoShape { body: Some(body), .. } => &body.paragraphs,
            _ => &[],
        }
    }

    /// Fill color of an auto shape.
    pub fn fill_color(&self) -> Option<&str> {
        match &self.shape_type {
            ShapeType::AutoShape { fill_color, .. } => fill_color.as_deref(),
            _ => None,
        }
    }

    fn body_mut(&mut self) -> Option<&mut TextBody> {
        match &mut self.shape_type {
            ShapeType::TextBox { body, .. } => Some(body),
            ShapeType::AutoShape { body, .. } => body.as_mut(),
            ShapeType::Picture { .. } => None,
        }
    }

    fn last_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        self.body_mut().and_then(|b| b.paragraphs.last_mut())
    }

    /// Append a paragraph. Formatting builder calls that follow apply to it.
    ///
    /// On an auto shape without text this creates the text body.
    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        match &mut self.shape_type {
            ShapeType::TextBox { body, .. } => body.paragraphs.push(Paragraph::new(text)),
            ShapeType::AutoShape { body, .. } => {
                let paragraph = Paragraph::new(text);
                if let Some(existing) = body.as_mut() {
                    existing.paragraphs.push(paragraph);
                } else {
                    *body = Some(TextBody::new(paragraph));
                }
            },
            ShapeType::Picture { .. } => {},
        }
        self
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.format.font = Some(font.to_string());
        }
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.format.size = Some(size);
        }
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.format.bold = Some(bold);
        }
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.format.italic = Some(italic);
        }
        self
    }

    /// Builder method: set text color (hex RGB).
    pub fn color(&mut self, color: &str) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.format.color = Some(color.to_string());
        }
        self
    }

    /// Builder method: set paragraph alignment.
    pub fn align(&mut self, align: TextAlign) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.align = align;
        }
        self
    }

    /// Builder method: set line spacing as a multiple of single spacing.
    pub fn line_spacing(&mut self, spacing: f64) -> &mut Self {
        if let Some(p) = self.last_paragraph_mut() {
            p.line_spacing = Some(spacing);
        }
        self
    }

    /// Builder method: set vertical text anchoring.
    pub fn anchor(&mut self, anchor: TextAnchor) -> &mut Self {
        if let Some(body) = self.body_mut() {
            body.anchor = anchor;
        }
        self
    }

    /// Builder method: enable or disable word wrap.
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        if let Some(body) = self.body_mut() {
            body.wrap = wrap;
        }
        self
    }

    /// Builder method: set a solid outline (auto shapes only).
    pub fn line(&mut self, color: &str, width_pt: f64) -> &mut Self {
        if let ShapeType::AutoShape { ref mut line, .. } = self.shape_type {
            *line = Some(LineStyle::Solid {
                color: color.to_string(),
                width_pt,
            });
        }
        self
    }

    /// Builder method: remove the outline (auto shapes only).
    pub fn no_line(&mut self) -> &mut Self {
        if let ShapeType::AutoShape { ref mut line, .. } = self.shape_type {
            *line = Some(LineStyle::None);
        }
        self
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their media part; without one a
    /// placeholder ID is written.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { rect, body } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                write_text_body(xml, body)?;
                xml.push_str("</p:sp>");
            },
            ShapeType::AutoShape {
                geometry,
                rect,
                fill_color,
                line,
                body,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Shape {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    geometry.preset()
                )?;

                match fill_color {
                    Some(color) => write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color
                    )?,
                    None => xml.push_str("<a:noFill/>"),
                }

                match line {
                    Some(LineStyle::Solid { color, width_pt }) => write!(
                        xml,
                        r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                        pt_to_emu_f64(*width_pt),
                        color
                    )?,
                    Some(LineStyle::None) => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                    None => {},
                }

                xml.push_str("</p:spPr>");

                if let Some(body) = body {
                    write_text_body(xml, body)?;
                }
                xml.push_str("</p:sp>");
            },
            ShapeType::Picture {
                rect, description, ..
            } => {
                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id - 1,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                let rid = rel_id.unwrap_or("rIdImagePlaceholder");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, rect: &Rect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_text_body(xml: &mut String, body: &TextBody) -> Result<()> {
    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="{}" rtlCol="0" anchor="{}"><a:normAutofit/></a:bodyPr>"#,
        if body.wrap { "square" } else { "none" },
        body.anchor.as_attr()
    )?;
    xml.push_str("<a:lstStyle/>");
    for paragraph in &body.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    write!(xml, r#"<a:pPr algn="{}">"#, paragraph.align.as_attr())?;
    if let Some(spacing) = paragraph.line_spacing {
        write!(
            xml,
            r#"<a:lnSpc><a:spcPct val="{}"/></a:lnSpc>"#,
            (spacing * 100_000.0).round() as u32
        )?;
    }
    xml.push_str("</a:pPr>");

    let format = &paragraph.format;
    let mut rpr = String::from(r#"lang="en-US""#);
    if let Some(size) = format.size {
        write!(rpr, r#" sz="{}""#, pt_to_font_size(size))?;
    }
    if let Some(true) = format.bold {
        rpr.push_str(r#" b="1""#);
    }
    if let Some(true) = format.italic {
        rpr.push_str(r#" i="1""#);
    }
    rpr.push_str(r#" dirty="0""#);

    if paragraph.text.is_empty() {
        write!(xml, "<a:endParaRPr {}/>", rpr)?;
        xml.push_str("</a:p>");
        return Ok(());
    }

    xml.push_str("<a:r>");
    write!(xml, "<a:rPr {}>", rpr)?;
    // Fill must precede the font elements inside rPr
    if let Some(ref color) = format.color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }
    xml.push_str("</a:rPr>");
    write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))?;
    xml.push_str("</a:r>");

    xml.push_str("</a:p>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml, Some("rId2")).unwrap();
        xml
    }

    #[test]
    fn test_text_box_formatting() {
        let mut shape = MutableShape::new_text_box(2, "Title".to_string(), Rect::new(1, 2, 3, 4));
        shape.font_size(28.0).bold(true).color("1E293B").line_spacing(1.2);
        let xml = render(&shape);

        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"<a:off x="1" y="2"/>"#));
        assert!(xml.contains(r#"sz="2800" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="1E293B"/>"#));
        assert!(xml.contains(r#"<a:spcPct val="120000"/>"#));
        assert!(xml.contains("<a:t>Title</a:t>"));
    }

    #[test]
    fn test_font_italic_and_no_wrap() {
        let mut shape = MutableShape::new_text_box(4, "Label".to_string(), Rect::new(0, 0, 1, 1));
        shape.font("+mj-lt").italic(true).color("0066CC").word_wrap(false);
        let xml = render(&shape);

        assert!(xml.contains(r#"wrap="none""#));
        assert!(xml.contains(r#" i="1""#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="0066CC"/></a:solidFill><a:latin typeface="+mj-lt"/>"#
        ));
    }

    #[test]
    fn test_paragraph_formatting_targets_last_paragraph() {
        let mut shape = MutableShape::new_text_box(3, "Product".to_string(), Rect::new(0, 0, 1, 1));
        shape.font_size(48.0);
        shape.add_paragraph("Tagline").font_size(24.0).align(TextAlign::Center);

        let paragraphs = shape.paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].format.size, Some(48.0));
        assert_eq!(paragraphs[1].format.size, Some(24.0));
        assert_eq!(paragraphs[1].align, TextAlign::Center);
        assert_eq!(shape.text(), "Product\nTagline");
    }

    #[test]
    fn test_auto_shape_with_text_and_line() {
        let mut shape =
            MutableShape::new_auto_shape(4, Geometry::RoundRect, Rect::new(0, 0, 10, 10), Some("0066CC".into()));
        shape.line("E2E8F0", 2.0);
        shape.add_paragraph("Core").anchor(TextAnchor::Middle);
        let xml = render(&shape);

        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"<a:ln w="25400">"#));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert_eq!(shape.text(), "Core");
        assert_eq!(shape.fill_color(), Some("0066CC"));
    }

    #[test]
    fn test_shape_without_fill() {
        let mut shape = MutableShape::new_auto_shape(5, Geometry::Rect, Rect::new(0, 0, 1, 1), None);
        shape.no_line();
        let xml = render(&shape);
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(!xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_picture_xml() {
        let shape = MutableShape::new_picture(
            6,
            vec![0x89, 0x50, 0x4E, 0x47],
            ImageFormat::Png,
            Rect::new(10, 20, 30, 40),
            "Screenshot <demo>".to_string(),
        );
        let xml = render(&shape);

        assert!(shape.is_picture());
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(r#"descr="Screenshot &lt;demo&gt;""#));
        assert!(xml.contains(r#"<a:picLocks noChangeAspect="1"/>"#));
    }

    #[test]
    fn test_empty_paragraph_and_escaping() {
        let mut shape = MutableShape::new_text_box(2, String::new(), Rect::new(0, 0, 1, 1));
        shape.add_paragraph("R&D");
        let xml = render(&shape);
        assert!(xml.contains("<a:endParaRPr"));
        assert!(xml.contains("<a:t>R&amp;D</a:t>"));
    }
}
