/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackageWriter, Part, Relationships};
use crate::ooxml::pptx::template::{self, ThemeColors};
use std::fmt::Write as FmtWrite;
use std::path::Path;

// Import shared format types
use super::super::format::ImageFormat;
use super::relmap::RelationshipMapper;
use super::slide::MutableSlide;

const APPLICATION: &str = "demodeck";

/// Notes page size: 7.5" x 10" portrait.
const NOTES_WIDTH: i64 = 6_858_000;
const NOTES_HEIGHT: i64 = 9_144_000;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and theme colors, and
/// serialize the whole presentation into an OPC package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title written to the core properties
    title: String,
    /// Color scheme of the slide theme
    theme: ThemeColors,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,  // 10 inches
            slide_height: 6_858_000, // 7.5 inches
            title: String::new(),
            theme: ThemeColors::default(),
        }
    }

    /// Switch to the 16:9 widescreen size (13.333" x 7.5").
    pub fn set_widescreen(&mut self) {
        self.slide_width = 12_192_000;
        self.slide_height = 6_858_000;
    }

    /// Add a new slide to the end of the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Iterate over the slides in order.
    pub fn slides(&self) -> impl Iterator<Item = &MutableSlide> {
        self.slides.iter()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Get the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the theme color scheme.
    pub fn set_theme_colors(&mut self, colors: ThemeColors) {
        self.theme = colors;
    }

    /// Get the theme color scheme.
    pub fn theme_colors(&self) -> &ThemeColors {
        &self.theme
    }

    /// Collect all images from all slides in the presentation.
    pub(crate) fn collect_all_images(&self) -> Vec<(usize, &[u8], ImageFormat)> {
        let mut all_images = Vec::new();

        for (slide_index, slide) in self.slides.iter().enumerate() {
            for (image_data, image_format) in slide.collect_images() {
                all_images.push((slide_index, image_data, image_format));
            }
        }

        all_images
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `notes_master_rel_id` - Relationship ID of the notes master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        master_rel_id: &str,
        notes_master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        xml.push_str("<p:notesMasterIdLst>");
        write!(xml, r#"<p:notesMasterId r:id="{}"/>"#, notes_master_rel_id)?;
        xml.push_str("</p:notesMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            NOTES_WIDTH, NOTES_HEIGHT
        )?;
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Build the OPC package for this presentation.
    ///
    /// Part order, relationship IDs and media names depend only on the
    /// presentation content, so identical presentations give identical
    /// packages.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        // Presentation-level relationships
        let mut pres_rels = Relationships::new();
        let master_rid = pres_rels.get_or_add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let notes_master_rid =
            pres_rels.get_or_add(rt::NOTES_MASTER, "notesMasters/notesMaster1.xml");
        let slide_rids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.get_or_add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
            .collect();
        pres_rels.get_or_add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.get_or_add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.get_or_add(rt::THEME, "theme/theme1.xml");
        pres_rels.get_or_add(rt::TABLE_STYLES, "tableStyles.xml");

        pkg.relate_to("/ppt/presentation.xml", rt::OFFICE_DOCUMENT);
        pkg.relate_to("/docProps/core.xml", rt::CORE_PROPERTIES);
        pkg.relate_to("/docProps/app.xml", rt::EXTENDED_PROPERTIES);

        let pres_xml =
            self.generate_presentation_xml_with_rels(&master_rid, &notes_master_rid, &slide_rids)?;
        pkg.add_part(
            Part::xml("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, pres_xml)
                .with_rels(pres_rels),
        );

        // Master, layout, and themes
        let mut master_rels = Relationships::new();
        let layout_rid =
            master_rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.get_or_add(rt::THEME, "../theme/theme1.xml");
        pkg.add_part(
            Part::xml(
                "/ppt/slideMasters/slideMaster1.xml",
                ct::PML_SLIDE_MASTER,
                template::slide_master_xml(&layout_rid)?,
            )
            .with_rels(master_rels),
        );

        let mut layout_rels = Relationships::new();
        layout_rels.get_or_add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_part(
            Part::xml(
                "/ppt/slideLayouts/slideLayout1.xml",
                ct::PML_SLIDE_LAYOUT,
                template::blank_layout_xml()?,
            )
            .with_rels(layout_rels),
        );

        pkg.add_part(Part::xml(
            "/ppt/theme/theme1.xml",
            ct::OFC_THEME,
            template::theme_xml("Deck", &self.theme)?,
        ));

        let mut notes_master_rels = Relationships::new();
        notes_master_rels.get_or_add(rt::THEME, "../theme/theme2.xml");
        pkg.add_part(
            Part::xml(
                "/ppt/notesMasters/notesMaster1.xml",
                ct::PML_NOTES_MASTER,
                template::notes_master_xml()?,
            )
            .with_rels(notes_master_rels),
        );
        pkg.add_part(Part::xml(
            "/ppt/theme/theme2.xml",
            ct::OFC_THEME,
            template::theme_xml("Notes", &ThemeColors::default())?,
        ));

        pkg.add_part(Part::xml(
            "/ppt/presProps.xml",
            ct::PML_PRES_PROPS,
            template::pres_props_xml()?,
        ));
        pkg.add_part(Part::xml(
            "/ppt/viewProps.xml",
            ct::PML_VIEW_PROPS,
            template::view_props_xml()?,
        ));
        pkg.add_part(Part::xml(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::table_styles_xml()?,
        ));

        // Slides, their notes, and media
        let mut rel_mapper = RelationshipMapper::new();
        let mut media_parts = Vec::new();
        let mut notes_count = 0;

        for (slide_index, slide) in self.slides.iter().enumerate() {
            let slide_number = slide_index + 1;
            let mut slide_rels = Relationships::new();
            slide_rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                let media_number = media_parts.len() + 1;
                let file_name = format!("image{}.{}", media_number, format.extension());
                let rid = slide_rels.get_or_add(rt::IMAGE, &format!("../media/{}", file_name));
                rel_mapper.add_image(slide_index, image_index, rid);
                media_parts.push(Part::new(
                    format!("/ppt/media/{}", file_name),
                    format.mime_type(),
                    data.to_vec(),
                ));
            }

            let notes_part = match slide.generate_notes_xml() {
                Some(notes_xml) => {
                    let notes_xml = notes_xml?;
                    slide_rels.get_or_add(
                        rt::NOTES_SLIDE,
                        &format!("../notesSlides/notesSlide{}.xml", slide_number),
                    );
                    let mut notes_rels = Relationships::new();
                    notes_rels.get_or_add(rt::NOTES_MASTER, "../notesMasters/notesMaster1.xml");
                    notes_rels.get_or_add(rt::SLIDE, &format!("../slides/slide{}.xml", slide_number));
                    notes_count += 1;
                    Some(
                        Part::xml(
                            format!("/ppt/notesSlides/notesSlide{}.xml", slide_number),
                            ct::PML_NOTES_SLIDE,
                            notes_xml,
                        )
                        .with_rels(notes_rels),
                    )
                },
                None => None,
            };

            let slide_xml = slide.to_xml_with_rels(slide_index, &rel_mapper)?;
            pkg.add_part(
                Part::xml(
                    format!("/ppt/slides/slide{}.xml", slide_number),
                    ct::PML_SLIDE,
                    slide_xml,
                )
                .with_rels(slide_rels),
            );
            if let Some(part) = notes_part {
                pkg.add_part(part);
            }
        }

        for part in media_parts {
            pkg.add_part(part);
        }

        pkg.add_part(Part::xml(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title, APPLICATION)?,
        ));
        pkg.add_part(Part::xml(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(APPLICATION, self.slides.len(), notes_count)?,
        ));

        log::debug!(
            "packaged {} slides, {} notes slides, {} images",
            self.slides.len(),
            notes_count,
            self.collect_all_images().len()
        );

        Ok(pkg)
    }

    /// Serialize the presentation to PPTX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }

    /// Save the presentation to a file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, &self.to_package()?)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
