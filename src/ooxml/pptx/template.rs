//! Presentation template module.
//!
//! Provides the fixed parts every generated presentation carries: one slide
//! master with a single blank layout, a notes master, the theme and the
//! presentation/document property parts. Only the theme colors, the title
//! and the slide counts vary between presentations.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Slide layout ID used in the master's layout list.
const LAYOUT_ID: u32 = 2_147_483_649;

const CLR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

const EMPTY_SP_TREE: &str = concat!(
    "<p:spTree>",
    "<p:nvGrpSpPr>",
    r#"<p:cNvPr id="1" name=""/>"#,
    "<p:cNvGrpSpPr/>",
    "<p:nvPr/>",
    "</p:nvGrpSpPr>",
    "<p:grpSpPr>",
    "<a:xfrm>",
    r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
    "</a:xfrm>",
    "</p:grpSpPr>",
    "</p:spTree>"
);

/// Color scheme written into the theme part.
///
/// Colors are hex RGB strings without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub dark1: String,
    pub light1: String,
    pub dark2: String,
    pub light2: String,
    pub accents: [String; 6],
    pub hyperlink: String,
    pub followed_hyperlink: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            dark1: "000000".to_string(),
            light1: "FFFFFF".to_string(),
            dark2: "44546A".to_string(),
            light2: "E7E6E6".to_string(),
            accents: [
                "4472C4".to_string(),
                "ED7D31".to_string(),
                "A5A5A5".to_string(),
                "FFC000".to_string(),
                "5B9BD5".to_string(),
                "70AD47".to_string(),
            ],
            hyperlink: "0563C1".to_string(),
            followed_hyperlink: "954F72".to_string(),
        }
    }
}

fn open_pml_root(xml: &mut String, tag: &str, attrs: &str) -> Result<()> {
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"{}>"#,
        tag,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN,
        attrs
    )?;
    Ok(())
}

fn level1_style(xml: &mut String, tag: &str, size_pt: u32, typeface: &str) -> Result<()> {
    write!(
        xml,
        r#"<p:{tag}><a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="{sz}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="{tf}"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:{tag}>"#,
        tag = tag,
        sz = size_pt * 100,
        tf = typeface
    )?;
    Ok(())
}

/// Generate the slide master.
///
/// # Arguments
/// * `layout_rel_id` - Relationship ID of the blank layout in the master's rels
pub fn slide_master_xml(layout_rel_id: &str) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    open_pml_root(&mut xml, "sldMaster", "")?;

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(CLR_MAP);

    xml.push_str("<p:sldLayoutIdLst>");
    write!(
        xml,
        r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
        LAYOUT_ID, layout_rel_id
    )?;
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    level1_style(&mut xml, "titleStyle", 44, "+mj-lt")?;
    level1_style(&mut xml, "bodyStyle", 28, "+mn-lt")?;
    level1_style(&mut xml, "otherStyle", 18, "+mn-lt")?;
    xml.push_str("</p:txStyles>");

    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// Generate the blank slide layout every slide is based on.
pub fn blank_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    open_pml_root(&mut xml, "sldLayout", r#" type="blank" preserve="1""#)?;
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// Generate the notes master.
pub fn notes_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    open_pml_root(&mut xml, "notesMaster", "")?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(CLR_MAP);
    level1_style(&mut xml, "notesStyle", 12, "+mn-lt")?;
    xml.push_str("</p:notesMaster>");
    Ok(xml)
}

/// Generate a theme part with the given color scheme.
pub fn theme_xml(name: &str, colors: &ThemeColors) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<a:theme xmlns:a="{}" name="{}">"#,
        namespace::DML_MAIN,
        escape_xml(name)
    )?;
    xml.push_str("<a:themeElements>");

    write!(xml, r#"<a:clrScheme name="{}">"#, escape_xml(name))?;
    write!(xml, r#"<a:dk1><a:srgbClr val="{}"/></a:dk1>"#, colors.dark1)?;
    write!(xml, r#"<a:lt1><a:srgbClr val="{}"/></a:lt1>"#, colors.light1)?;
    write!(xml, r#"<a:dk2><a:srgbClr val="{}"/></a:dk2>"#, colors.dark2)?;
    write!(xml, r#"<a:lt2><a:srgbClr val="{}"/></a:lt2>"#, colors.light2)?;
    for (i, accent) in colors.accents.iter().enumerate() {
        write!(
            xml,
            r#"<a:accent{n}><a:srgbClr val="{c}"/></a:accent{n}>"#,
            n = i + 1,
            c = accent
        )?;
    }
    write!(xml, r#"<a:hlink><a:srgbClr val="{}"/></a:hlink>"#, colors.hyperlink)?;
    write!(
        xml,
        r#"<a:folHlink><a:srgbClr val="{}"/></a:folHlink>"#,
        colors.followed_hyperlink
    )?;
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    xml.push_str(r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#);
    xml.push_str(r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#);
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(
            xml,
            r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#,
            width
        )?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/>");
    xml.push_str("<a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");

    Ok(xml)
}

/// Generate presProps.xml content.
pub fn pres_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    open_pml_root(&mut xml, "presentationPr", "")?;
    xml.push_str("</p:presentationPr>");
    Ok(xml)
}

/// Generate viewProps.xml content.
pub fn view_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    open_pml_root(&mut xml, "viewPr", "")?;
    xml.push_str("<p:normalViewPr>");
    xml.push_str(r#"<p:restoredLeft sz="15620"/>"#);
    xml.push_str(r#"<p:restoredTop sz="94660"/>"#);
    xml.push_str("</p:normalViewPr>");
    xml.push_str(r#"<p:gridSpacing cx="76200" cy="76200"/>"#);
    xml.push_str("</p:viewPr>");
    Ok(xml)
}

/// Generate tableStyles.xml content.
pub fn table_styles_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        namespace::DML_MAIN
    )?;
    Ok(xml)
}

/// Generate core.xml (core properties).
///
/// No creation or modification dates are written, so identical input gives
/// identical bytes.
pub fn core_props_xml(title: &str, creator: &str) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Generate app.xml (extended properties).
pub fn app_props_xml(application: &str, slides: usize, notes: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<TotalTime>0</TotalTime>");
    write!(xml, "<Application>{}</Application>", escape_xml(application))?;
    xml.push_str("<PresentationFormat>Widescreen</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slides)?;
    write!(xml, "<Notes>{}</Notes>", notes)?;
    xml.push_str("<HiddenSlides>0</HiddenSlides>");
    xml.push_str("<ScaleCrop>false</ScaleCrop>");
    xml.push_str("<LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc>");
    xml.push_str("<HyperlinksChanged>false</HyperlinksChanged>");
    xml.push_str("</Properties>");
    Ok(xml)
}
