//! Deck rendering: lays each slide spec out on a 16:9 PresentationML slide
//! and writes the package.
//!
//! Positions are given in inches on a 13.333" x 7.5" slide and converted
//! to EMUs at the shape boundary.

use super::assemble::{Deck, build};
use super::content::ContentConfig;
use super::notes::speaker_notes;
use super::palette::{Palette, PaletteName, Rgb};
use super::slide::{ProblemLayout, SlideContent, SlideKind, SlideSpec};
use crate::common::error::{Error, Result};
use crate::common::unit::Rect;
use crate::ooxml::pptx::{Geometry, MutablePresentation, MutableSlide, TextAlign, TextAnchor};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const SLIDE_WIDTH_IN: f64 = 13.333;

/// What a render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub palette: PaletteName,
    pub slides: usize,
    /// Screenshots actually embedded
    pub images: usize,
}

/// Assemble and render in one step.
pub fn generate(
    content: &ContentConfig,
    palette_name: &str,
    screenshot_dir: Option<&Path>,
    output: &Path,
) -> Result<RenderSummary> {
    let deck = build(content, palette_name, screenshot_dir)?;
    render(&deck, output)
}

/// Render a deck to a `.pptx` file, replacing any existing file.
///
/// The package is serialized in memory before the output path is touched.
/// Failing to write the output is a configuration error.
pub fn render(deck: &Deck, output: &Path) -> Result<RenderSummary> {
    let pres = to_presentation(deck);
    let images = pres
        .slides()
        .flat_map(|s| s.shapes())
        .filter(|shape| shape.is_picture())
        .count();

    let bytes = pres.to_bytes()?;
    fs::write(output, bytes).map_err(|e| {
        Error::Configuration(format!("cannot write output {}: {}", output.display(), e))
    })?;

    log::info!(
        "wrote {} ({} slides, {} images)",
        output.display(),
        pres.slide_count(),
        images
    );

    Ok(RenderSummary {
        output: output.to_path_buf(),
        palette: deck.palette().name,
        slides: pres.slide_count(),
        images,
    })
}

/// Lay the deck out as an in-memory presentation.
pub fn to_presentation(deck: &Deck) -> MutablePresentation {
    let palette = deck.palette();

    let mut pres = MutablePresentation::new();
    pres.set_widescreen();
    pres.set_theme_colors(palette.theme_colors());
    if let Some(cover) = deck.slide_of(SlideKind::Cover) {
        pres.set_title(&cover.title);
    }

    for spec in deck.slides() {
        let kind = spec.kind();
        let screenshot = spec
            .image
            .as_deref()
            .and_then(|path| load_screenshot(spec.number, path));

        let slide = pres.add_slide();
        slide.set_name(kind.label());
        slide.set_background_color(&palette.background.hex());
        draw_slide(slide, spec, palette, screenshot.is_some());

        if let Some(shot) = screenshot {
            match image_region(&spec.content) {
                Some(region) => {
                    let rect = region.fit_centered(shot.width, shot.height);
                    let description = format!("Screenshot for slide {}", spec.number);
                    if let Err(e) = slide.add_picture_from_bytes(shot.data, rect, Some(description)) {
                        log::warn!("slide {}: screenshot not embedded: {}", spec.number, e);
                    }
                },
                None => log::warn!("slide {}: no room left for the screenshot", spec.number),
            }
        }

        slide.set_notes(speaker_notes(kind));
    }

    pres
}

struct Screenshot {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

fn load_screenshot(slide_number: usize, path: &Path) -> Option<Screenshot> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!(
                "slide {}: cannot read screenshot {}: {}",
                slide_number,
                path.display(),
                e
            );
            return None;
        },
    };

    let dimensions = image::ImageReader::new(Cursor::new(data.as_slice()))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.into_dimensions());

    match dimensions {
        Ok((width, height)) => Some(Screenshot {
            data,
            width,
            height,
        }),
        Err(e) => {
            log::warn!(
                "slide {}: cannot decode screenshot {}: {}",
                slide_number,
                path.display(),
                e
            );
            None
        },
    }
}

/// Top of the roadmap's completed list and the pitch of its rows, in inches.
const ROADMAP_LIST_TOP: f64 = 2.8;
const ROADMAP_ROW: f64 = 0.5;

/// Lowest edge any screenshot may reach, in inches.
const IMAGE_BOTTOM: f64 = 7.2;

/// Region a screenshot is fitted into, per slide kind.
///
/// The roadmap region starts below the last completed item; `None` when a
/// long list leaves no usable room.
fn image_region(content: &SlideContent) -> Option<Rect> {
    let (x, y, w, h) = match content {
        SlideContent::Scale { .. } => (0.75, 5.3, 11.8, 1.9),
        SlideContent::Solution { .. } => (0.75, 5.0, 11.8, 2.2),
        SlideContent::Demo { .. } => (2.0, 2.5, 9.3, 4.6),
        SlideContent::Results { .. } => (0.75, 5.1, 11.8, 2.1),
        SlideContent::Roadmap { completed, .. } => {
            let top = (ROADMAP_LIST_TOP + completed.len() as f64 * ROADMAP_ROW).max(4.4);
            (0.75, top, 5.3, IMAGE_BOTTOM - top)
        },
        _ => return None,
    };
    if h < 1.0 {
        return None;
    }
    Some(Rect::from_inches(x, y, w, h))
}

fn draw_slide(slide: &mut MutableSlide, spec: &SlideSpec, palette: &Palette, has_image: bool) {
    match &spec.content {
        SlideContent::Cover { tagline, features } => {
            draw_cover(slide, &spec.title, tagline, features, palette)
        },
        SlideContent::Agenda { items } => {
            context_label(slide, SlideKind::Agenda.label(), palette.primary);
            action_title(slide, &spec.title, palette);
            draw_agenda(slide, items, palette);
        },
        SlideContent::Problem(layout) => {
            context_label(slide, SlideKind::Problem.label(), palette.danger);
            action_title(slide, &spec.title, palette);
            match layout {
                ProblemLayout::Bullets { pain_points, risk } => {
                    draw_pain_points(slide, pain_points, risk, palette)
                },
                ProblemLayout::Iceberg { .. } => draw_iceberg(slide, layout, palette),
            }
        },
        SlideContent::Scale { stats } => {
            context_label(slide, SlideKind::Scale.label(), palette.primary);
            action_title(slide, &spec.title, palette);
            for (i, stat) in stats.iter().enumerate() {
                let color = palette.series()[i % 3];
                draw_stat(slide, 0.75 + i as f64 * 4.0, stat, color, palette);
            }
        },
        SlideContent::Solution { stages } => {
            context_label(slide, SlideKind::Solution.label(), palette.primary);
            action_title(slide, &spec.title, palette);
            draw_flow(slide, stages, palette);
        },
        SlideContent::Demo { placeholder } => {
            context_label(slide, SlideKind::Demo.label(), palette.success);
            action_title(slide, &spec.title, palette);
            if !has_image {
                slide
                    .add_text_box(placeholder, Rect::from_inches(2.0, 3.0, 9.0, 2.0))
                    .font_size(24.0)
                    .italic(true)
                    .color(&palette.muted.hex())
                    .align(TextAlign::Center);
            }
        },
        SlideContent::Results { metrics } => {
            context_label(slide, SlideKind::Results.label(), palette.success);
            action_title(slide, &spec.title, palette);
            for (i, metric) in metrics.iter().enumerate() {
                let x = 0.75 + i as f64 * 3.9;
                let label = format!("✓ {}", metric.label);
                card(slide, (x, 2.8, 3.6, 2.0), &label, "", palette.success, palette);
                slide
                    .add_text_box(&metric.value, Rect::from_inches(x + 0.2, 3.4, 3.2, 0.8))
                    .font_size(36.0)
                    .bold(true)
                    .color(&palette.text.hex());
            }
        },
        SlideContent::Roadmap { completed, gaps } => {
            context_label(slide, SlideKind::Roadmap.label(), palette.primary);
            action_title(slide, &spec.title, palette);
            draw_roadmap(slide, completed, gaps, palette);
        },
        SlideContent::Ask {
            feedback_question,
            priority_question,
        } => {
            context_label(slide, SlideKind::Ask.label(), palette.primary);
            action_title(slide, &spec.title, palette);
            card(
                slide,
                (0.75, 2.5, 5.3, 1.5),
                "💬 Feedback Request",
                feedback_question,
                palette.primary,
                palette,
            );
            card(
                slide,
                (6.4, 2.5, 5.3, 1.5),
                "🎯 Priority Question",
                priority_question,
                palette.warning,
                palette,
            );
        },
        SlideContent::Closing {
            subline,
            product_name,
        } => {
            slide
                .add_text_box(&spec.title, Rect::from_inches(0.75, 2.6, 11.8, 1.2))
                .font_size(48.0)
                .bold(true)
                .color(&palette.primary.hex())
                .align(TextAlign::Center);
            slide
                .add_text_box(subline, Rect::from_inches(0.75, 3.8, 11.8, 0.6))
                .font_size(20.0)
                .color(&palette.muted.hex())
                .align(TextAlign::Center);
            slide
                .add_text_box(product_name, Rect::from_inches(0.75, 6.4, 11.8, 0.5))
                .font_size(14.0)
                .color(&palette.muted.hex())
                .align(TextAlign::Center);
        },
    }
}

/// Small uppercase section label above the title.
fn context_label(slide: &mut MutableSlide, text: &str, color: Rgb) {
    slide
        .add_text_box(&text.to_uppercase(), Rect::from_inches(0.75, 0.6, 3.0, 0.4))
        .font_size(12.0)
        .bold(true)
        .color(&color.hex())
        .word_wrap(false);
}

/// Theme reference to the major (heading) Latin font.
const HEADING_FONT: &str = "+mj-lt";

/// Full-sentence title stating the slide's takeaway.
fn action_title(slide: &mut MutableSlide, text: &str, palette: &Palette) {
    slide
        .add_text_box(text, Rect::from_inches(0.75, 1.0, 11.8, 1.2))
        .font(HEADING_FONT)
        .font_size(28.0)
        .bold(true)
        .color(&palette.text.hex())
        .line_spacing(1.2);
}

/// Rounded card with a bold heading and optional body text.
fn card(
    slide: &mut MutableSlide,
    (x, y, w, h): (f64, f64, f64, f64),
    title: &str,
    body: &str,
    title_color: Rgb,
    palette: &Palette,
) {
    slide
        .add_shape(
            Geometry::RoundRect,
            Rect::from_inches(x, y, w, h),
            Some(&palette.surface.hex()),
        )
        .line(&palette.border.hex(), 1.0);
    slide
        .add_text_box(title, Rect::from_inches(x + 0.2, y + 0.2, w - 0.4, 0.4))
        .font_size(14.0)
        .bold(true)
        .color(&title_color.hex());
    if !body.is_empty() {
        slide
            .add_text_box(body, Rect::from_inches(x + 0.2, y + 0.6, w - 0.4, h - 0.8))
            .font_size(12.0)
            .color(&palette.muted.hex())
            .line_spacing(1.4);
    }
}

fn draw_cover(
    slide: &mut MutableSlide,
    product_name: &str,
    tagline: &str,
    features: &[super::content::Feature],
    palette: &Palette,
) {
    slide
        .add_text_box(product_name, Rect::from_inches(0.75, 2.0, 8.0, 2.0))
        .font_size(48.0)
        .bold(true)
        .color(&palette.primary.hex())
        .add_paragraph(tagline)
        .font_size(24.0)
        .color(&palette.muted.hex());

    for (i, feature) in features.iter().enumerate() {
        let x = 0.75 + i as f64 * 3.9;
        card(
            slide,
            (x, 5.0, 3.6, 1.5),
            &feature.title,
            &feature.description,
            palette.primary,
            palette,
        );
    }
}

fn draw_agenda(slide: &mut MutableSlide, items: &[String], palette: &Palette) {
    for (i, item) in items.iter().enumerate() {
        let y = 2.6 + i as f64 * 0.6;
        slide
            .add_shape(
                Geometry::Ellipse,
                Rect::from_inches(0.75, y, 0.45, 0.45),
                Some(&palette.primary.hex()),
            )
            .no_line()
            .add_paragraph(&(i + 1).to_string())
            .font_size(14.0)
            .bold(true)
            .color(&palette.surface.hex())
            .align(TextAlign::Center)
            .anchor(TextAnchor::Middle);
        slide
            .add_text_box(item, Rect::from_inches(1.45, y, 10.0, 0.45))
            .font_size(18.0)
            .color(&palette.text.hex())
            .anchor(TextAnchor::Middle);
    }
}

fn draw_pain_points(slide: &mut MutableSlide, pain_points: &[String], risk: &str, palette: &Palette) {
    for (i, point) in pain_points.iter().enumerate() {
        let y = 2.8 + i as f64 * 0.5;
        slide
            .add_text_box(&format!("❌  {}", point), Rect::from_inches(0.75, y, 5.0, 0.4))
            .font_size(16.0)
            .color(&palette.text.hex());
    }

    slide
        .add_shape(
            Geometry::RoundRect,
            Rect::from_inches(6.5, 2.5, 5.5, 3.0),
            Some(&palette.danger_fill.hex()),
        )
        .line(&palette.danger.hex(), 2.0);
    slide
        .add_text_box("⚠️  THE RISK", Rect::from_inches(6.8, 2.8, 5.0, 0.5))
        .font_size(14.0)
        .bold(true)
        .color(&palette.danger.hex());
    slide
        .add_text_box(risk, Rect::from_inches(6.8, 3.4, 5.0, 1.5))
        .font_size(16.0)
        .color(&palette.text.hex())
        .line_spacing(1.5);
}

fn draw_iceberg(slide: &mut MutableSlide, layout: &ProblemLayout, palette: &Palette) {
    let ProblemLayout::Iceberg {
        visible_cost,
        visible_label,
        hidden_cost_label,
        hidden_costs,
        sky,
        ocean,
    } = layout
    else {
        return;
    };
    let (ice, ice_deep) = palette
        .iceberg
        .map(|bands| (bands.ice, bands.ice_deep))
        .unwrap_or((palette.surface, palette.border));

    // Bands first so everything else sits on top
    slide
        .add_shape(
            Geometry::Rect,
            Rect::from_inches(0.0, 2.3, SLIDE_WIDTH_IN, 1.7),
            Some(&sky.hex()),
        )
        .no_line();
    slide
        .add_shape(
            Geometry::Rect,
            Rect::from_inches(0.0, 4.0, SLIDE_WIDTH_IN, 3.5),
            Some(&ocean.hex()),
        )
        .no_line();

    slide
        .add_shape(
            Geometry::Triangle,
            Rect::from_inches(5.17, 2.5, 3.0, 1.5),
            Some(&ice.hex()),
        )
        .line(&palette.border.hex(), 1.0);
    slide
        .add_shape(
            Geometry::Trapezoid,
            Rect::from_inches(3.67, 4.0, 6.0, 3.1),
            Some(&ice_deep.hex()),
        )
        .no_line();

    slide
        .add_text_box(visible_cost, Rect::from_inches(0.75, 2.45, 4.2, 0.8))
        .font_size(36.0)
        .bold(true)
        .color(&palette.text.hex());
    slide
        .add_text_box(visible_label, Rect::from_inches(0.75, 3.25, 4.2, 0.5))
        .font_size(14.0)
        .color(&palette.muted.hex());

    slide
        .add_text_box(hidden_cost_label, Rect::from_inches(9.9, 4.3, 3.2, 0.5))
        .font_size(14.0)
        .bold(true)
        .color(&palette.surface.hex());
    for (i, cost) in hidden_costs.iter().enumerate() {
        let y = 4.9 + i as f64 * 0.45;
        slide
            .add_text_box(&format!("•  {}", cost), Rect::from_inches(9.9, y, 3.2, 0.4))
            .font_size(14.0)
            .color(&sky.hex());
    }
}

fn draw_stat(
    slide: &mut MutableSlide,
    x: f64,
    stat: &super::content::Stat,
    color: Rgb,
    palette: &Palette,
) {
    const WIDTH: f64 = 3.7;

    let (value_color, label_color) = if stat.filled {
        slide
            .add_shape(
                Geometry::RoundRect,
                Rect::from_inches(x, 2.8, WIDTH, 2.2),
                Some(&color.hex()),
            )
            .no_line();
        (palette.surface, palette.on_primary)
    } else {
        slide
            .add_shape(
                Geometry::RoundRect,
                Rect::from_inches(x, 2.8, WIDTH, 2.2),
                Some(&palette.surface.hex()),
            )
            .line(&palette.border.hex(), 2.0);
        (color, palette.muted)
    };

    slide
        .add_text_box(&stat.value, Rect::from_inches(x, 3.2, WIDTH, 1.0))
        .font_size(56.0)
        .bold(true)
        .color(&value_color.hex())
        .align(TextAlign::Center);
    slide
        .add_text_box(&stat.label, Rect::from_inches(x, 4.3, WIDTH, 0.5))
        .font_size(14.0)
        .color(&label_color.hex())
        .align(TextAlign::Center);
}

/// Left-to-right pipeline of stages, centered; the middle stage is filled.
fn draw_flow(slide: &mut MutableSlide, stages: &[String], palette: &Palette) {
    const STAGE_W: f64 = 2.5;
    const GAP: f64 = 0.7;

    if stages.is_empty() {
        return;
    }
    let total = stages.len() as f64 * STAGE_W + (stages.len() - 1) as f64 * GAP;
    let start = ((SLIDE_WIDTH_IN - total) / 2.0).max(0.25);
    let main = stages.len() / 2;

    for (i, stage) in stages.iter().enumerate() {
        let x = start + i as f64 * (STAGE_W + GAP);
        let rect = Rect::from_inches(x, 3.5, STAGE_W, 1.2);

        let shape = if i == main {
            let shape = slide.add_shape(Geometry::RoundRect, rect, Some(&palette.primary.hex()));
            shape.no_line();
            shape
        } else {
            let shape = slide.add_shape(Geometry::RoundRect, rect, Some(&palette.subtle.hex()));
            shape.line(&palette.border.hex(), 1.0);
            shape
        };
        let text_color = if i == main { palette.surface } else { palette.text };
        shape
            .add_paragraph(stage)
            .font_size(16.0)
            .bold(true)
            .color(&text_color.hex())
            .align(TextAlign::Center)
            .anchor(TextAnchor::Middle);

        if i + 1 < stages.len() {
            slide
                .add_text_box("→", Rect::from_inches(x + STAGE_W + 0.1, 3.8, 0.5, 0.5))
                .font_size(28.0)
                .color(&palette.muted.hex());
        }
    }
}

fn draw_roadmap(slide: &mut MutableSlide, completed: &[String], gaps: &[String], palette: &Palette) {
    for (i, item) in completed.iter().enumerate() {
        let y = ROADMAP_LIST_TOP + i as f64 * ROADMAP_ROW;
        slide
            .add_text_box(&format!("✓  {}", item), Rect::from_inches(0.75, y, 5.0, 0.4))
            .font_size(16.0)
            .color(&palette.success.hex());
    }

    slide
        .add_shape(
            Geometry::RoundRect,
            Rect::from_inches(6.5, 2.5, 5.5, 3.0),
            Some(&palette.surface.hex()),
        )
        .line(&palette.warning.hex(), 2.0);
    slide
        .add_text_box("⚠️  Honest Gaps", Rect::from_inches(6.8, 2.7, 5.0, 0.5))
        .font_size(14.0)
        .bold(true)
        .color(&palette.warning.hex());
    for (i, gap) in gaps.iter().enumerate() {
        let y = 3.3 + i as f64 * 0.5;
        slide
            .add_text_box(&format!("{}. {}", i + 1, gap), Rect::from_inches(6.8, y, 5.0, 0.4))
            .font_size(14.0)
            .color(&palette.muted.hex());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::new(width, height);
        img.save(path).unwrap();
    }

    #[test]
    fn test_every_slide_has_notes_and_name() {
        let deck = build(&ContentConfig::default(), "default", None).unwrap();
        let pres = to_presentation(&deck);
        assert_eq!(pres.slide_count(), 10);
        for (slide, kind) in pres.slides().zip(SlideKind::ALL) {
            assert_eq!(slide.name(), Some(kind.label()));
            assert_eq!(slide.notes(), Some(speaker_notes(kind)));
            assert_eq!(slide.background_color(), Some("FFFFFF"));
        }
    }

    #[test]
    fn test_demo_placeholder_without_image() {
        let deck = build(&ContentConfig::default(), "default", None).unwrap();
        let pres = to_presentation(&deck);
        let demo = pres.slide(SlideKind::Demo.number() - 1).unwrap();
        assert!(demo.text().contains("Add your demo screenshot here"));
    }

    #[test]
    fn test_screenshot_is_fitted_and_centered() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("slide_06.png"), 400, 100);

        let deck = build(&ContentConfig::default(), "default", Some(dir.path())).unwrap();
        let pres = to_presentation(&deck);
        let demo = pres.slide(5).unwrap();

        assert!(!demo.text().contains("Add your demo screenshot here"));
        let picture = demo.shapes().find(|s| s.is_picture()).unwrap();
        let region = image_region(&deck.slide_of(SlideKind::Demo).unwrap().content).unwrap();
        let rect = picture.rect();

        // 4:1 image in a 2:1 region: width-bound, vertically centered
        assert_eq!(rect.width, region.width);
        assert!((rect.width - 4 * rect.height).abs() <= 4);
        let top = rect.y - region.y;
        let bottom = (region.y + region.height) - (rect.y + rect.height);
        assert!((top - bottom).abs() <= 1);
    }

    #[test]
    fn test_roadmap_screenshot_sits_below_completed_list() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("8.png"), 64, 48);
        let mut content = ContentConfig::default();
        content.roadmap.completed = (1..=5).map(|i| format!("Milestone {}", i)).collect();

        let deck = build(&content, "default", Some(dir.path())).unwrap();
        let pres = to_presentation(&deck);
        let roadmap = pres.slide(SlideKind::Roadmap.number() - 1).unwrap();

        let list_bottom = roadmap
            .shapes()
            .filter(|s| s.text().starts_with('✓'))
            .map(|s| s.rect().y + s.rect().height)
            .max()
            .unwrap();
        let picture = roadmap.shapes().find(|s| s.is_picture()).unwrap();
        assert!(picture.rect().y >= list_bottom);
        let slide_floor = Rect::from_inches(0.0, IMAGE_BOTTOM, 0.0, 0.0).y;
        assert!(picture.rect().y + picture.rect().height <= slide_floor + 1);
    }

    #[test]
    fn test_long_roadmap_skips_screenshot() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("8.png"), 64, 48);
        let mut content = ContentConfig::default();
        content.roadmap.completed = (1..=9).map(|i| format!("Milestone {}", i)).collect();

        let deck = build(&content, "default", Some(dir.path())).unwrap();
        let pres = to_presentation(&deck);
        let roadmap = pres.slide(SlideKind::Roadmap.number() - 1).unwrap();
        assert!(!roadmap.shapes().any(|s| s.is_picture()));
        assert_eq!(roadmap.text().matches('✓').count(), 9);
    }

    #[test]
    fn test_label_title_and_placeholder_formatting() {
        let deck = build(&ContentConfig::default(), "default", None).unwrap();
        let pres = to_presentation(&deck);
        let demo = pres.slide(SlideKind::Demo.number() - 1).unwrap();

        let shape_xml = |needle: &str| {
            let shape = demo.shapes().find(|s| s.text().contains(needle)).unwrap();
            let mut xml = String::new();
            shape.to_xml(&mut xml, None).unwrap();
            xml
        };

        let label = shape_xml("LIVE DEMO");
        assert!(label.contains(r#"wrap="none""#));

        let title = demo.shapes().nth(1).unwrap();
        assert_eq!(title.paragraphs()[0].format.font.as_deref(), Some(HEADING_FONT));
        let title_xml = shape_xml(&title.text());
        assert!(title_xml.contains(r#"<a:latin typeface="+mj-lt"/>"#));

        let placeholder = shape_xml("Add your demo screenshot here");
        assert!(placeholder.contains(r#" i="1""#));
        assert!(placeholder.contains(r#"wrap="square""#));
    }

    #[test]
    fn test_undecodable_screenshot_degrades() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("4.png"), b"not really a png").unwrap();

        let deck = build(&ContentConfig::default(), "default", Some(dir.path())).unwrap();
        assert_eq!(deck.image_count(), 1);

        let out = dir.path().join("deck.pptx");
        let summary = render(&deck, &out).unwrap();
        assert_eq!(summary.images, 0);
        assert_eq!(summary.slides, 10);
        assert!(out.exists());
    }

    #[test]
    fn test_iceberg_problem_draws_bands() {
        let deck = build(&ContentConfig::default(), "iceberg", None).unwrap();
        let pres = to_presentation(&deck);
        let problem = pres.slide(SlideKind::Problem.number() - 1).unwrap();
        let fills: Vec<&str> = problem.shapes().filter_map(|s| s.fill_color()).collect();
        assert!(fills.contains(&"E0F2FE"));
        assert!(fills.contains(&"0C4A6E"));
        assert!(problem.text().contains("What it really costs"));
        assert!(!problem.text().contains("THE RISK"));
    }

    #[test]
    fn test_unwritable_output_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let deck = build(&ContentConfig::default(), "default", None).unwrap();

        let err = render(&deck, &dir.path().join("missing").join("deck.pptx")).unwrap_err();
        assert!(err.is_configuration());

        let err = render(&deck, dir.path()).unwrap_err();
        assert!(err.is_configuration());
    }
}
