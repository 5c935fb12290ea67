//! Deck assembly: content + palette + screenshots into ordered slide specs.

use super::content::ContentConfig;
use super::palette::{Palette, PaletteName};
use super::screenshots::ScreenshotSet;
use super::slide::{ProblemLayout, SlideContent, SlideKind, SlideSpec};
use crate::common::error::Result;
use std::path::Path;

/// An ordered set of slides paired with the palette they are drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<SlideSpec>,
    palette: &'static Palette,
}

impl Deck {
    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    /// Slide by 1-based number.
    pub fn slide(&self, number: usize) -> Option<&SlideSpec> {
        number.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    /// Slide of the given kind.
    pub fn slide_of(&self, kind: SlideKind) -> Option<&SlideSpec> {
        self.slides.iter().find(|s| s.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of slides with a screenshot attached.
    pub fn image_count(&self) -> usize {
        self.slides.iter().filter(|s| s.image.is_some()).count()
    }
}

/// Assemble a deck.
///
/// The palette name is validated before anything else happens; an unknown
/// name is a configuration error. A screenshot directory that is missing
/// or unreadable only means no screenshots.
pub fn build(
    content: &ContentConfig,
    palette_name: &str,
    screenshot_dir: Option<&Path>,
) -> Result<Deck> {
    let name: PaletteName = palette_name.parse()?;
    let palette = name.palette();
    log::info!("assembling deck with palette '{}'", name);

    let eligible: Vec<usize> = SlideKind::image_slide_numbers().collect();
    let screenshots = match screenshot_dir {
        Some(dir) => ScreenshotSet::scan(dir, &eligible),
        None => ScreenshotSet::new(),
    };

    let slides = SlideKind::ALL
        .into_iter()
        .map(|kind| {
            let (title, body) = slide_body(kind, content, palette);
            let image = if kind.accepts_image() {
                screenshots.get(kind.number()).map(Path::to_path_buf)
            } else {
                None
            };
            SlideSpec {
                number: kind.number(),
                title,
                content: body,
                image,
            }
        })
        .collect();

    Ok(Deck { slides, palette })
}

fn slide_body(
    kind: SlideKind,
    content: &ContentConfig,
    palette: &Palette,
) -> (String, SlideContent) {
    match kind {
        SlideKind::Cover => (
            content.title.product_name.clone(),
            SlideContent::Cover {
                tagline: content.title.tagline.clone(),
                features: content.title.features.clone(),
            },
        ),
        SlideKind::Agenda => {
            let items = if content.agenda.items.is_empty() {
                SlideKind::ALL
                    .into_iter()
                    .filter(|k| !matches!(k, SlideKind::Cover | SlideKind::Agenda | SlideKind::Closing))
                    .map(|k| k.label().to_string())
                    .collect()
            } else {
                content.agenda.items.clone()
            };
            (content.agenda.title.clone(), SlideContent::Agenda { items })
        },
        SlideKind::Problem => {
            let problem = &content.problem;
            let layout = match palette.iceberg {
                Some(bands) => ProblemLayout::Iceberg {
                    visible_cost: problem.iceberg.visible_cost.clone(),
                    visible_label: problem.iceberg.visible_label.clone(),
                    hidden_cost_label: problem.iceberg.hidden_cost_label.clone(),
                    hidden_costs: problem.iceberg.hidden_costs.clone(),
                    sky: bands.sky,
                    ocean: bands.ocean,
                },
                None => ProblemLayout::Bullets {
                    pain_points: problem.pain_points.clone(),
                    risk: problem.risk.clone(),
                },
            };
            (problem.title.clone(), SlideContent::Problem(layout))
        },
        SlideKind::Scale => (
            content.scale.title.clone(),
            SlideContent::Scale {
                stats: content.scale.stats.clone(),
            },
        ),
        SlideKind::Solution => (
            content.solution.title.clone(),
            SlideContent::Solution {
                stages: content.solution.stages.clone(),
            },
        ),
        SlideKind::Demo => (
            content.demo.title.clone(),
            SlideContent::Demo {
                placeholder: content.demo.placeholder.clone(),
            },
        ),
        SlideKind::Results => (
            content.results.title.clone(),
            SlideContent::Results {
                metrics: content.results.metrics.clone(),
            },
        ),
        SlideKind::Roadmap => (
            content.roadmap.title.clone(),
            SlideContent::Roadmap {
                completed: content.roadmap.completed.clone(),
                gaps: content.roadmap.gaps.clone(),
            },
        ),
        SlideKind::Ask => (
            content.ask.title.clone(),
            SlideContent::Ask {
                feedback_question: content.ask.feedback_question.clone(),
                priority_question: content.ask.priority_question.clone(),
            },
        ),
        SlideKind::Closing => (
            content.closing.headline.clone(),
            SlideContent::Closing {
                subline: content.closing.subline.clone(),
                product_name: content.title.product_name.clone(),
            },
        ),
    }
}
