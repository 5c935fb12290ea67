//! Slide specifications: the in-memory description of each slide before
//! it is laid out on a PresentationML slide.

use super::content::{Feature, Metric, Stat};
use super::palette::Rgb;
use std::path::PathBuf;

/// The ten slide kinds, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlideKind {
    Cover,
    Agenda,
    Problem,
    Scale,
    Solution,
    Demo,
    Results,
    Roadmap,
    Ask,
    Closing,
}

impl SlideKind {
    /// Every kind in canonical deck order.
    pub const ALL: [SlideKind; 10] = [
        SlideKind::Cover,
        SlideKind::Agenda,
        SlideKind::Problem,
        SlideKind::Scale,
        SlideKind::Solution,
        SlideKind::Demo,
        SlideKind::Results,
        SlideKind::Roadmap,
        SlideKind::Ask,
        SlideKind::Closing,
    ];

    /// 1-based position in the deck.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Section label shown above the action title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cover => "Cover",
            Self::Agenda => "Agenda",
            Self::Problem => "The Problem",
            Self::Scale => "The Scale",
            Self::Solution => "The Solution",
            Self::Demo => "Live Demo",
            Self::Results => "The Proof",
            Self::Roadmap => "Roadmap",
            Self::Ask => "The Ask",
            Self::Closing => "Closing",
        }
    }

    /// Whether a screenshot may be attached to this kind.
    pub fn accepts_image(self) -> bool {
        matches!(
            self,
            Self::Scale | Self::Solution | Self::Demo | Self::Results | Self::Roadmap
        )
    }

    /// Slide numbers that accept a screenshot.
    pub fn image_slide_numbers() -> impl Iterator<Item = usize> {
        Self::ALL
            .into_iter()
            .filter(|k| k.accepts_image())
            .map(|k| k.number())
    }
}

/// Problem slide body. The iceberg variant replaces the bullet list under
/// the iceberg palette.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemLayout {
    Bullets {
        pain_points: Vec<String>,
        risk: String,
    },
    Iceberg {
        visible_cost: String,
        visible_label: String,
        hidden_cost_label: String,
        hidden_costs: Vec<String>,
        sky: Rgb,
        ocean: Rgb,
    },
}

/// Per-kind slide body.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Cover {
        tagline: String,
        features: Vec<Feature>,
    },
    Agenda {
        items: Vec<String>,
    },
    Problem(ProblemLayout),
    Scale {
        stats: Vec<Stat>,
    },
    Solution {
        stages: Vec<String>,
    },
    Demo {
        placeholder: String,
    },
    Results {
        metrics: Vec<Metric>,
    },
    Roadmap {
        completed: Vec<String>,
        gaps: Vec<String>,
    },
    Ask {
        feedback_question: String,
        priority_question: String,
    },
    Closing {
        subline: String,
        product_name: String,
    },
}

impl SlideContent {
    pub fn kind(&self) -> SlideKind {
        match self {
            Self::Cover { .. } => SlideKind::Cover,
            Self::Agenda { .. } => SlideKind::Agenda,
            Self::Problem(_) => SlideKind::Problem,
            Self::Scale { .. } => SlideKind::Scale,
            Self::Solution { .. } => SlideKind::Solution,
            Self::Demo { .. } => SlideKind::Demo,
            Self::Results { .. } => SlideKind::Results,
            Self::Roadmap { .. } => SlideKind::Roadmap,
            Self::Ask { .. } => SlideKind::Ask,
            Self::Closing { .. } => SlideKind::Closing,
        }
    }
}

/// One slide of a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    /// 1-based slide number
    pub number: usize,
    pub title: String,
    pub content: SlideContent,
    /// Screenshot to embed, if one matched this slide
    pub image: Option<PathBuf>,
}

impl SlideSpec {
    pub fn kind(&self) -> SlideKind {
        self.content.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_order() {
        let numbers: Vec<usize> = SlideKind::ALL.iter().map(|k| k.number()).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_image_slides_are_four_to_eight() {
        let eligible: Vec<usize> = SlideKind::image_slide_numbers().collect();
        assert_eq!(eligible, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_content_kind() {
        let content = SlideContent::Problem(ProblemLayout::Bullets {
            pain_points: vec![],
            risk: String::new(),
        });
        assert_eq!(content.kind(), SlideKind::Problem);
    }
}
