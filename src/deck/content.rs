//! Deck content configuration.
//!
//! [`ContentConfig`] holds the text of every slide. It deserializes from
//! YAML; any field left out keeps its template placeholder, so an empty
//! document produces the template deck.
//!
//! ```yaml
//! title:
//!   product_name: Acme Scanner
//!   tagline: Finds leaks before they ship
//! ask:
//!   title: 30 minutes of your time
//! ```

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Text of every slide in the deck.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    pub title: TitleContent,
    pub agenda: AgendaContent,
    pub problem: ProblemContent,
    pub scale: ScaleContent,
    pub solution: SolutionContent,
    pub demo: DemoContent,
    pub results: ResultsContent,
    pub roadmap: RoadmapContent,
    pub ask: AskContent,
    pub closing: ClosingContent,
}

impl ContentConfig {
    /// Parse YAML content. A blank document yields the template content.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_saphyr::from_str(yaml)?)
    }
}

/// Read a YAML content file.
///
/// Read and parse failures are configuration errors.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<ContentConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("cannot read content file {}: {}", path.display(), e))
    })?;
    log::debug!("loaded content file {}", path.display());
    ContentConfig::from_yaml_str(&yaml)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Default for Feature {
    fn default() -> Self {
        Self {
            title: "Feature".to_string(),
            description: "Brief description".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleContent {
    pub product_name: String,
    pub tagline: String,
    pub features: Vec<Feature>,
}

impl Default for TitleContent {
    fn default() -> Self {
        Self {
            product_name: "Your Product".to_string(),
            tagline: "One-sentence value proposition".to_string(),
            features: (1..=3)
                .map(|i| Feature {
                    title: format!("Feature {}", i),
                    ..Default::default()
                })
                .collect(),
        }
    }
}

/// Agenda slide. With no items the agenda lists the section labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgendaContent {
    pub title: String,
    pub items: Vec<String>,
}

impl Default for AgendaContent {
    fn default() -> Self {
        Self {
            title: "What we'll cover".to_string(),
            items: Vec::new(),
        }
    }
}

/// Fields of the iceberg rendering of the problem slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IcebergContent {
    pub visible_cost: String,
    pub visible_label: String,
    pub hidden_cost_label: String,
    pub hidden_costs: Vec<String>,
}

impl Default for IcebergContent {
    fn default() -> Self {
        Self {
            visible_cost: "$10K".to_string(),
            visible_label: "What everyone sees".to_string(),
            hidden_cost_label: "What it really costs".to_string(),
            hidden_costs: strings(&["Hidden cost 1", "Hidden cost 2", "Hidden cost 3"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProblemContent {
    pub title: String,
    pub pain_points: Vec<String>,
    pub risk: String,
    pub iceberg: IcebergContent,
}

impl Default for ProblemContent {
    fn default() -> Self {
        Self {
            title: "State the problem as an action title".to_string(),
            pain_points: strings(&["Pain point 1", "Pain point 2", "Pain point 3"]),
            risk: "What happens if this problem isn't solved?".to_string(),
            iceberg: IcebergContent::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
    /// Draw the card filled with its color instead of outlined
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleContent {
    pub title: String,
    pub stats: Vec<Stat>,
}

impl Default for ScaleContent {
    fn default() -> Self {
        let stat = |value: &str, label: &str, filled| Stat {
            value: value.to_string(),
            label: label.to_string(),
            filled,
        };
        Self {
            title: "Big number that shows the magnitude".to_string(),
            stats: vec![
                stat("100+", "metric 1", true),
                stat("50K", "metric 2", false),
                stat("99%", "metric 3", false),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolutionContent {
    pub title: String,
    pub stages: Vec<String>,
}

impl Default for SolutionContent {
    fn default() -> Self {
        Self {
            title: "How your product solves the problem".to_string(),
            stages: strings(&["Input", "Your Product", "Output"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoContent {
    pub title: String,
    /// Shown when no screenshot is attached
    pub placeholder: String,
}

impl Default for DemoContent {
    fn default() -> Self {
        Self {
            title: "Show, don't tell: demonstrate the core value".to_string(),
            placeholder: "📷 Add your demo screenshot here".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultsContent {
    pub title: String,
    pub metrics: Vec<Metric>,
}

impl Default for ResultsContent {
    fn default() -> Self {
        let metric = |value: &str, label: &str| Metric {
            value: value.to_string(),
            label: label.to_string(),
        };
        Self {
            title: "Metrics and evidence that it works".to_string(),
            metrics: vec![
                metric("95%", "Metric 1"),
                metric("2.5x", "Metric 2"),
                metric("100%", "Metric 3"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoadmapContent {
    pub title: String,
    pub completed: Vec<String>,
    pub gaps: Vec<String>,
}

impl Default for RoadmapContent {
    fn default() -> Self {
        Self {
            title: "What's done, what's next".to_string(),
            completed: strings(&["Milestone 1", "Milestone 2", "Milestone 3"]),
            gaps: strings(&["Known limitation", "Future work", "Open question"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AskContent {
    pub title: String,
    pub feedback_question: String,
    pub priority_question: String,
}

impl Default for AskContent {
    fn default() -> Self {
        Self {
            title: "What do you need from the audience?".to_string(),
            feedback_question: "What specific feedback do you want?".to_string(),
            priority_question: "What decision do you need help with?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClosingContent {
    pub headline: String,
    pub subline: String,
}

impl Default for ClosingContent {
    fn default() -> Self {
        Self {
            headline: "Thank You".to_string(),
            subline: "Questions?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_template() {
        assert_eq!(ContentConfig::from_yaml_str("").unwrap(), ContentConfig::default());
        assert_eq!(ContentConfig::from_yaml_str("  \n").unwrap(), ContentConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let yaml = "title:\n  product_name: Acme Scanner\nask:\n  title: 30 minutes of your time\n";
        let content = ContentConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(content.title.product_name, "Acme Scanner");
        assert_eq!(content.title.tagline, "One-sentence value proposition");
        assert_eq!(content.ask.title, "30 minutes of your time");
        assert_eq!(content.ask.feedback_question, AskContent::default().feedback_question);
        assert_eq!(content.scale.stats.len(), 3);
    }

    #[test]
    fn test_lists_and_nested_fields() {
        let yaml = r#"
scale:
  stats:
    - value: "12"
      label: teams
      filled: true
problem:
  iceberg:
    hidden_costs: [rework, churn]
"#;
        let content = ContentConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(content.scale.stats.len(), 1);
        assert!(content.scale.stats[0].filled);
        assert_eq!(content.problem.iceberg.hidden_costs, vec!["rework", "churn"]);
        assert_eq!(content.problem.iceberg.visible_cost, "$10K");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ContentConfig::from_yaml_str("title:\n  slogan: nope\n").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_load_content_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "demo:\n  title: Watch this").unwrap();
        let content = load_content(file.path()).unwrap();
        assert_eq!(content.demo.title, "Watch this");
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_content(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.is_configuration());
    }
}
