//! Worksheet definitions loaded from TOML.
//!
//! ```toml
//! title = "Addition Practice - Food Fun!"
//! grade = 1
//! topic = "Addition within 10"
//! theme = "food"
//!
//! [[problems]]
//! question = "How many strawberries in total?"
//! answer = "3 + 2 = 5"
//! visual = { type = "grouped_objects", object_type = "strawberry", groups = [3, 2] }
//! ```
//!
//! Visual tables are tagged by `type`. A table with an unrecognised tag is
//! dropped with a warning and the problem is rendered without a visual.

use std::{fs, path::Path};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    Worksheet,
    config::AppConfig,
    visual::{VisualSpec, VisualSpecError},
};

const DEFAULT_OBJECT_TYPE: &str = "circle";
const DEFAULT_THEME: &str = "default";
const VISUAL_TAGS: [&str; 5] = [
    "countable_objects",
    "grouped_objects",
    "array",
    "number_line",
    "fraction_circle",
];

/// Errors raised while loading a worksheet definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to parse definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("problem {problem}: visual table has no `type`")]
    MissingVisualType { problem: usize },

    #[error("problem {problem}: {source}")]
    InvalidVisual {
        problem: usize,
        source: VisualSpecError,
    },
}

/// A grade given either as a number or as free text ("K", "2-3").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GradeLabel {
    Number(i64),
    Text(String),
}

impl GradeLabel {
    pub fn as_label(&self) -> String {
        match self {
            Self::Number(grade) => grade.to_string(),
            Self::Text(grade) => grade.clone(),
        }
    }
}

/// A whole worksheet as written in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorksheetDefinition {
    pub title: String,
    pub grade: GradeLabel,
    pub topic: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub problems: Vec<ProblemDefinition>,
}

/// One problem as written in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemDefinition {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub visual: Option<toml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum VisualDefinition {
    CountableObjects {
        #[serde(default = "default_object_type")]
        object_type: String,
        #[serde(default)]
        count: u32,
    },
    GroupedObjects {
        #[serde(default = "default_object_type")]
        object_type: String,
        #[serde(default)]
        groups: Vec<u32>,
    },
    Array {
        #[serde(default = "default_object_type")]
        object_type: String,
        #[serde(default = "default_rows")]
        rows: u32,
        #[serde(default = "default_cols")]
        cols: u32,
    },
    NumberLine {
        #[serde(default)]
        start: i32,
        #[serde(default = "default_end")]
        end: i32,
    },
    FractionCircle {
        #[serde(default = "default_total_parts")]
        total_parts: u32,
        #[serde(default = "default_shaded_parts")]
        shaded_parts: u32,
    },
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_object_type() -> String {
    DEFAULT_OBJECT_TYPE.to_string()
}

fn default_rows() -> u32 {
    3
}

fn default_cols() -> u32 {
    4
}

fn default_end() -> i32 {
    10
}

fn default_total_parts() -> u32 {
    4
}

fn default_shaded_parts() -> u32 {
    1
}

impl VisualDefinition {
    fn into_spec(self) -> Result<VisualSpec, VisualSpecError> {
        match self {
            Self::CountableObjects { object_type, count } => {
                Ok(VisualSpec::countable(object_type, count))
            }
            Self::GroupedObjects {
                object_type,
                groups,
            } => VisualSpec::grouped(object_type, groups),
            Self::Array {
                object_type,
                rows,
                cols,
            } => VisualSpec::array(object_type, rows, cols),
            Self::NumberLine { start, end } => VisualSpec::number_line(start, end),
            Self::FractionCircle {
                total_parts,
                shaded_parts,
            } => VisualSpec::fraction_circle(total_parts, shaded_parts),
        }
    }
}

impl WorksheetDefinition {
    /// Parses a definition from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] for malformed TOML or missing
    /// required fields.
    pub fn from_toml(source: &str) -> Result<Self, DefinitionError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a definition file.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::Io`](crate::PrimerError::Io) if the file cannot
    /// be read, or [`PrimerError::Definition`](crate::PrimerError::Definition)
    /// if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, crate::PrimerError> {
        let source = fs::read_to_string(path)?;
        Ok(Self::from_toml(&source)?)
    }

    /// Builds a worksheet from this definition.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidVisual`] if a recognised visual has
    /// invalid parameters, or [`DefinitionError::MissingVisualType`] if a
    /// visual table has no tag.
    pub fn into_worksheet(self, config: AppConfig) -> Result<Worksheet, DefinitionError> {
        let mut sheet = Worksheet::new(self.title, self.grade.as_label(), self.topic, self.theme)
            .with_config(config);

        for (index, problem) in self.problems.into_iter().enumerate() {
            let number = index + 1;
            let visual = problem
                .visual
                .map(|value| parse_visual(number, value))
                .transpose()?
                .flatten();
            sheet.add_problem(problem.question, problem.answer, visual);
        }

        Ok(sheet)
    }
}

fn parse_visual(problem: usize, value: toml::Value) -> Result<Option<VisualSpec>, DefinitionError> {
    let Some(tag) = value.get("type").and_then(toml::Value::as_str) else {
        return Err(DefinitionError::MissingVisualType { problem });
    };

    if !VISUAL_TAGS.contains(&tag) {
        warn!(problem, visual_type = tag; "Ignoring unknown visual type");
        return Ok(None);
    }
    debug!(problem, visual_type = tag; "Parsing visual");

    let definition: VisualDefinition = value.try_into()?;
    definition
        .into_spec()
        .map(Some)
        .map_err(|source| DefinitionError::InvalidVisual { problem, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOD: &str = r#"
        title = "Addition Practice - Food Fun!"
        grade = 1
        topic = "Addition within 10"
        theme = "food"

        [[problems]]
        question = "Count all the apples:"
        answer = "7 apples"
        visual = { type = "countable_objects", object_type = "apple", count = 7 }

        [[problems]]
        question = "How many strawberries in total?"
        answer = "3 + 2 = 5"
        visual = { type = "grouped_objects", object_type = "strawberry", groups = [3, 2] }

        [[problems]]
        question = "What is 2 + 2?"
        answer = "4"
    "#;

    #[test]
    fn test_parse_food_definition() {
        let definition = WorksheetDefinition::from_toml(FOOD).unwrap();
        assert_eq!(definition.grade, GradeLabel::Number(1));
        assert_eq!(definition.problems.len(), 3);

        let sheet = definition.into_worksheet(AppConfig::default()).unwrap();
        assert_eq!(sheet.heading().grade(), "1");
        assert_eq!(sheet.theme(), "food");

        let problems = sheet.problems();
        assert_eq!(
            problems[0].visual(),
            Some(&VisualSpec::countable("apple", 7))
        );
        assert_eq!(
            problems[1].visual(),
            Some(&VisualSpec::grouped("strawberry", [3, 2]).unwrap())
        );
        assert_eq!(problems[2].visual(), None);
    }

    #[test]
    fn test_defaults_follow_visual_type() {
        let definition = WorksheetDefinition::from_toml(
            r#"
            title = "Defaults"
            grade = "K"
            topic = "Shapes"

            [[problems]]
            question = "q"
            answer = "a"
            visual = { type = "array" }

            [[problems]]
            question = "q"
            answer = "a"
            visual = { type = "number_line" }

            [[problems]]
            question = "q"
            answer = "a"
            visual = { type = "fraction_circle" }
            "#,
        )
        .unwrap();
        assert_eq!(definition.theme, "default");

        let sheet = definition.into_worksheet(AppConfig::default()).unwrap();
        let visuals: Vec<_> = sheet.problems().iter().map(|p| p.visual().cloned()).collect();
        assert_eq!(
            visuals,
            vec![
                Some(VisualSpec::array("circle", 3, 4).unwrap()),
                Some(VisualSpec::number_line(0, 10).unwrap()),
                Some(VisualSpec::fraction_circle(4, 1).unwrap()),
            ]
        );
        assert_eq!(sheet.heading().grade(), "K");
    }

    #[test]
    fn test_unknown_visual_type_is_dropped() {
        let definition = WorksheetDefinition::from_toml(
            r#"
            title = "T"
            grade = 2
            topic = "t"

            [[problems]]
            question = "q"
            answer = "a"
            visual = { type = "pie_chart", slices = 3 }
            "#,
        )
        .unwrap();

        let sheet = definition.into_worksheet(AppConfig::default()).unwrap();
        assert_eq!(sheet.problems()[0].visual(), None);
    }

    #[test]
    fn test_invalid_visual_reports_problem_number() {
        let definition = WorksheetDefinition::from_toml(
            r#"
            title = "T"
            grade = 2
            topic = "t"

            [[problems]]
            question = "q"
            answer = "a"

            [[problems]]
            question = "q"
            answer = "a"
            visual = { type = "fraction_circle", total_parts = 4, shaded_parts = 5 }
            "#,
        )
        .unwrap();

        let err = definition.into_worksheet(AppConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::InvalidVisual {
                problem: 2,
                source: VisualSpecError::OverShaded { shaded: 5, total: 4 },
            }
        ));
    }

    #[test]
    fn test_missing_visual_type() {
        let definition = WorksheetDefinition::from_toml(
            r#"
            title = "T"
            grade = 2
            topic = "t"

            [[problems]]
            question = "q"
            answer = "a"
            visual = { count = 3 }
            "#,
        )
        .unwrap();

        assert!(matches!(
            definition.into_worksheet(AppConfig::default()),
            Err(DefinitionError::MissingVisualType { problem: 1 })
        ));
    }

    #[test]
    fn test_extreme_number_line_is_rejected() {
        let definition = WorksheetDefinition::from_toml(
            r#"
            title = "T"
            grade = 2
            topic = "t"

            [[problems]]
            question = "q"
            answer = "a"
            visual = { type = "number_line", start = -2147483648, end = 2147483647 }
            "#,
        )
        .unwrap();

        assert!(matches!(
            definition.into_worksheet(AppConfig::default()),
            Err(DefinitionError::InvalidVisual {
                problem: 1,
                source: VisualSpecError::RangeTooWide { .. },
            })
        ));
    }

    #[test]
    fn test_missing_title_is_parse_error() {
        let result = WorksheetDefinition::from_toml("grade = 1\ntopic = \"t\"");
        assert!(matches!(result, Err(DefinitionError::Parse(_))));
    }
}
