//! Error adapter for converting PrimerError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Worksheet errors
//! carry no source spans, so the adapter contributes a code and, where one
//! helps, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use primer::{PrimerError, definition::DefinitionError, visual::VisualSpecError};

/// Adapter for [`PrimerError`].
pub struct ErrorAdapter<'a>(pub &'a PrimerError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PrimerError::Io(_) => "primer::io",
            PrimerError::InvalidVisual(_) => "primer::visual",
            PrimerError::Export(_) => "primer::export",
            PrimerError::Definition(_) => "primer::definition",
            PrimerError::Config(_) => "primer::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PrimerError::InvalidVisual(err)
            | PrimerError::Definition(DefinitionError::InvalidVisual { source: err, .. }) => {
                visual_help(err)
            }
            PrimerError::Definition(DefinitionError::MissingVisualType { .. }) => {
                "add `type = \"countable_objects\"` (or grouped_objects, array, number_line, fraction_circle)"
            }
            PrimerError::Definition(DefinitionError::Parse(_)) => {
                "a definition needs `title`, `grade`, `topic` and a `[[problems]]` list"
            }
            PrimerError::Export(_) => "check that the output directory exists and is writable",
            PrimerError::Config(_) => "run without `--config` to use the built-in defaults",
            PrimerError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn visual_help(err: &VisualSpecError) -> &'static str {
    match err {
        VisualSpecError::InvalidRange { .. } => "a number line needs `start` below `end`",
        VisualSpecError::RangeTooWide { .. } => "keep `end - start` at 100 or less",
        VisualSpecError::OverShaded { .. } => "`shaded_parts` cannot exceed `total_parts`",
        VisualSpecError::EmptyGroups | VisualSpecError::ZeroGroup { .. } => {
            "`groups` needs at least one group, each with one or more objects"
        }
        VisualSpecError::ZeroDimension { .. } => "`rows` and `cols` must both be at least 1",
        VisualSpecError::ZeroParts => "`total_parts` must be at least 1",
    }
}

/// Wrap a [`PrimerError`] for rendering by miette.
pub fn to_reportable(err: &PrimerError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_codes_follow_variant() {
        let err = PrimerError::Config("bad".to_string());
        let adapter = to_reportable(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "primer::config");

        let err = PrimerError::Io(io::Error::other("disk"));
        let adapter = to_reportable(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "primer::io");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_nested_visual_error_gets_visual_help() {
        let err = PrimerError::Definition(DefinitionError::InvalidVisual {
            problem: 2,
            source: VisualSpecError::OverShaded {
                shaded: 5,
                total: 4,
            },
        });
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "primer::definition");
        assert!(adapter.help().unwrap().to_string().contains("shaded_parts"));
        assert!(adapter.to_string().contains("problem 2"));
    }

    #[test]
    fn test_renders_through_graphical_handler() {
        let err = PrimerError::InvalidVisual(VisualSpecError::InvalidRange { start: 5, end: 5 });
        let adapter = to_reportable(&err);

        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &adapter)
            .unwrap();
        assert!(out.contains("primer::visual"));
    }
}
