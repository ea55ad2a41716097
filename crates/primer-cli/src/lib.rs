//! Primer CLI library
//!
//! This module contains the core CLI logic for the Primer worksheet tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use log::info;

use primer::{PrimerError, definition::WorksheetDefinition};

/// Run the Primer CLI application
///
/// `generate` loads the definition, builds the worksheet, and writes the
/// worksheet and answer key SVGs. `list-objects` prints one catalog name per
/// line.
///
/// # Errors
///
/// Returns `PrimerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Definition parsing and visual validation errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), PrimerError> {
    match &args.command {
        Command::Generate {
            definition,
            output,
            answer_key,
            config,
        } => generate(definition, output, answer_key, config.as_deref()),
        Command::ListObjects => {
            for name in primer::list_available_object_types() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn generate(
    definition: &str,
    output: &str,
    answer_key: &str,
    config_path: Option<&str>,
) -> Result<(), PrimerError> {
    info!(definition, output, answer_key; "Processing worksheet");

    let app_config = config::load_config(config_path)?;
    let sheet = WorksheetDefinition::load(definition)?.into_worksheet(app_config)?;

    let layout = sheet.generate(output)?;
    info!(output, pages = layout.page_count(); "Worksheet exported successfully");

    let key = sheet.generate_answer_key(answer_key)?;
    info!(answer_key, pages = key.page_count(); "Answer key exported successfully");

    Ok(())
}
