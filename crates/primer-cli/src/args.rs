//! Command-line argument definitions for the Primer CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The `generate` subcommand renders a worksheet and its
//! answer key from a TOML definition; `list-objects` prints the shape
//! library's catalog.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Primer worksheet tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a worksheet and its answer key
    Generate {
        /// Path to the worksheet definition (TOML)
        #[arg(help = "Path to the worksheet definition")]
        definition: String,

        /// Path to the worksheet SVG file
        #[arg(short, long, default_value = "worksheet.svg")]
        output: String,

        /// Path to the answer key SVG file
        #[arg(short, long, default_value = "answer_key.svg")]
        answer_key: String,

        /// Path to configuration file (TOML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List the object types the shape library can draw
    ListObjects,
}
