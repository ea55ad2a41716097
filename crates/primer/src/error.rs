//! Error types for Primer operations.
//!
//! [`PrimerError`] is the top-level error. Layer-specific errors
//! ([`VisualSpecError`], [`SurfaceError`], [`DefinitionError`]) convert into
//! it with `?`.

use std::io;

use thiserror::Error;

use primer_core::draw::SurfaceError;

use crate::{definition::DefinitionError, visual::VisualSpecError};

/// The main error type for Primer operations.
#[derive(Debug, Error)]
pub enum PrimerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid visual specification: {0}")]
    InvalidVisual(#[from] VisualSpecError),

    #[error("Export error: {0}")]
    Export(#[from] SurfaceError),

    #[error("Invalid worksheet definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Configuration error: {0}")]
    Config(String),
}
