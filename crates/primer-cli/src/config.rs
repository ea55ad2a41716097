//! Configuration file discovery for the CLI.
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among `primer/config.toml` (relative to the working directory) and
//! the platform config directory's `config.toml` is used; if neither
//! exists the built-in defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use primer::{PrimerError, config::AppConfig};

const LOCAL_CONFIG: &str = "primer/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for PrimerError {
    fn from(err: ConfigError) -> Self {
        PrimerError::Config(err.to_string())
    }
}

/// Resolves and loads the configuration.
///
/// # Errors
///
/// Returns [`PrimerError::Config`] if an explicit path does not exist or the
/// chosen file is not valid configuration TOML, and [`PrimerError::Io`] if it
/// cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PrimerError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    match search_paths().into_iter().find(|path| path.exists()) {
        Some(path) => read_config(&path),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit configuration locations, highest priority first.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "primer", "primer") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

fn read_config(path: &Path) -> Result<AppConfig, PrimerError> {
    info!(path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_explicit_path_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[page]\nproblems_per_page = 3").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.page().problems_per_page().get(), 3);
    }

    #[test]
    fn test_missing_explicit_path_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(PrimerError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout\nspacing = ").unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(PrimerError::Config(msg)) if msg.contains("parse")));
    }

    #[test]
    fn test_local_config_has_priority() {
        let paths = search_paths();
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG));
    }
}
