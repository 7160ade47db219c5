//! Loading [`AnalyzerConfig`] from TOML.
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! similarity_threshold = 0.9
//! min_word_chars = 3
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tally_types::{AnalyzerConfig, ConfigError};
use tracing::debug;

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML or has a wrongly typed key.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parses and validates a TOML document.
pub fn parse_config(source: &str) -> Result<AnalyzerConfig, ConfigLoadError> {
    let config: AnalyzerConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates a TOML file.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigLoadError> {
    let source = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&source)?;
    debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}
