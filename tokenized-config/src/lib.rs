//! Shared configuration loader for the tokenized toolchain.
//!
//! `defaults/tokenized.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`TokenizedConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/tokenized.default.toml");

/// Top-level configuration consumed by tokenized applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenizedConfig {
    pub delimiters: DelimitersConfig,
    pub render: RenderConfig,
    pub completions: CompletionsConfig,
    pub tokens: TokensConfig,
}

/// Token boundaries used by the delimited text codec.
#[derive(Debug, Clone, Deserialize)]
pub struct DelimitersConfig {
    pub prefix: String,
    pub suffix: String,
}

/// Controls how a sequence is flattened for display.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub separator: String,
    pub missing: MissingSubstitution,
}

/// Fallback used when a token has no substitution value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingSubstitution {
    /// Render the bare token identifier.
    Identifier,
    /// Render nothing.
    Empty,
    /// Render the identifier wrapped in the configured delimiters.
    Delimited,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionsConfig {
    pub min_substring_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
    pub allowed: Vec<String>,
}

/// File picked up from the working directory when no explicit file is given.
pub const PROJECT_FILE: &str = "tokenized.toml";

/// Builds a [`TokenizedConfig`] from layered sources. Later layers win:
///
/// 1. the embedded defaults,
/// 2. a configuration file ([`PROJECT_FILE`] or an explicit `--config` path),
/// 3. individual overrides such as command-line delimiters.
///
/// [`Loader::build`] rejects empty delimiters, so a successfully built config
/// can always be turned into a codec.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a configuration file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Layer [`PROJECT_FILE`] from the working directory, if present.
    pub fn with_project_file(self) -> Self {
        self.with_optional_file(PROJECT_FILE)
    }

    /// Replace either delimiter; `None` keeps the layered value.
    pub fn with_delimiters(
        self,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut loader = self;
        if let Some(prefix) = prefix {
            loader = loader.set_override("delimiters.prefix", prefix)?;
        }
        if let Some(suffix) = suffix {
            loader = loader.set_override("delimiters.suffix", suffix)?;
        }
        Ok(loader)
    }

    /// Apply a single key/value override, e.g. `render.missing`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TokenizedConfig, ConfigError> {
        let config: TokenizedConfig = self.builder.build()?.try_deserialize()?;
        config.delimiters.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitersConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::Message(
                "delimiters.prefix must not be empty".to_string(),
            ));
        }
        if self.suffix.is_empty() {
            return Err(ConfigError::Message(
                "delimiters.suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<TokenizedConfig, ConfigError> {
    Loader::new().build()
}
