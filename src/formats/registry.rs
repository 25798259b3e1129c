//! Format registry for sequence serialization
//!
//! This module provides a pluggable registry of textual representations for
//! string-token sequences. Each format implements the `Formatter` trait and can
//! be registered with `FormatRegistry`.

use crate::codec::Delimiters;
use crate::sequence::TokenSequence;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// Input could not be read back into a sequence
    DeserializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::DeserializationError(msg) => write!(f, "Deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for sequence formatters
///
/// Implementors read and write a `TokenSequence<String>` in one textual
/// representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tokenized", "json")
    fn name(&self) -> &str;

    /// Serialize a sequence to this format
    fn serialize(&self, sequence: &TokenSequence<String>) -> Result<String, FormatError>;

    /// Read a sequence back from this format
    fn deserialize(&self, input: &str) -> Result<TokenSequence<String>, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of sequence formatters
///
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        tracing::trace!(format = formatter.name(), "registering formatter");
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a sequence using the specified format
    pub fn serialize(
        &self,
        sequence: &TokenSequence<String>,
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(sequence)
    }

    /// Read a sequence using the specified format
    pub fn deserialize(
        &self,
        input: &str,
        format: &str,
    ) -> Result<TokenSequence<String>, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.deserialize(input)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    ///
    /// The `tokenized` format accepts any identifier.
    pub fn with_defaults(delimiters: Delimiters) -> Self {
        let mut registry = Self::new();

        registry.register(super::TokenizedFormatter::new(delimiters));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(Delimiters::default())
    }
}
