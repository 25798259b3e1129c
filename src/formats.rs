//! Textual representations of token sequences
//!
//! This module contains:
//! - the structured interchange encoding (serde impls for `Element`)
//! - a registry of named formats for string-token sequences
//! - built-in formats: delimited text, JSON and YAML

pub mod interchange;
pub mod registry;
pub mod structured;
pub mod tokenized;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use tokenized::TokenizedFormatter;
