//! JSON and YAML record-list formats.
//!
//! Both write the [interchange](super::interchange) encoding, one single-key
//! record per element.

use super::registry::{FormatError, Formatter};
use crate::sequence::TokenSequence;

/// Pretty-printed JSON record list.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, sequence: &TokenSequence<String>) -> Result<String, FormatError> {
        serde_json::to_string_pretty(sequence)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, input: &str) -> Result<TokenSequence<String>, FormatError> {
        serde_json::from_str(input).map_err(|e| FormatError::DeserializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON list of {\"token\": ..} / {\"string\": ..} records"
    }
}

/// YAML record list.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, sequence: &TokenSequence<String>) -> Result<String, FormatError> {
        serde_yaml::to_string(sequence).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, input: &str) -> Result<TokenSequence<String>, FormatError> {
        serde_yaml::from_str(input).map_err(|e| FormatError::DeserializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML list of token: / string: records"
    }
}
