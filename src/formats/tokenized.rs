//! Delimited text format, backed by [`TokenizedStringCodec`].

use super::registry::{FormatError, Formatter};
use crate::codec::{AllowListCodec, Delimiters, IdentityCodec, TokenCodec, TokenizedStringCodec};
use crate::sequence::TokenSequence;

type StringCodec = Box<dyn TokenCodec<String> + Send + Sync>;

/// Formatter for `Hello %[name]`-style delimited text.
pub struct TokenizedFormatter {
    codec: TokenizedStringCodec<StringCodec>,
}

impl TokenizedFormatter {
    /// Accepts any identifier when reading.
    pub fn new(delimiters: Delimiters) -> Self {
        let codec: StringCodec = Box::new(IdentityCodec);
        TokenizedFormatter {
            codec: TokenizedStringCodec::with_delimiters(delimiters, codec),
        }
    }

    /// Only identifiers in `allowed` are read back as tokens.
    pub fn restricted(delimiters: Delimiters, allowed: AllowListCodec) -> Self {
        let codec: StringCodec = Box::new(allowed);
        TokenizedFormatter {
            codec: TokenizedStringCodec::with_delimiters(delimiters, codec),
        }
    }

    pub fn delimiters(&self) -> &Delimiters {
        self.codec.delimiters()
    }
}

impl Formatter for TokenizedFormatter {
    fn name(&self) -> &str {
        "tokenized"
    }

    fn serialize(&self, sequence: &TokenSequence<String>) -> Result<String, FormatError> {
        Ok(self.codec.serialize(sequence))
    }

    fn deserialize(&self, input: &str) -> Result<TokenSequence<String>, FormatError> {
        self.codec
            .parse(input)
            .map_err(|e| FormatError::DeserializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Plain text with delimited token identifiers"
    }
}
