//! Delimited text codec
//!
//! Converts between a [`TokenSequence`] and a single flat string in which each
//! token is written as `prefix + identifier + suffix`, for example
//! `Hello %[name], it is %[time].` with the default `%[` / `]` delimiters.
//!
//! Token identifiers come from a [`TokenCodec`] supplied by the consumer. The
//! codec itself never inspects token values.
//!
//! There is no escaping syntax. Plain text that happens to contain the prefix
//! is read back as the start of a token, and identifiers containing the suffix
//! do not survive a round trip.

mod delimiters;
mod error;
mod parser;
mod serializer;
mod token_codec;

pub use delimiters::{Delimiters, DEFAULT_PREFIX, DEFAULT_SUFFIX};
pub use error::ParseError;
pub use parser::parse_delimited;
pub use serializer::serialize_delimited;
pub use token_codec::{AllowListCodec, FnCodec, IdentityCodec, TokenCodec};

use crate::sequence::TokenSequence;

/// Bidirectional converter between sequences and delimited text.
#[derive(Debug, Clone, Default)]
pub struct TokenizedStringCodec<C> {
    delimiters: Delimiters,
    codec: C,
}

impl<C> TokenizedStringCodec<C> {
    /// Creates a codec using the default `%[` / `]` delimiters.
    pub fn new(codec: C) -> Self {
        Self::with_delimiters(Delimiters::default(), codec)
    }

    pub fn with_delimiters(delimiters: Delimiters, codec: C) -> Self {
        TokenizedStringCodec { delimiters, codec }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn token_codec(&self) -> &C {
        &self.codec
    }

    /// Parses delimited text into a sequence.
    pub fn parse<T>(&self, text: &str) -> Result<TokenSequence<T>, ParseError>
    where
        C: TokenCodec<T>,
    {
        parse_delimited(text, &self.delimiters, |identifier| {
            self.codec.decode(identifier)
        })
    }

    /// Serializes a sequence into delimited text.
    pub fn serialize<T>(&self, sequence: &TokenSequence<T>) -> String
    where
        C: TokenCodec<T>,
    {
        serialize_delimited(sequence, &self.delimiters, |token| self.codec.encode(token))
    }
}

/// Parses `text` using explicit delimiters and a decode function.
///
/// # Panics
/// Panics if `prefix` or `suffix` is empty.
pub fn parse<T, D>(
    text: &str,
    prefix: &str,
    suffix: &str,
    decode: D,
) -> Result<TokenSequence<T>, ParseError>
where
    D: FnMut(&str) -> Option<T>,
{
    parse_delimited(text, &Delimiters::new(prefix, suffix), decode)
}

/// Serializes `sequence` using explicit delimiters and an encode function.
///
/// # Panics
/// Panics if `prefix` or `suffix` is empty.
pub fn serialize<T, E>(sequence: &TokenSequence<T>, prefix: &str, suffix: &str, encode: E) -> String
where
    E: FnMut(&T) -> String,
{
    serialize_delimited(sequence, &Delimiters::new(prefix, suffix), encode)
}

impl TokenSequence<String> {
    /// Parses delimited text with the default delimiters, accepting any
    /// identifier as a string token.
    pub fn from_tokenized_str(text: &str) -> Result<Self, ParseError> {
        TokenizedStringCodec::new(IdentityCodec).parse(text)
    }

    /// Serializes with the default delimiters.
    pub fn to_tokenized_string(&self) -> String {
        TokenizedStringCodec::new(IdentityCodec).serialize(self)
    }
}
