//! # tokenized
//!
//! Strings made of plain text and typed token placeholders.
//!
//! A [`TokenSequence`] holds the ordered elements. The [`codec`] module turns a
//! sequence into flat delimited text such as `Hello %[name]!` and parses it
//! back. The [`formats`] module adds structured JSON / YAML records and a
//! registry of named formats, and [`editing`] carries small helpers for
//! interactive editors.

pub mod codec;
pub mod editing;
pub mod formats;
pub mod sequence;

pub use codec::{Delimiters, FnCodec, IdentityCodec, ParseError, TokenCodec, TokenizedStringCodec};
pub use sequence::{Element, TokenSequence};
