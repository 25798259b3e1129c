use super::delimiters::Delimiters;
use crate::sequence::{Element, TokenSequence};

/// Renders a sequence as delimited text. Never fails.
///
/// Tokens become `prefix + encode(token) + suffix`; text spans are emitted
/// verbatim.
pub fn serialize_delimited<T, E>(
    sequence: &TokenSequence<T>,
    delimiters: &Delimiters,
    mut encode: E,
) -> String
where
    E: FnMut(&T) -> String,
{
    let mut out = String::new();
    for element in sequence {
        match element {
            Element::Token(token) => {
                out.push_str(delimiters.prefix());
                out.push_str(&encode(token));
                out.push_str(delimiters.suffix());
            }
            Element::Text(text) => out.push_str(text),
        }
    }
    out
}
