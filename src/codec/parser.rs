//! Delimited text scanner.
//!
//! Single left-to-right pass with a byte cursor. The scanner never backtracks
//! and never downgrades an unresolved token to plain text: a prefix with no
//! suffix, or a body that does not decode, fails the whole parse.
//!
//! Identifiers are passed to `decode` exactly as they appear between the
//! delimiters. Nothing is trimmed or case-folded, and a second prefix inside a
//! token body is just part of the candidate.

use super::delimiters::Delimiters;
use super::error::ParseError;
use crate::sequence::{Element, TokenSequence};

/// Parses `text` into a sequence, resolving identifiers with `decode`.
pub fn parse_delimited<T, D>(
    text: &str,
    delimiters: &Delimiters,
    mut decode: D,
) -> Result<TokenSequence<T>, ParseError>
where
    D: FnMut(&str) -> Option<T>,
{
    let prefix = delimiters.prefix();
    let suffix = delimiters.suffix();

    let mut elements = Vec::new();
    let mut cursor = 0;

    while cursor < text.len() {
        let Some(found) = text[cursor..].find(prefix) else {
            elements.push(Element::Text(text[cursor..].to_string()));
            break;
        };
        let token_start = cursor + found;
        let body_start = token_start + prefix.len();

        let body_end = match text[body_start..].find(suffix) {
            Some(found) => body_start + found,
            None => {
                tracing::debug!(offset = token_start, "unterminated token");
                return Err(ParseError::UnterminatedToken {
                    offset: token_start,
                });
            }
        };

        let candidate = &text[body_start..body_end];
        let token = match decode(candidate) {
            Some(token) => token,
            None => {
                tracing::debug!(offset = token_start, candidate, "unknown token");
                return Err(ParseError::UnknownToken {
                    candidate: candidate.to_string(),
                    offset: token_start,
                });
            }
        };

        if token_start > cursor {
            elements.push(Element::Text(text[cursor..token_start].to_string()));
        }
        elements.push(Element::Token(token));
        cursor = body_end + suffix.len();
    }

    tracing::trace!(elements = elements.len(), "parsed delimited text");
    Ok(TokenSequence::from(elements))
}
