use std::fmt;

/// Errors that can occur while parsing delimited text
///
/// Offsets are byte offsets into the parsed input, pointing at the start of
/// the offending token prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token prefix had no matching suffix before end of input.
    UnterminatedToken { offset: usize },
    /// A well-formed token body did not decode to a known token.
    UnknownToken { candidate: String, offset: usize },
}

impl ParseError {
    /// Byte offset of the token prefix that caused the failure.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnterminatedToken { offset } | ParseError::UnknownToken { offset, .. } => {
                *offset
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedToken { offset } => write!(
                f,
                "Token prefix at offset {} has no corresponding suffix",
                offset
            ),
            ParseError::UnknownToken { candidate, offset } => {
                write!(f, "Unrecognized token '{}' at offset {}", candidate, offset)
            }
        }
    }
}

impl std::error::Error for ParseError {}
