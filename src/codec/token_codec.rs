//! Token identifier encoders/decoders supplied by the consumer.
//!
//! The codec never looks inside a token. It only asks a [`TokenCodec`] to turn
//! a token into its textual identifier and to resolve an identifier back into
//! a token, or report that the identifier is not a valid token.

use std::collections::HashSet;

/// Converts tokens to and from their textual identifiers.
///
/// `decode` must be a partial left-inverse of `encode`: for every token the
/// consumer considers valid, `decode(&encode(t)) == Some(t)`. Identifiers
/// produced by `encode` must not contain the closing delimiter.
pub trait TokenCodec<T> {
    fn encode(&self, token: &T) -> String;

    fn decode(&self, identifier: &str) -> Option<T>;
}

impl<T, C: TokenCodec<T> + ?Sized> TokenCodec<T> for &C {
    fn encode(&self, token: &T) -> String {
        (**self).encode(token)
    }

    fn decode(&self, identifier: &str) -> Option<T> {
        (**self).decode(identifier)
    }
}

impl<T, C: TokenCodec<T> + ?Sized> TokenCodec<T> for Box<C> {
    fn encode(&self, token: &T) -> String {
        (**self).encode(token)
    }

    fn decode(&self, identifier: &str) -> Option<T> {
        (**self).decode(identifier)
    }
}

/// Adapts a pair of closures into a [`TokenCodec`].
#[derive(Clone, Copy)]
pub struct FnCodec<E, D> {
    encode: E,
    decode: D,
}

impl<E, D> FnCodec<E, D> {
    pub fn new(encode: E, decode: D) -> Self {
        FnCodec { encode, decode }
    }
}

impl<T, E, D> TokenCodec<T> for FnCodec<E, D>
where
    E: Fn(&T) -> String,
    D: Fn(&str) -> Option<T>,
{
    fn encode(&self, token: &T) -> String {
        (self.encode)(token)
    }

    fn decode(&self, identifier: &str) -> Option<T> {
        (self.decode)(identifier)
    }
}

/// Plain string tokens: the identifier is the token.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCodec;

impl TokenCodec<String> for IdentityCodec {
    fn encode(&self, token: &String) -> String {
        token.clone()
    }

    fn decode(&self, identifier: &str) -> Option<String> {
        Some(identifier.to_string())
    }
}

/// String tokens restricted to a known set of identifiers.
///
/// Decoding is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct AllowListCodec {
    allowed: HashSet<String>,
}

impl AllowListCodec {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowListCodec {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, identifier: &str) -> bool {
        self.allowed.contains(identifier)
    }
}

impl TokenCodec<String> for AllowListCodec {
    fn encode(&self, token: &String) -> String {
        token.clone()
    }

    fn decode(&self, identifier: &str) -> Option<String> {
        self.allowed
            .contains(identifier)
            .then(|| identifier.to_string())
    }
}
