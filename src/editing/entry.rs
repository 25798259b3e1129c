//! Turning user-entered strings into sequence elements.
//!
//! Two policies exist. A free-text editor keeps everything, downgrading
//! entries that do not decode to text ([`classify_entries`]). A token-only
//! editor keeps just the entries that decode and drops the rest
//! ([`filter_entries`]).

use super::completions::Completions;
use crate::sequence::{Element, TokenSequence};

/// Classifies an edited string: a token if `decode` accepts it verbatim,
/// otherwise literal text. Whitespace is preserved.
pub fn classify_entry<T, D>(entry: &str, decode: D) -> Element<T>
where
    D: FnOnce(&str) -> Option<T>,
{
    match decode(entry) {
        Some(token) => Element::Token(token),
        None => Element::Text(entry.to_string()),
    }
}

/// Classifies a batch of entries in order.
pub fn classify_entries<'a, T, I, D>(entries: I, mut decode: D) -> TokenSequence<T>
where
    I: IntoIterator<Item = &'a str>,
    D: FnMut(&str) -> Option<T>,
{
    entries
        .into_iter()
        .map(|entry| classify_entry(entry, &mut decode))
        .collect()
}

/// Whether a token-only editor accepts tokens missing from its completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewTokens {
    /// Any decodable entry is accepted.
    #[default]
    Allow,
    /// Only tokens listed in the completions are accepted.
    Reject,
}

/// Keeps the entries that decode to a token, in order. Entries that fail to
/// decode are dropped, as are tokens unknown to `completions` when `new_tokens`
/// is [`NewTokens::Reject`].
pub fn filter_entries<'a, T, I, D>(
    entries: I,
    decode: D,
    completions: &Completions<T>,
    new_tokens: NewTokens,
) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = &'a str>,
    D: FnMut(&str) -> Option<T>,
{
    entries
        .into_iter()
        .filter_map(decode)
        .filter(|token| new_tokens == NewTokens::Allow || completions.contains(token))
        .collect()
}
