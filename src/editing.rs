//! Helpers for editors that own a [`TokenSequence`](crate::sequence::TokenSequence)
//!
//! None of this is needed to parse or serialize. These are the small policies
//! an interactive editor applies around the model: deciding whether typed text
//! is a token, offering completions, and suppressing duplicates.

mod collections;
mod completions;
mod entry;

pub use collections::{
    index_by, index_with, remove_duplicates, removing_duplicates, RemoveDuplicates,
};
pub use completions::{Completions, DEFAULT_MIN_SUBSTRING_LEN};
pub use entry::{classify_entries, classify_entry, filter_entries, NewTokens};
