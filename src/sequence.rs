//! The tokenized string model
//!
//! A [`TokenSequence`] is an ordered list of [`Element`]s: literal text spans
//! and typed token placeholders. Order is meaningful and preserved exactly.
//! Consecutive text spans are never merged by the model itself.
//!
//! The sequence is the source of truth for editors. It is turned into flat
//! delimited text by the [codec](crate::codec) and into structured records by
//! the [interchange](crate::formats::interchange) layer.

mod element;

pub use element::Element;

use serde::{Deserialize, Serialize};

/// Ordered sequence of text spans and token placeholders.
///
/// Equality and hashing are structural: two sequences are equal iff they have
/// the same length and elementwise-equal elements in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence<T> {
    elements: Vec<Element<T>>,
}

impl<T> TokenSequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        TokenSequence {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Element<T>] {
        &self.elements
    }

    /// Mutable access for editors that rewrite the sequence in place.
    pub fn elements_mut(&mut self) -> &mut Vec<Element<T>> {
        &mut self.elements
    }

    pub fn into_elements(self) -> Vec<Element<T>> {
        self.elements
    }

    pub fn push(&mut self, element: Element<T>) {
        self.elements.push(element);
    }

    pub fn push_token(&mut self, token: T) {
        self.elements.push(Element::Token(token));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.elements.push(Element::Text(text.into()));
    }

    /// Inserts an element at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, element: Element<T>) {
        self.elements.insert(index, element);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Element<T> {
        self.elements.remove(index)
    }

    /// Iterates over the token values in sequence order.
    pub fn tokens(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().filter_map(Element::as_token)
    }

    /// Flattens the sequence into display text.
    ///
    /// Every token is replaced by `substitution(token)` and every text span by
    /// its literal content; the pieces are joined with `separator`. Delimiters
    /// are never reinserted.
    pub fn string<F>(&self, separator: &str, mut substitution: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.elements
            .iter()
            .map(|element| match element {
                Element::Token(token) => substitution(token),
                Element::Text(text) => text.clone(),
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// [`string`](Self::string) with an empty separator.
    pub fn flatten<F>(&self, substitution: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.string("", substitution)
    }

    /// Returns `true` if any element is the given token.
    pub fn contains_token(&self, token: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.iter().any(|element| element.matches_token(token))
    }

    /// Returns `true` if any element is a text span exactly equal to `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.elements
            .iter()
            .any(|element| element.as_text() == Some(text))
    }
}

impl<T> Default for TokenSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Element<T>>> for TokenSequence<T> {
    fn from(elements: Vec<Element<T>>) -> Self {
        TokenSequence { elements }
    }
}

impl<T> FromIterator<Element<T>> for TokenSequence<T> {
    fn from_iter<I: IntoIterator<Item = Element<T>>>(iter: I) -> Self {
        TokenSequence {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Element<T>> for TokenSequence<T> {
    fn extend<I: IntoIterator<Item = Element<T>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for TokenSequence<T> {
    type Item = Element<T>;
    type IntoIter = std::vec::IntoIter<Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TokenSequence<T> {
    type Item = &'a Element<T>;
    type IntoIter = std::slice::Iter<'a, Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
