//! Sequence elements: a token placeholder or a literal text span.

/// A single entry in a [`TokenSequence`](super::TokenSequence).
///
/// Equality and hashing are structural, so two elements compare equal only
/// when both the variant and the payload match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element<T> {
    /// Placeholder standing in for a substitutable value.
    Token(T),
    /// Literal span of plain text.
    Text(String),
}

impl<T> Element<T> {
    /// Creates a token element.
    pub fn token(token: T) -> Self {
        Element::Token(token)
    }

    /// Creates a text element.
    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    /// Returns the token when this element is a placeholder.
    pub fn as_token(&self) -> Option<&T> {
        match self {
            Element::Token(token) => Some(token),
            Element::Text(_) => None,
        }
    }

    /// Returns the literal text when this element is a text span.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Token(_) => None,
            Element::Text(text) => Some(text),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Element::Token(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Returns `true` when this element is exactly the given token.
    pub fn matches_token(&self, token: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Element::Token(own) if own == token)
    }

    /// Returns the token's textual identifier, or the literal text.
    pub fn raw_value<F>(&self, encode: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            Element::Token(token) => encode(token),
            Element::Text(text) => text.clone(),
        }
    }

    /// Maps the token payload, leaving text spans untouched.
    pub fn map_token<U, F>(self, f: F) -> Element<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Element::Token(token) => Element::Token(f(token)),
            Element::Text(text) => Element::Text(text),
        }
    }
}

/// `Token(t) == t`; a text span never equals a token, even with the same
/// spelling.
impl<T: PartialEq> PartialEq<T> for Element<T> {
    fn eq(&self, other: &T) -> bool {
        self.matches_token(other)
    }
}

impl Element<String> {
    /// Returns `true` if either the token identifier or the text equals `value`.
    pub fn is_token_or_text(&self, value: &str) -> bool {
        match self {
            Element::Token(token) => token == value,
            Element::Text(text) => text == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Kind {
        Date,
        Time,
    }

    #[test]
    fn test_accessors() {
        let token: Element<Kind> = Element::token(Kind::Date);
        let text: Element<Kind> = Element::text("at ");

        assert!(token.is_token());
        assert!(!token.is_text());
        assert_eq!(token.as_token(), Some(&Kind::Date));
        assert_eq!(token.as_text(), None);

        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("at "));
        assert_eq!(text.as_token(), None);
    }

    #[test]
    fn test_matches_token() {
        assert!(Element::token(Kind::Date).matches_token(&Kind::Date));
        assert!(!Element::token(Kind::Date).matches_token(&Kind::Time));
        assert!(!Element::<Kind>::text("Date").matches_token(&Kind::Date));
    }

    #[test]
    fn test_compares_against_bare_token() {
        assert!(Element::token(Kind::Date) == Kind::Date);
        assert!(Element::token(Kind::Date) != Kind::Time);
        assert!(Element::token("a".to_string()) == "a".to_string());
        assert!(Element::<String>::text("x") != "x".to_string());
    }

    #[test]
    fn test_raw_value() {
        let encode = |kind: &Kind| match kind {
            Kind::Date => "date".to_string(),
            Kind::Time => "time".to_string(),
        };
        assert_eq!(Element::token(Kind::Time).raw_value(encode), "time");
        assert_eq!(Element::<Kind>::text("plain").raw_value(encode), "plain");
    }

    #[test]
    fn test_is_token_or_text() {
        assert!(Element::token("date".to_string()).is_token_or_text("date"));
        assert!(Element::<String>::text("date").is_token_or_text("date"));
        assert!(!Element::<String>::text("dates").is_token_or_text("date"));
    }

    #[test]
    fn test_map_token() {
        let mapped = Element::token(Kind::Date).map_token(|_| 1);
        assert_eq!(mapped, Element::Token(1));

        let untouched: Element<i32> = Element::<Kind>::text("x").map_token(|_| 1);
        assert_eq!(untouched, Element::Text("x".to_string()));
    }
}
