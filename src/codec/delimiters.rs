//! Token boundary markers for delimited text.

/// Default opening delimiter.
pub const DEFAULT_PREFIX: &str = "%[";
/// Default closing delimiter.
pub const DEFAULT_SUFFIX: &str = "]";

/// The pair of literal substrings that wrap a token identifier.
///
/// Both delimiters are non-empty; this is checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    prefix: String,
    suffix: String,
}

impl Delimiters {
    /// Creates a delimiter pair.
    ///
    /// # Panics
    /// Panics if either delimiter is empty.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let suffix = suffix.into();
        assert!(!prefix.is_empty(), "token prefix must not be empty");
        assert!(!suffix.is_empty(), "token suffix must not be empty");
        Delimiters { prefix, suffix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wraps an identifier in the delimiters.
    pub fn wrap(&self, identifier: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + identifier.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(identifier);
        out.push_str(&self.suffix);
        out
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::new(DEFAULT_PREFIX, DEFAULT_SUFFIX)
    }
}
