//! Token completion lookup for editors.

/// Substrings shorter than this produce no completions by default.
pub const DEFAULT_MIN_SUBSTRING_LEN: usize = 2;

/// Display labels for tokens, searchable by label prefix.
#[derive(Debug, Clone)]
pub struct Completions<T> {
    entries: Vec<(T, String)>,
    min_substring_len: usize,
}

impl<T> Completions<T> {
    pub fn new() -> Self {
        Completions {
            entries: Vec::new(),
            min_substring_len: DEFAULT_MIN_SUBSTRING_LEN,
        }
    }

    /// Sets the minimum substring length, counted in characters.
    pub fn with_min_substring_len(mut self, min: usize) -> Self {
        self.min_substring_len = min;
        self
    }

    pub fn min_substring_len(&self) -> usize {
        self.min_substring_len
    }

    /// Adds a token with its display label. A token added twice replaces its
    /// earlier label.
    pub fn insert(&mut self, token: T, label: impl Into<String>)
    where
        T: PartialEq,
    {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == token) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((token, label)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, token: &T) -> bool
    where
        T: PartialEq,
    {
        self.label(token).is_some()
    }

    pub fn label(&self, token: &T) -> Option<&str>
    where
        T: PartialEq,
    {
        self.entries
            .iter()
            .find(|(existing, _)| existing == token)
            .map(|(_, label)| label.as_str())
    }

    /// Tokens whose label starts with `substring`, ordered by label.
    ///
    /// Matching is case-sensitive. Returns nothing when `substring` is shorter
    /// than the minimum length.
    pub fn matching(&self, substring: &str) -> Vec<(&T, &str)> {
        if substring.chars().count() < self.min_substring_len {
            return Vec::new();
        }
        let mut found: Vec<(&T, &str)> = self
            .entries
            .iter()
            .filter(|(_, label)| label.starts_with(substring))
            .map(|(token, label)| (token, label.as_str()))
            .collect();
        found.sort_by(|a, b| a.1.cmp(b.1));
        found
    }
}

impl<T> Default for Completions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, S: Into<String>> FromIterator<(T, S)> for Completions<T> {
    fn from_iter<I: IntoIterator<Item = (T, S)>>(iter: I) -> Self {
        let mut completions = Completions::new();
        for (token, label) in iter {
            completions.insert(token, label);
        }
        completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Factory {
        Foobar,
        Date,
        Time,
    }

    fn factory() -> Completions<Factory> {
        [
            (Factory::Time, "time"),
            (Factory::Date, "date"),
            (Factory::Foobar, "foobar"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_short_substring_gives_nothing() {
        let completions = factory();
        assert!(completions.matching("").is_empty());
        assert!(completions.matching("d").is_empty());
    }

    #[test]
    fn test_prefix_match() {
        let completions = factory();
        assert_eq!(completions.matching("da"), vec![(&Factory::Date, "date")]);
        assert_eq!(completions.matching("ti"), vec![(&Factory::Time, "time")]);
        assert!(completions.matching("Da").is_empty());
        assert!(completions.matching("ate").is_empty());
    }

    #[test]
    fn test_results_sorted_by_label() {
        let completions: Completions<u8> =
            [(1, "total"), (2, "title"), (3, "timezone")].into_iter().collect();
        assert_eq!(
            completions.matching("ti"),
            vec![(&3, "timezone"), (&2, "title")]
        );
    }

    #[test]
    fn test_custom_minimum() {
        let completions = factory().with_min_substring_len(1);
        assert_eq!(completions.matching("f"), vec![(&Factory::Foobar, "foobar")]);
    }

    #[test]
    fn test_insert_replaces_label() {
        let mut completions = factory();
        completions.insert(Factory::Foobar, "all messed up");
        assert_eq!(completions.len(), 3);
        assert_eq!(completions.label(&Factory::Foobar), Some("all messed up"));
        assert!(completions.matching("fo").is_empty());
    }
}
