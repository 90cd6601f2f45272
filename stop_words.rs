use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Built-in English list, one word per line.
const ENGLISH_ST: &str = include_str!("englishST.txt");

/// Read-only set of tokens dropped before counting.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Whitespace separated word list.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    pub fn english() -> Self {
        Self::parse(ENGLISH_ST)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::StopWords {
            path: path.to_path_buf(),
            source,
        })?;
        let words = Self::parse(&text);
        log::debug!("loaded {} stop words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn english_list_is_loaded() {
        let words = StopWords::english();
        assert!(words.contains("the"));
        assert!(words.contains("on"));
        assert!(!words.contains("cat"));
        assert!(words.len() > 100);
    }

    #[test]
    fn parse_splits_on_any_whitespace() {
        let words = StopWords::parse("The  on\n\tand\r\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("the"));
        assert!(words.contains("and"));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let words = StopWords::empty();
        assert!(words.is_empty());
        assert!(!words.contains(""));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = std::env::temp_dir().join("wordfreq-fixtures-no-such-stop-list.txt");
        match StopWords::from_file(&path) {
            Err(Error::StopWords { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn from_file_reads_list() {
        let path = std::env::temp_dir().join("wordfreq-fixtures-stop-list.txt");
        fs::write(&path, "alpha beta\ngamma\n").unwrap();
        let words = StopWords::from_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(words.len(), 3);
        assert!(words.contains("gamma"));
    }
}
