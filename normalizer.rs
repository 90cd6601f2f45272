use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::stop_words::StopWords;

// Compile regexes once
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Lower-case the line, drop punctuation and squeeze whitespace runs to one space.
pub fn remove_symbols(line: &str) -> String {
    let stripped: String = line
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    SPACE_RUNS.replace_all(&stripped, " ").into_owned()
}

/// Maximal ASCII alphanumeric runs of the cleaned line, in order.
pub fn tokenize(line: &str) -> Vec<String> {
    let cleaned = remove_symbols(line);
    TOKEN
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Turns raw lines into clean tokens: stop-word filtering and optional
/// Snowball stemming on top of [`tokenize`].
pub struct Normalizer {
    stop_words: StopWords,
    stemmer: Stemmer,
}

impl Normalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String> {
        if self.stop_words.is_empty() {
            return tokens;
        }
        tokens
            .into_iter()
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }

    pub fn stem(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|t| self.stemmer.stem(&t).into_owned())
            .collect()
    }

    /// tokenize -> stop words -> stem (when asked).
    pub fn normalize(&self, line: &str, use_stemming: bool) -> Vec<String> {
        let tokens = self.remove_stop_words(tokenize(line));
        if use_stemming {
            self.stem(tokens)
        } else {
            tokens
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}
