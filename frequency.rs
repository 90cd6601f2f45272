use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::error::{Error, Result};
use crate::normalizer::Normalizer;
use crate::report::Report;

/// Token -> count, remembering the order tokens were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn increment(&mut self, token: String) {
        match self.slots.get(&token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, token: &str) -> u64 {
        self.slots.get(token).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub lines: u64,
    pub words: u64,
}

/// Accumulates one document's frequency table and line/word counters.
pub struct FrequencyAggregator<'a> {
    normalizer: &'a Normalizer,
    table: FrequencyTable,
    counters: Counters,
}

impl<'a> FrequencyAggregator<'a> {
    pub fn new(normalizer: &'a Normalizer) -> Self {
        Self {
            normalizer,
            table: FrequencyTable::default(),
            counters: Counters::default(),
        }
    }

    /// Count one line. An empty line still counts as a line.
    pub fn ingest(&mut self, line: &str, use_stemming: bool) {
        let tokens = self.normalizer.normalize(line, use_stemming);
        self.counters.lines += 1;
        self.counters.words += tokens.len() as u64;
        for token in tokens {
            self.table.increment(token);
        }
    }

    /// Feed every line of `reader`. Malformed UTF-8 is replaced rather than
    /// rejected; only read errors abort.
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        source: &Path,
        use_stemming: bool,
    ) -> Result<u64> {
        let mut buf = Vec::new();
        let mut read = 0;
        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf).map_err(|e| Error::Read {
                path: source.to_path_buf(),
                source: e,
            })?;
            if n == 0 {
                break;
            }
            read += 1;
            let (line, had_errors) = UTF_8.decode_without_bom_handling(&buf);
            if had_errors {
                log::warn!(
                    "{}: line {} is not valid UTF-8, replaced bad bytes",
                    source.display(),
                    read
                );
            }
            self.ingest(&line, use_stemming);
            if read % crate::PROGRESS_INTERVAL == 0 {
                log::info!("… {} lines processed …", read);
            }
        }
        Ok(read)
    }

    pub fn lines(&self) -> u64 {
        self.counters.lines
    }

    pub fn words(&self) -> u64 {
        self.counters.words
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn report(&self) -> Report {
        Report::new(self.counters, &self.table)
    }
}
