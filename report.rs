use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::frequency::{Counters, FrequencyTable};

pub const DEFAULT_TOP: usize = 50;

/// Snapshot of a finished document, entries high freq -> low.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: u64,
    pub words: u64,
    entries: Vec<(String, u64)>,
}

impl Report {
    pub fn new(counters: Counters, table: &FrequencyTable) -> Self {
        // stable sort: equal counts keep first-seen order
        let entries = table
            .iter()
            .map(|(token, count)| (token.to_string(), count))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect();
        Self {
            lines: counters.lines,
            words: counters.words,
            entries,
        }
    }

    pub fn to_sorted_list(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// One `token<TAB>count` line per entry.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (token, count) in self.to_sorted_list() {
            writeln!(out, "{}\t{}", token, count)?;
        }
        Ok(())
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let wrap = |source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(wrap)?;
        let mut out = BufWriter::new(file);
        self.write_table(&mut out).map_err(wrap)?;
        out.flush().map_err(wrap)?;
        Ok(())
    }

    /// Totals, then at most `n` leading entries.
    pub fn write_top<W: Write>(&self, out: &mut W, n: usize) -> io::Result<()> {
        writeln!(out, "lines: {} words: {}", self.lines, self.words)?;
        for (token, count) in self.to_sorted_list().iter().take(n) {
            writeln!(out, "{:?}", (token, count))?;
        }
        Ok(())
    }

    pub fn print_top(&self, n: usize) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_top(&mut out, n).and_then(|_| out.flush()) {
            log::warn!("failed to print report: {}", e);
        }
    }
}
