use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::frequency::FrequencyAggregator;
use crate::normalizer::Normalizer;
use crate::report::Report;

/// Output table path for `input`: `t8.shakespeare.txt` -> `t8.shakespeare.result.txt`.
pub fn result_path(input: &Path) -> PathBuf {
    let base = match input.extension().and_then(|s| s.to_str()) {
        Some("txt") => input.with_extension(""),
        _ => input.to_path_buf(),
    };
    let mut name = base.into_os_string();
    name.push(".result.txt");
    PathBuf::from(name)
}

/// One parsed document plus where its table went.
#[derive(Debug)]
pub struct DocumentLoader {
    output: PathBuf,
    report: Report,
    saved: bool,
}

impl DocumentLoader {
    /// Reads `input` and saves the table next to it.
    pub fn load(
        input: impl AsRef<Path>,
        normalizer: &Normalizer,
        use_stemming: bool,
    ) -> Result<Self> {
        let input = input.as_ref();
        Self::load_to(input, result_path(input), normalizer, use_stemming)
    }

    /// Reads `input`, then writes the table to `output`. A failed write is
    /// logged and left out of the result.
    pub fn load_to(
        input: impl AsRef<Path>,
        output: impl Into<PathBuf>,
        normalizer: &Normalizer,
        use_stemming: bool,
    ) -> Result<Self> {
        let input = input.as_ref();
        let output = output.into();
        log::info!("--- Processing {} ---", input.display());
        let start = Instant::now();

        let file = File::open(input).map_err(|source| Error::InputOpen {
            path: input.to_path_buf(),
            source,
        })?;
        let mut aggregator = FrequencyAggregator::new(normalizer);
        aggregator.ingest_reader(BufReader::new(file), input, use_stemming)?;
        debug_assert_eq!(aggregator.table().total(), aggregator.words());
        log::info!(
            "Processed {} lines, {} words, {} distinct tokens in {:.2?}",
            aggregator.lines(),
            aggregator.words(),
            aggregator.table().len(),
            start.elapsed()
        );
        let report = aggregator.report();

        let saved = match report.write_to_file(&output) {
            Ok(()) => true,
            Err(e) => {
                match std::error::Error::source(&e) {
                    Some(cause) => log::warn!("{}: {}", e, cause),
                    None => log::warn!("{}", e),
                }
                false
            }
        };

        Ok(Self {
            output,
            report,
            saved,
        })
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Whether the table made it to disk.
    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Totals and the `n` most frequent tokens on stdout.
    pub fn display(&self, n: usize) {
        self.report.print_top(n);
    }
}
