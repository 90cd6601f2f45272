mod error;
mod frequency;
mod loader;
mod normalizer;
mod report;
mod stop_words;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::loader::DocumentLoader;
use crate::normalizer::Normalizer;
use crate::report::DEFAULT_TOP;
use crate::stop_words::StopWords;

const PROGRESS_INTERVAL: u64 = 10_000; // log progress every 10k lines

#[cfg(test)]
fn qc<T: quickcheck::Testable>(f: T) {
    quickcheck::QuickCheck::new().tests(1000).max_tests(10000).quickcheck(f);
}

/// Build a word-frequency table from a plain-text corpus.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file to read
    #[arg(default_value = "t8.shakespeare.txt")]
    input: PathBuf,

    /// Reduce tokens to their Snowball (English) stem
    #[arg(long)]
    stem: bool,

    /// Whitespace separated stop-word list [default: built-in English list]
    #[arg(long, value_name = "PATH", conflicts_with = "keep_stop_words")]
    stop_words: Option<PathBuf>,

    /// Count stop words too
    #[arg(long)]
    keep_stop_words: bool,

    /// Number of entries to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Where to write the table [default: <input>.result.txt]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        pretty_env_logger::formatted_builder()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        pretty_env_logger::init();
    }
    let args = Args::parse();

    let stop_words = if args.keep_stop_words {
        StopWords::empty()
    } else if let Some(path) = &args.stop_words {
        StopWords::from_file(path)?
    } else {
        StopWords::english()
    };
    log::debug!("{} stop words", stop_words.len());
    let normalizer = Normalizer::new(stop_words);

    let doc = match args.output {
        Some(output) => DocumentLoader::load_to(&args.input, output, &normalizer, args.stem),
        None => DocumentLoader::load(&args.input, &normalizer, args.stem),
    }
    .with_context(|| format!("Error processing {}", args.input.display()))?;

    if doc.saved() {
        log::info!("Saved frequency table to {}", doc.output().display());
    } else {
        log::warn!("No frequency table written for {}", args.input.display());
    }
    doc.display(args.top);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_fixed_entry_point() {
        let args = Args::parse_from(["wordfreq-fixtures"]);
        assert_eq!(args.input, PathBuf::from("t8.shakespeare.txt"));
        assert_eq!(args.top, 50);
        assert!(!args.stem);
        assert!(!args.keep_stop_words);
        assert!(args.stop_words.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "wordfreq-fixtures",
            "hamlet.txt",
            "--stem",
            "-n",
            "5",
            "--stop-words",
            "list.txt",
            "-o",
            "out.tsv",
        ]);
        assert_eq!(args.input, PathBuf::from("hamlet.txt"));
        assert!(args.stem);
        assert_eq!(args.top, 5);
        assert_eq!(args.stop_words, Some(PathBuf::from("list.txt")));
        assert_eq!(args.output, Some(PathBuf::from("out.tsv")));
    }

    #[test]
    fn stop_word_options_conflict() {
        let parsed = Args::try_parse_from([
            "wordfreq-fixtures",
            "--keep-stop-words",
            "--stop-words",
            "list.txt",
        ]);
        assert!(parsed.is_err());
    }
}
