use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open input file {path:?}")]
    InputOpen { path: PathBuf, source: io::Error },
    #[error("failed reading {path:?}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write result table to {path:?}")]
    OutputWrite { path: PathBuf, source: io::Error },
    #[error("cannot load stop-word list from {path:?}")]
    StopWords { path: PathBuf, source: io::Error },
}
