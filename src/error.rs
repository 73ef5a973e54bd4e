// Error types for the notes pipeline.
//
// Only two things can go wrong in a run: the notes file can't be read, or
// there is nothing in it to build a vocabulary from. Everything else
// (no lexicon hits, no matching lines) is represented as empty results.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Notes file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Could not read notes file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus is empty: no non-blank lines to build a vocabulary from")]
    EmptyCorpus,

    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
