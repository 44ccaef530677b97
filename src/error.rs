use std::io;

use thiserror::Error;

/// Error type for operon-stream parsing and filtering failures.
#[derive(Debug, Error)]
pub enum OperonError {
    /// A non-boundary line that does not conform to the 8-field record layout.
    /// Fatal for the current parse pass; callers must not skip-and-continue.
    #[error("malformed operon record ({reason}): {line:?}")]
    MalformedRecord { line: String, reason: String },

    /// The size filter was asked to rank a stream with zero complete groups.
    #[error("no complete operon groups found in input")]
    EmptyInput,

    /// An accession referenced by the operon file is absent from the sequence
    /// store. Non-fatal: the extractor reports it and moves on.
    #[error("accession {0} is missing from the sequence store")]
    MissingSequence(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
