use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table is sealed; cannot insert pattern '{pattern}'")]
    InsertWhileSealed { pattern: String },
    #[error("table is sealed; cannot remove pattern '{pattern}'")]
    RemoveWhileSealed { pattern: String },
    #[error("pattern '{pattern}' is already registered")]
    DuplicatePattern { pattern: String },
    #[error("combination '{combination}' is already registered by pattern '{existing}'")]
    DuplicateCombination {
        combination: String,
        existing: String,
    },
    #[error(
        "pattern '{pattern}' matched {indexed:?} but exhaustive matching found {exhaustive:?}"
    )]
    MatchDivergence {
        pattern: String,
        indexed: Option<String>,
        exhaustive: Option<String>,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TableResult<T> = Result<T, TableError>;
