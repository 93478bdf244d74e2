use crate::net::NetError;
use crate::path::PathError;
use crate::pattern::PatternError;
use crate::table::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartialUrlError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Net(#[from] NetError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Table(#[from] TableError),
}

pub type PartialUrlResult<T> = Result<T, PartialUrlError>;
