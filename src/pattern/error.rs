use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("non-root context path '{context_path}' may not end in '/'")]
    ContextPathTrailingSeparator { context_path: String },
    #[error("prefix '{prefix}' does not end in '/'")]
    PrefixMissingTrailingSeparator { prefix: String },
    #[error("combination count overflows for field cardinalities {cardinalities:?}")]
    CombinationOverflow { cardinalities: [usize; 5] },
    #[error("too many combinations: {count} exceeds limit {limit}")]
    TooManyCombinations { count: usize, limit: usize },
    #[error("cannot build URL: {field} is neither specified by the pattern nor the request")]
    MissingField { field: &'static str },
    #[error("resolved URL '{url}' is invalid: {source}")]
    UrlConstruction {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
