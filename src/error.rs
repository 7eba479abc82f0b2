use thiserror::Error;

/// Errors returned by graph construction and by-name queries.
///
/// An unreachable actor is not an error: length queries report
/// `f64::INFINITY` and path queries report `None`.
#[derive(Error, Debug)]
pub enum HollywoodError {
    /// A by-name query received an empty (or blank) name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The name is not a known actor.
    #[error("unknown actor: {0}")]
    UnknownEntity(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, HollywoodError>;
