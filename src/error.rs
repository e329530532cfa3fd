use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("{artifact}: malformed option header: {line:?} (expected \"name (type)\")")]
    MalformedOptionHeader { line: String, artifact: String },

    #[error("{0} analysis mode is not supported")]
    UnsupportedMode(String),

    #[error("unknown format: {0}. Use docbook, text, or json")]
    UnknownFormat(String),
}

/// Failure to turn one source file into a module document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Doc(#[from] DocError),
}

pub type Result<T> = std::result::Result<T, DocError>;
