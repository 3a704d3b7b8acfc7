use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid token {token:?}: {reason}")]
    InvalidToken { token: String, reason: String },

    #[error("expected {expected} grid rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("a {h}x{w} grid does not fit in memory")]
    GridTooLarge { h: usize, w: usize },

    #[error("list {index} declares {declared} values but has {found}")]
    ListLength {
        index: usize,
        declared: usize,
        found: usize,
    },

    #[error("modulus must be positive")]
    ZeroModulus,

    #[error("list {0} is empty")]
    EmptyList(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
