use thiserror::Error;

/// Hard failures surfaced to callers of the library entry points.
#[derive(Debug, Error)]
pub enum LineupError {
    #[error("page is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a schedule panel did not yield a date.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("panel layout mismatch: {0}")]
    Structure(&'static str),
    #[error("date phrase {0:?} has fewer than three tokens")]
    TooFewTokens(String),
    #[error("day {0:?} is not a number")]
    InvalidDay(String),
}
