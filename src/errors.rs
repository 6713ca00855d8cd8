use thiserror::Error;

use polars::prelude::PolarsError;
use std::io::Error as IoError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parsing error: {0}")]
    ParsingError(#[from] ParsingError),

    #[error("File i/o error: {0}")]
    FileIo(#[from] IoError),

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dataframe error: {0}")]
    DataFrame(#[from] PolarsError),
}

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("empty file: missing header row")]
    MissingHeader,

    #[error("failed to parse file year from \"{0}\"")]
    Year(String),

    #[error("channel columns must come in (element, flag) pairs")]
    UnpairedChannel,

    #[error("line {0}: expected {1} columns, found {2}")]
    ColumnCount(usize, usize, usize),

    #[error("failed to parse day of year from \"{0}\"")]
    DayOfYear(String),

    #[error("failed to parse time of day from \"{0}\"")]
    Time(String),

    #[error("failed to parse value from \"{0}\"")]
    Value(String),

    #[error("failed to parse quality flag from \"{0}\"")]
    Flag(String),

    #[error("no calendar date for year {0} day {1}")]
    Date(i32, u32),

    #[error("unknown archive file type")]
    UnknownFileType,
}
