use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IO(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid record count: {0}")]
    InvalidCount(i64),
    #[error("invalid field: {0}")]
    InvalidField(String),
    #[error("input closed")]
    InputClosed,
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self { AppError::IO(format!("{}", e)) }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self { AppError::IO(format!("csv: {}", e)) }
}
