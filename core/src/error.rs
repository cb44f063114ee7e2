use std::io;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, BoardError>;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Storage failure: {0}")]
    Io(#[from] io::Error),
    #[error("No saved board named {0:?}")]
    NotFound(String),
    #[error("Saved board is unusable: {0}")]
    CorruptData(String),
}

pub type SaveResult<T> = core::result::Result<T, SaveError>;
