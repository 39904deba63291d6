// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error reading report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load PDF: {0}")]
    PdfLoad(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LetterError {
    // User-facing validation message, shown instead of a letter
    #[error("Please enter your name and address.")]
    MissingContact,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("{0}")]
    Letter(#[from] LetterError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
