//! Error types for the PDF binder library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF binder library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be decoded as a PDF document
    #[error("failed to read {name} as a PDF: {source}")]
    ParseFailure {
        /// Display name of the failing input
        name: String,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// Parsed PDF contains no pages
    #[error("PDF has no pages: {0}")]
    EmptyPdf(String),

    /// Zero input files supplied
    #[error("no input files provided")]
    EmptyInput,

    /// File not found
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}
