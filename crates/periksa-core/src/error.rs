//! Error types for the periksa-core library.

use thiserror::Error;

/// Main error type for the periksa library.
///
/// Only text acquisition can fail; document analysis itself is a total
/// function and has no error type.
#[derive(Error, Debug)]
pub enum PeriksaError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Cloud OCR error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to the cloud OCR service.
#[derive(Error, Debug)]
pub enum OcrError {
    /// No API key configured for the OCR service.
    #[error("OCR API key is not configured")]
    MissingApiKey,

    /// HTTP transport failure.
    #[error("OCR request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service accepted the request but reported a processing error.
    #[error("OCR service error: {0}")]
    Service(String),
}

/// Result type for the periksa library.
pub type Result<T> = std::result::Result<T, PeriksaError>;
