//! Core library for checking Indonesian public-finance document files.
//!
//! This crate provides:
//! - Rule-based classification of payment documents (SPM, SP2D, SPP, Daftar
//!   SP2D, contracts, receipts, ...) from OCR-derived text
//! - Per-type field extraction (reference number, date, DIPA code, amounts,
//!   NPWP, bank account)
//! - PDF text acquisition (embedded text with a cloud OCR fallback)
//! - Flat result records suitable for tabular audit reports

pub mod dokumen;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;

pub use dokumen::analyze;
pub use error::{OcrError, PdfError, PeriksaError, Result};
pub use models::analysis::{AnalysisResult, DocumentType, Presence, PresenceMap};
pub use models::config::PeriksaConfig;
pub use ocr::CloudOcr;
pub use pdf::{PdfExtractor, PdfProcessor, PdfType, acquire_text};
