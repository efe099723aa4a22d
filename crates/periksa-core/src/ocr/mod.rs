//! Cloud OCR text acquisition for scanned documents.

mod cloud;

pub use cloud::CloudOcr;
