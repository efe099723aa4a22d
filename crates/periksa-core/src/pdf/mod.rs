//! PDF text acquisition.

mod extractor;

pub use extractor::PdfExtractor;

use tracing::{debug, warn};

use crate::error::PdfError;
use crate::models::config::PdfConfig;
use crate::ocr::CloudOcr;

/// Type of PDF content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// Contains only images (scanned document).
    Image,
    /// Contains both text and images.
    Hybrid,
    /// Empty or unreadable.
    Empty,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Analyze the PDF to determine its type.
    fn analyze(&self) -> PdfType;

    /// Extract embedded text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Acquire the text of one document: embedded text first, cloud OCR as the
/// fallback for scanned files.
///
/// With no OCR service configured the embedded text is returned as-is, even
/// when empty; the analysis engine downstream handles empty text gracefully.
pub async fn acquire_text(
    data: &[u8],
    config: &PdfConfig,
    ocr: Option<&CloudOcr>,
) -> crate::error::Result<String> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;

    let embedded = if config.prefer_embedded_text {
        extractor.extract_text().unwrap_or_default()
    } else {
        String::new()
    };

    if embedded.trim().len() >= config.min_text_length {
        debug!("using {} chars of embedded text", embedded.len());
        return Ok(embedded);
    }

    match ocr {
        Some(client) => {
            debug!(
                "embedded text below threshold ({} chars), running cloud OCR",
                embedded.trim().len()
            );
            Ok(client.parse_pdf(data).await?)
        }
        None => {
            if embedded.trim().is_empty() {
                warn!("no embedded text and no OCR service configured");
            }
            Ok(embedded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PeriksaError;

    #[tokio::test]
    async fn invalid_data_surfaces_a_pdf_error() {
        let config = PdfConfig::default();
        let result = acquire_text(b"not a pdf at all", &config, None).await;
        assert!(matches!(result, Err(PeriksaError::Pdf(_))));
    }
}
