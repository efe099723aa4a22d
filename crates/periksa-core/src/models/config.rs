//! Configuration structures for the document checking pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the periksa pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriksaConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Cloud OCR configuration.
    pub ocr: OcrConfig,

    /// Folder scan configuration.
    pub scan: ScanConfig,
}

impl Default for PeriksaConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            ocr: OcrConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try to extract embedded text before falling back to OCR.
    pub prefer_embedded_text: bool,

    /// Minimum embedded-text length before the OCR fallback kicks in.
    pub min_text_length: usize,

    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
            max_pages: 0,
        }
    }
}

/// Cloud OCR service configuration.
///
/// An empty `api_key` disables the OCR fallback; scanned PDFs then come back
/// with whatever embedded text they carry, possibly none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// OCR service endpoint.
    pub endpoint: String,

    /// API key for the OCR service.
    pub api_key: String,

    /// Recognition language code.
    pub language: String,

    /// Ask the service to auto-rotate scanned pages.
    pub detect_orientation: bool,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.ocr.space/parse/image".to_string(),
            api_key: String::new(),
            language: "ind".to_string(),
            detect_orientation: true,
            timeout_secs: 120,
        }
    }
}

/// Folder scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory for acquired-text sidecar files.
    pub text_dir: PathBuf,

    /// Write a sidecar `.txt` next to each processed document.
    pub save_text: bool,

    /// File extensions picked up by a scan.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            text_dir: PathBuf::from("hasil_teks"),
            save_text: false,
            extensions: vec!["pdf".to_string(), "txt".to_string()],
        }
    }
}

impl PeriksaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = PeriksaConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PeriksaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ocr.language, "ind");
        assert_eq!(back.pdf.min_text_length, 50);
        assert_eq!(back.scan.extensions, vec!["pdf", "txt"]);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let config: PeriksaConfig =
            serde_json::from_str(r#"{"ocr": {"api_key": "k"}}"#).unwrap();
        assert_eq!(config.ocr.api_key, "k");
        assert_eq!(config.ocr.endpoint, "https://api.ocr.space/parse/image");
        assert!(config.pdf.prefer_embedded_text);
    }
}
