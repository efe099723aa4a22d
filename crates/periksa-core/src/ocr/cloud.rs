//! OCR.space client.
//!
//! Scanned PDFs go up as a base64 data URI; the service OCRs every page and
//! returns one parsed-text block per page. Recognition language defaults to
//! Indonesian.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Client for the OCR.space parse API.
pub struct CloudOcr {
    client: reqwest::Client,
    config: OcrConfig,
}

impl CloudOcr {
    /// Create a client; fails when no API key is configured.
    pub fn new(config: OcrConfig) -> Result<Self, OcrError> {
        if config.api_key.is_empty() {
            return Err(OcrError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Send a whole PDF for recognition; page texts come back joined with
    /// newlines.
    pub async fn parse_pdf(&self, data: &[u8]) -> Result<String, OcrError> {
        debug!(
            "submitting {} bytes to {} for OCR",
            data.len(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .form(&self.request_form(data))
            .send()
            .await?
            .error_for_status()?;

        let body: OcrSpaceResponse = response.json().await?;
        if body.is_errored_on_processing {
            return Err(OcrError::Service(body.message()));
        }

        let text = body
            .parsed_results
            .iter()
            .map(|r| r.parsed_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            warn!("OCR service returned no text");
        }

        Ok(text)
    }

    fn request_form(&self, data: &[u8]) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.config.api_key.clone()),
            (
                "base64Image",
                format!("data:application/pdf;base64,{}", STANDARD.encode(data)),
            ),
            ("language", self.config.language.clone()),
            ("isOverlayRequired", "false".to_string()),
            ("filetype", "PDF".to_string()),
            ("detectOrientation", self.config.detect_orientation.to_string()),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct OcrSpaceResponse {
    is_errored_on_processing: bool,
    error_message: Option<serde_json::Value>,
    parsed_results: Vec<ParsedResult>,
}

impl OcrSpaceResponse {
    // ErrorMessage arrives as a string or an array of strings depending on
    // the failure.
    fn message(&self) -> String {
        match &self.error_message {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            Some(other) => other.to_string(),
            None => "unknown error".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ParsedResult {
    parsed_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key() -> CloudOcr {
        let config = OcrConfig {
            api_key: "k".to_string(),
            ..OcrConfig::default()
        };
        CloudOcr::new(config).unwrap()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        assert!(matches!(
            CloudOcr::new(OcrConfig::default()),
            Err(OcrError::MissingApiKey)
        ));
    }

    #[test]
    fn request_form_carries_pdf_payload() {
        let form = client_with_key().request_form(b"%PDF-1.4");
        let get = |key: &str| {
            form.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("language"), "ind");
        assert_eq!(get("filetype"), "PDF");
        assert!(get("base64Image").starts_with("data:application/pdf;base64,"));
        assert_eq!(get("detectOrientation"), "true");
    }

    #[test]
    fn response_parses_page_texts() {
        let body: OcrSpaceResponse = serde_json::from_str(
            r#"{
                "IsErroredOnProcessing": false,
                "ParsedResults": [
                    {"ParsedText": "halaman satu"},
                    {"ParsedText": "halaman dua"}
                ]
            }"#,
        )
        .unwrap();
        assert!(!body.is_errored_on_processing);
        assert_eq!(body.parsed_results.len(), 2);
        assert_eq!(body.parsed_results[1].parsed_text, "halaman dua");
    }

    #[test]
    fn error_message_accepts_string_or_array() {
        let as_string: OcrSpaceResponse = serde_json::from_str(
            r#"{"IsErroredOnProcessing": true, "ErrorMessage": "bad file"}"#,
        )
        .unwrap();
        assert_eq!(as_string.message(), "bad file");

        let as_array: OcrSpaceResponse = serde_json::from_str(
            r#"{"IsErroredOnProcessing": true, "ErrorMessage": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(as_array.message(), "a; b");
    }
}
