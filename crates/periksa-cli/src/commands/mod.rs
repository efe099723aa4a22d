//! CLI subcommands and the helpers they share.

pub mod config;
pub mod process;
pub mod scan;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use periksa_core::{CloudOcr, OcrError, PeriksaConfig};

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("periksa")
        .join("config.json")
}

/// Load configuration: explicit path, else the default location when it
/// exists, else built-in defaults. An empty OCR key falls back to the
/// `OCR_SPACE_API_KEY` environment variable.
pub fn load_config(path: Option<&str>) -> anyhow::Result<PeriksaConfig> {
    let mut config = match path {
        Some(p) => PeriksaConfig::from_file(Path::new(p))?,
        None => {
            let default = default_config_path();
            if default.exists() {
                PeriksaConfig::from_file(&default)?
            } else {
                PeriksaConfig::default()
            }
        }
    };

    if config.ocr.api_key.is_empty() {
        if let Ok(key) = std::env::var("OCR_SPACE_API_KEY") {
            config.ocr.api_key = key;
        }
    }

    Ok(config)
}

/// Build the OCR client when a key is configured; otherwise run without the
/// fallback.
pub fn build_ocr(config: &PeriksaConfig) -> anyhow::Result<Option<CloudOcr>> {
    match CloudOcr::new(config.ocr.clone()) {
        Ok(client) => Ok(Some(client)),
        Err(OcrError::MissingApiKey) => {
            debug!("no OCR API key configured, scanned documents rely on embedded text");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Read one input file and produce its text: PDFs go through embedded-text
/// acquisition with the OCR fallback, `.txt` files are read directly.
pub async fn acquire_file_text(
    path: &Path,
    config: &PeriksaConfig,
    ocr: Option<&CloudOcr>,
) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            Ok(periksa_core::acquire_text(&data, &config.pdf, ocr).await?)
        }
        "txt" => Ok(fs::read_to_string(path)?),
        _ => anyhow::bail!("unsupported file format: {}", extension),
    }
}

/// Write the acquired text next to the report, under the configured text
/// directory.
pub fn save_text_sidecar(
    source: &Path,
    text: &str,
    config: &PeriksaConfig,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(&config.scan.text_dir)?;
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dokumen");
    let path = config.scan.text_dir.join(format!("{stem}.txt"));
    fs::write(&path, text)?;
    Ok(path)
}
