//! Process command - analyze a single document file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use periksa_core::AnalysisResult;

use super::{acquire_file_text, build_ocr, load_config, save_text_sidecar};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or pre-extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip the cloud OCR fallback and use only embedded text
    #[arg(long)]
    text_only: bool,

    /// Save the acquired text as a sidecar file
    #[arg(long)]
    save_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let ocr = if args.text_only { None } else { build_ocr(&config)? };
    let text = acquire_file_text(&args.input, &config, ocr.as_ref()).await?;

    if args.save_text {
        let sidecar = save_text_sidecar(&args.input, &text, &config)?;
        println!(
            "{} Text saved to {}",
            style("✓").green(),
            sidecar.display()
        );
    }

    let result = periksa_core::analyze(&text);
    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_result(result: &AnalysisResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(result),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_json(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut map = serde_json::Map::new();
    for (key, value) in result.to_record() {
        map.insert(key, serde_json::Value::String(value));
    }
    Ok(serde_json::to_string(&serde_json::Value::Object(map))?)
}

fn format_csv(result: &AnalysisResult) -> anyhow::Result<String> {
    let record = result.to_record();
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(record.iter().map(|(key, _)| key.as_str()))?;
    wtr.write_record(record.iter().map(|(_, value)| value.as_str()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str("Kelengkapan dokumen:\n");
    for (ty, presence) in result.presence.entries() {
        output.push_str(&format!("  {:<17} {}\n", ty.as_str(), presence));
    }

    let record = result.to_record();
    if record.len() > 15 {
        output.push_str("\nRincian:\n");
        for (key, value) in &record[15..] {
            output.push_str(&format!("  {:<22} {}\n", key, value));
        }
    }

    output
}
