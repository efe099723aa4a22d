//! Scan command - batch-check every document under a folder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use periksa_core::{CloudOcr, PeriksaConfig};

use super::{acquire_file_text, build_ocr, load_config, save_text_sidecar};

/// Summary CSV columns, in the layout the audit spreadsheet expects.
const REPORT_COLUMNS: &[&str] = &[
    "user",
    "instansi_terperiksa",
    "nomor_surat_tugas",
    "nama_file",
    "SPM",
    "nomor_spm",
    "tanggal_spm",
    "dipa_spm",
    "nominal_spm",
    "DAFTAR_SP2D",
    "nomor_daftar_sp2d",
    "tanggal_daftar_sp2d",
    "nominal_daftar_sp2d",
    "SP2D",
    "nomor_sp2d",
    "tanggal_sp2d",
    "npwp_sp2d",
    "rekening_sp2d",
    "bank_sp2d",
    "jumlah_sp2d",
    "SPP",
    "nomor_spp",
    "tanggal_spp",
    "dipa_spp",
    "nominal_spp",
    "SK",
    "SURAT_TUGAS",
    "BAPP",
    "BAST",
    "BA_PEMBAYARAN",
    "SURAT_PERJANJIAN",
    "KONTRAK",
    "SPK",
    "SPMK",
    "KWITANSI",
    "INVOICE",
    "waktu",
    "status",
    "error",
];

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Directory or glob pattern to scan
    #[arg(required = true)]
    input: String,

    /// Summary CSV path
    #[arg(short, long, default_value = "hasil_pemeriksaan.csv")]
    summary: PathBuf,

    /// Examiner name recorded in the report
    #[arg(long)]
    pemeriksa: Option<String>,

    /// Assignment letter (surat tugas) number recorded in the report
    #[arg(long)]
    nomor_st: Option<String>,

    /// Audited institution recorded in the report
    #[arg(long)]
    instansi: Option<String>,

    /// Skip the cloud OCR fallback
    #[arg(long)]
    text_only: bool,

    /// Save acquired text as sidecar files
    #[arg(long)]
    save_text: bool,
}

/// Outcome for a single scanned file.
struct FileReport {
    name: String,
    record: HashMap<String, String>,
    waktu: String,
    error: Option<String>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files = collect_files(&args.input, &config)?;
    if files.is_empty() {
        anyhow::bail!("No matching files found under: {}", args.input);
    }

    println!(
        "{} Found {} files to check",
        style("ℹ").blue(),
        files.len()
    );

    let ocr = if args.text_only { None } else { build_ocr(&config)? };

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // An unreadable file becomes an error row, never a batch failure.
    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let report = check_file(path, &config, ocr.as_ref(), args.save_text).await;
        if let Some(error) = &report.error {
            warn!("failed to read {}: {}", path.display(), error);
        }
        reports.push(report);
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    write_summary(&args, &reports)?;

    let failed: Vec<_> = reports.iter().filter(|r| r.error.is_some()).collect();
    println!();
    println!(
        "{} Checked {} files in {:?}",
        style("✓").green(),
        reports.len(),
        start.elapsed()
    );
    println!(
        "   {} readable, {} failed",
        style(reports.len() - failed.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "{} Summary written to {}",
        style("✓").green(),
        args.summary.display()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Unreadable files:").red());
        for report in &failed {
            println!(
                "  - {}: {}",
                report.name,
                report.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn collect_files(input: &str, config: &PeriksaConfig) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = if Path::new(input).is_dir() {
        format!("{}/**/*", input.trim_end_matches('/'))
    } else {
        input.to_string()
    };

    let extensions = &config.scan.extensions;
    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .filter(|path| {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            extensions.iter().any(|allowed| allowed == &ext)
        })
        .collect();
    files.sort();

    Ok(files)
}

async fn check_file(
    path: &Path,
    config: &PeriksaConfig,
    ocr: Option<&CloudOcr>,
    save_text: bool,
) -> FileReport {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    let waktu = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    match acquire_file_text(path, config, ocr).await {
        Ok(text) => {
            if save_text {
                if let Err(e) = save_text_sidecar(path, &text, config) {
                    warn!("failed to save text for {}: {}", path.display(), e);
                }
            }

            let record = periksa_core::analyze(&text).to_record().into_iter().collect();
            FileReport {
                name,
                record,
                waktu,
                error: None,
            }
        }
        Err(e) => FileReport {
            name,
            record: HashMap::new(),
            waktu,
            error: Some(e.to_string()),
        },
    }
}

fn write_summary(args: &ScanArgs, reports: &[FileReport]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(&args.summary)?;

    wtr.write_record(REPORT_COLUMNS)?;

    for report in reports {
        let row: Vec<String> = REPORT_COLUMNS
            .iter()
            .map(|column| match *column {
                "user" => args.pemeriksa.clone().unwrap_or_default(),
                "instansi_terperiksa" => args.instansi.clone().unwrap_or_default(),
                "nomor_surat_tugas" => args.nomor_st.clone().unwrap_or_default(),
                "nama_file" => report.name.clone(),
                "waktu" => report.waktu.clone(),
                "status" => report.error.as_ref().map_or("ok", |_| "error").to_string(),
                "error" => report.error.clone().unwrap_or_default(),
                key => report.record.get(key).cloned().unwrap_or_default(),
            })
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
