//! Engine entry point: presence detection plus per-type extraction.

use tracing::debug;

use crate::models::analysis::AnalysisResult;

use super::detector;
use super::rules::{extract_daftar_sp2d, extract_sp2d, extract_spm, extract_spp};

/// Analyze one document's extracted text.
///
/// Pure, deterministic, and total: any input string, including the empty
/// string, yields a fully populated presence map, and detail groups exist
/// exactly for the detailed types whose flag is "Ada". Detail fields that
/// fail to match degrade to empty strings. Safe to call concurrently.
pub fn analyze(text: &str) -> AnalysisResult {
    let presence = detector::detect(text);

    let spm = presence.spm.is_ada().then(|| extract_spm(text));
    let daftar_sp2d = presence.daftar_sp2d.is_ada().then(|| extract_daftar_sp2d(text));
    let sp2d = presence.sp2d.is_ada().then(|| extract_sp2d(text));
    let spp = presence.spp.is_ada().then(|| extract_spp(text));

    let hits = presence.entries().iter().filter(|(_, p)| p.is_ada()).count();
    debug!("analyzed {} chars of text, {} type(s) present", text.len(), hits);

    AnalysisResult {
        presence,
        spm,
        daftar_sp2d,
        sp2d,
        spp,
    }
}
