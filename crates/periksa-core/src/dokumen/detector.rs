//! Presence detection for the recognized document types.
//!
//! Detection is keyword-based over the uppercased text. A document can match
//! several types at once; the three Berita Acara variants in particular are
//! independent checks and often co-occur in one scan.

use crate::models::analysis::PresenceMap;

pub(crate) const SPM_KEYWORD: &str = "SURAT PERINTAH MEMBAYAR";
pub(crate) const DAFTAR_SP2D_KEYWORD: &str = "DAFTAR SP2D SATKER";
pub(crate) const SP2D_KEYWORD: &str = "SURAT PERINTAH PENCAIRAN DANA";
pub(crate) const SPP_KEYWORD: &str = "SURAT PERMINTAAN PEMBAYARAN";

/// Decision-letter structural markers, matched case-sensitively against the
/// original text.
const SK_MARKERS: [&str; 3] = ["Menimbang", "Mengingat", "Menetapkan"];

/// Assignment-letter markers; any one of them is enough.
const PENUGASAN_MARKERS: [&str; 2] = ["MENUGASKAN", "MEMBERI TUGAS"];

/// Detect every recognized document type in one pass.
///
/// Total over any input: the empty string yields an all-"Tidak Ada" map.
pub fn detect(text: &str) -> PresenceMap {
    let upper = text.to_uppercase();

    PresenceMap {
        spm: upper.contains(SPM_KEYWORD).into(),
        daftar_sp2d: upper.contains(DAFTAR_SP2D_KEYWORD).into(),
        sp2d: upper.contains(SP2D_KEYWORD).into(),
        spp: upper.contains(SPP_KEYWORD).into(),
        sk: (upper.contains("KEPUTUSAN") && SK_MARKERS.iter().all(|m| text.contains(m))).into(),
        surat_tugas: (upper.contains("SURAT TUGAS")
            && PENUGASAN_MARKERS.iter().any(|m| upper.contains(m)))
        .into(),
        bapp: (upper.contains("BERITA ACARA") && upper.contains("PENYELESAIAN PEKERJAAN")).into(),
        bast: (upper.contains("BERITA ACARA") && upper.contains("SERAH TERIMA")).into(),
        ba_pembayaran: (upper.contains("BERITA ACARA") && upper.contains("PEMBAYARAN")).into(),
        surat_perjanjian: upper.contains("SURAT PERJANJIAN").into(),
        kontrak: upper.contains("KONTRAK").into(),
        spk: upper.contains("SURAT PERINTAH KERJA").into(),
        spmk: upper.contains("SURAT PERINTAH MULAI KERJA").into(),
        kwitansi: (upper.contains("KWITANSI") || upper.contains("KUITANSI")).into(),
        invoice: upper.contains("INVOICE").into(),
    }
}
