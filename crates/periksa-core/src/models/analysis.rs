//! Analysis result models for document classification and extraction.
//!
//! Field names and the `jenis_dokumen` labels are fixed Indonesian strings;
//! downstream spreadsheet columns depend on them verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of recognized document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Surat Perintah Membayar (payment order).
    Spm,
    /// Daftar SP2D Satker (disbursement order ledger).
    DaftarSp2d,
    /// Surat Perintah Pencairan Dana (fund disbursement order).
    Sp2d,
    /// Surat Permintaan Pembayaran (payment request).
    Spp,
    /// Surat Keputusan (decision letter).
    Sk,
    /// Surat Tugas (assignment letter).
    SuratTugas,
    /// Berita Acara Penyelesaian Pekerjaan (work completion minutes).
    Bapp,
    /// Berita Acara Serah Terima (handover minutes).
    Bast,
    /// Berita Acara Pembayaran (payment minutes).
    BaPembayaran,
    /// Surat Perjanjian (agreement letter).
    SuratPerjanjian,
    /// Kontrak (contract).
    Kontrak,
    /// Surat Perintah Kerja (work order).
    Spk,
    /// Surat Perintah Mulai Kerja (commencement order).
    Spmk,
    /// Kwitansi / kuitansi (receipt).
    Kwitansi,
    /// Invoice.
    Invoice,
}

impl DocumentType {
    /// All recognized types, in report column order.
    pub const ALL: [DocumentType; 15] = [
        DocumentType::Spm,
        DocumentType::DaftarSp2d,
        DocumentType::Sp2d,
        DocumentType::Spp,
        DocumentType::Sk,
        DocumentType::SuratTugas,
        DocumentType::Bapp,
        DocumentType::Bast,
        DocumentType::BaPembayaran,
        DocumentType::SuratPerjanjian,
        DocumentType::Kontrak,
        DocumentType::Spk,
        DocumentType::Spmk,
        DocumentType::Kwitansi,
        DocumentType::Invoice,
    ];

    /// The presence key used for this type in flat records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Spm => "SPM",
            DocumentType::DaftarSp2d => "DAFTAR_SP2D",
            DocumentType::Sp2d => "SP2D",
            DocumentType::Spp => "SPP",
            DocumentType::Sk => "SK",
            DocumentType::SuratTugas => "SURAT_TUGAS",
            DocumentType::Bapp => "BAPP",
            DocumentType::Bast => "BAST",
            DocumentType::BaPembayaran => "BA_PEMBAYARAN",
            DocumentType::SuratPerjanjian => "SURAT_PERJANJIAN",
            DocumentType::Kontrak => "KONTRAK",
            DocumentType::Spk => "SPK",
            DocumentType::Spmk => "SPMK",
            DocumentType::Kwitansi => "KWITANSI",
            DocumentType::Invoice => "INVOICE",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a document type was found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    #[serde(rename = "Ada")]
    Ada,
    #[serde(rename = "Tidak Ada")]
    TidakAda,
}

impl Presence {
    /// Report value for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Ada => "Ada",
            Presence::TidakAda => "Tidak Ada",
        }
    }

    pub fn is_ada(&self) -> bool {
        matches!(self, Presence::Ada)
    }
}

impl From<bool> for Presence {
    fn from(found: bool) -> Self {
        if found { Presence::Ada } else { Presence::TidakAda }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence flag for every recognized type, always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceMap {
    #[serde(rename = "SPM")]
    pub spm: Presence,
    #[serde(rename = "DAFTAR_SP2D")]
    pub daftar_sp2d: Presence,
    #[serde(rename = "SP2D")]
    pub sp2d: Presence,
    #[serde(rename = "SPP")]
    pub spp: Presence,
    #[serde(rename = "SK")]
    pub sk: Presence,
    #[serde(rename = "SURAT_TUGAS")]
    pub surat_tugas: Presence,
    #[serde(rename = "BAPP")]
    pub bapp: Presence,
    #[serde(rename = "BAST")]
    pub bast: Presence,
    #[serde(rename = "BA_PEMBAYARAN")]
    pub ba_pembayaran: Presence,
    #[serde(rename = "SURAT_PERJANJIAN")]
    pub surat_perjanjian: Presence,
    #[serde(rename = "KONTRAK")]
    pub kontrak: Presence,
    #[serde(rename = "SPK")]
    pub spk: Presence,
    #[serde(rename = "SPMK")]
    pub spmk: Presence,
    #[serde(rename = "KWITANSI")]
    pub kwitansi: Presence,
    #[serde(rename = "INVOICE")]
    pub invoice: Presence,
}

impl PresenceMap {
    /// A map with every flag set to "Tidak Ada".
    pub fn absent() -> Self {
        Self {
            spm: Presence::TidakAda,
            daftar_sp2d: Presence::TidakAda,
            sp2d: Presence::TidakAda,
            spp: Presence::TidakAda,
            sk: Presence::TidakAda,
            surat_tugas: Presence::TidakAda,
            bapp: Presence::TidakAda,
            bast: Presence::TidakAda,
            ba_pembayaran: Presence::TidakAda,
            surat_perjanjian: Presence::TidakAda,
            kontrak: Presence::TidakAda,
            spk: Presence::TidakAda,
            spmk: Presence::TidakAda,
            kwitansi: Presence::TidakAda,
            invoice: Presence::TidakAda,
        }
    }

    pub fn get(&self, ty: DocumentType) -> Presence {
        match ty {
            DocumentType::Spm => self.spm,
            DocumentType::DaftarSp2d => self.daftar_sp2d,
            DocumentType::Sp2d => self.sp2d,
            DocumentType::Spp => self.spp,
            DocumentType::Sk => self.sk,
            DocumentType::SuratTugas => self.surat_tugas,
            DocumentType::Bapp => self.bapp,
            DocumentType::Bast => self.bast,
            DocumentType::BaPembayaran => self.ba_pembayaran,
            DocumentType::SuratPerjanjian => self.surat_perjanjian,
            DocumentType::Kontrak => self.kontrak,
            DocumentType::Spk => self.spk,
            DocumentType::Spmk => self.spmk,
            DocumentType::Kwitansi => self.kwitansi,
            DocumentType::Invoice => self.invoice,
        }
    }

    /// Flags in report column order.
    pub fn entries(&self) -> [(DocumentType, Presence); 15] {
        DocumentType::ALL.map(|ty| (ty, self.get(ty)))
    }
}

impl Default for PresenceMap {
    fn default() -> Self {
        Self::absent()
    }
}

/// Extracted fields for an SPM (Surat Perintah Membayar).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpmDetail {
    pub jenis_dokumen: String,
    pub nomor_spm: String,
    pub tanggal_spm: String,
    pub dipa_spm: String,
    pub nominal_spm: String,
}

impl SpmDetail {
    pub const JENIS: &'static str = "Surat Perintah Membayar";

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("jenis_dokumen", self.jenis_dokumen.as_str()),
            ("nomor_spm", self.nomor_spm.as_str()),
            ("tanggal_spm", self.tanggal_spm.as_str()),
            ("dipa_spm", self.dipa_spm.as_str()),
            ("nominal_spm", self.nominal_spm.as_str()),
        ]
    }
}

/// Extracted fields for a Daftar SP2D ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaftarSp2dDetail {
    pub jenis_dokumen: String,
    pub nomor_daftar_sp2d: String,
    pub tanggal_daftar_sp2d: String,
    pub nominal_daftar_sp2d: String,
}

impl DaftarSp2dDetail {
    pub const JENIS: &'static str = "DAFTAR SP2D SATKER";

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("jenis_dokumen", self.jenis_dokumen.as_str()),
            ("nomor_daftar_sp2d", self.nomor_daftar_sp2d.as_str()),
            ("tanggal_daftar_sp2d", self.tanggal_daftar_sp2d.as_str()),
            ("nominal_daftar_sp2d", self.nominal_daftar_sp2d.as_str()),
        ]
    }
}

/// Extracted fields for an SP2D (Surat Perintah Pencairan Dana).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sp2dDetail {
    pub jenis_dokumen: String,
    pub nomor_sp2d: String,
    pub tanggal_sp2d: String,
    pub npwp_sp2d: String,
    pub rekening_sp2d: String,
    pub bank_sp2d: String,
    pub jumlah_sp2d: String,
}

impl Sp2dDetail {
    pub const JENIS: &'static str = "Surat Perintah Pencairan Dana";

    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("jenis_dokumen", self.jenis_dokumen.as_str()),
            ("nomor_sp2d", self.nomor_sp2d.as_str()),
            ("tanggal_sp2d", self.tanggal_sp2d.as_str()),
            ("npwp_sp2d", self.npwp_sp2d.as_str()),
            ("rekening_sp2d", self.rekening_sp2d.as_str()),
            ("bank_sp2d", self.bank_sp2d.as_str()),
            ("jumlah_sp2d", self.jumlah_sp2d.as_str()),
        ]
    }
}

/// Extracted fields for an SPP (Surat Permintaan Pembayaran).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SppDetail {
    pub jenis_dokumen: String,
    pub nomor_spp: String,
    pub tanggal_spp: String,
    pub dipa_spp: String,
    pub nominal_spp: String,
}

impl SppDetail {
    pub const JENIS: &'static str = "Surat Permintaan Pembayaran";

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("jenis_dokumen", self.jenis_dokumen.as_str()),
            ("nomor_spp", self.nomor_spp.as_str()),
            ("tanggal_spp", self.tanggal_spp.as_str()),
            ("dipa_spp", self.dipa_spp.as_str()),
            ("nominal_spp", self.nominal_spp.as_str()),
        ]
    }
}

/// Complete result of analyzing one document's text.
///
/// Detail groups are populated exactly when the corresponding presence flag
/// is "Ada"; every other type only ever contributes a presence flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub presence: PresenceMap,
    pub spm: Option<SpmDetail>,
    pub daftar_sp2d: Option<DaftarSp2dDetail>,
    pub sp2d: Option<Sp2dDetail>,
    pub spp: Option<SppDetail>,
}

impl AnalysisResult {
    /// Flatten into the key → value record handed to reports.
    ///
    /// Presence keys come first, then detail groups in SPM, DAFTAR_SP2D,
    /// SP2D, SPP order. The record carries a single `jenis_dokumen` key:
    /// when several detailed types are present the last group applied owns
    /// it.
    pub fn to_record(&self) -> Vec<(String, String)> {
        let mut record: Vec<(String, String)> = self
            .presence
            .entries()
            .iter()
            .map(|(ty, presence)| (ty.as_str().to_string(), presence.as_str().to_string()))
            .collect();

        if let Some(detail) = &self.spm {
            for (key, value) in detail.fields() {
                upsert(&mut record, key, value);
            }
        }
        if let Some(detail) = &self.daftar_sp2d {
            for (key, value) in detail.fields() {
                upsert(&mut record, key, value);
            }
        }
        if let Some(detail) = &self.sp2d {
            for (key, value) in detail.fields() {
                upsert(&mut record, key, value);
            }
        }
        if let Some(detail) = &self.spp {
            for (key, value) in detail.fields() {
                upsert(&mut record, key, value);
            }
        }

        record
    }
}

fn upsert(record: &mut Vec<(String, String)>, key: &str, value: &str) {
    match record.iter_mut().find(|(k, _)| k == key) {
        Some(slot) => slot.1 = value.to_string(),
        None => record.push((key.to_string(), value.to_string())),
    }
}
