//! Shared extraction rules for SPM and SPP payment documents.
//!
//! Both layouts carry the same anatomy: a "Nomor ... Tanggal ..." reference
//! line, a DIPA budget code somewhere in the body, and a totals line with
//! the amount. Only the key suffix and the document label differ.

use crate::models::analysis::{SpmDetail, SppDetail};

use super::patterns::{DIPA, NOMINAL, NOMOR_REF, TANGGAL_REF};

/// Extract SPM detail fields; misses degrade to empty strings.
pub fn extract_spm(text: &str) -> SpmDetail {
    let fields = shared_fields(text);
    SpmDetail {
        jenis_dokumen: SpmDetail::JENIS.to_string(),
        nomor_spm: fields.nomor,
        tanggal_spm: fields.tanggal,
        dipa_spm: fields.dipa,
        nominal_spm: fields.nominal,
    }
}

/// Extract SPP detail fields; misses degrade to empty strings.
pub fn extract_spp(text: &str) -> SppDetail {
    let fields = shared_fields(text);
    SppDetail {
        jenis_dokumen: SppDetail::JENIS.to_string(),
        nomor_spp: fields.nomor,
        tanggal_spp: fields.tanggal,
        dipa_spp: fields.dipa,
        nominal_spp: fields.nominal,
    }
}

struct SharedFields {
    nomor: String,
    tanggal: String,
    dipa: String,
    nominal: String,
}

fn shared_fields(text: &str) -> SharedFields {
    let (nomor, tanggal) = reference_line(text);
    let dipa = DIPA
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();
    let nominal = totals_line(text);

    SharedFields {
        nomor,
        tanggal,
        dipa,
        nominal,
    }
}

/// The first line naming both `Nomor` and `Tanggal` is the reference line;
/// later candidates are ignored even when this one yields nothing.
fn reference_line(text: &str) -> (String, String) {
    for line in text.lines() {
        if line.contains("Nomor") && line.contains("Tanggal") {
            let nomor = NOMOR_REF
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_default();
            let tanggal = TANGGAL_REF
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_default();
            return (nomor, tanggal);
        }
    }
    (String::new(), String::new())
}

/// Only the first TOTAL/PEMBAYARAN line is consulted; a qualifying line
/// without an amount still ends the scan.
fn totals_line(text: &str) -> String {
    for line in text.lines() {
        let upper = line.to_uppercase();
        if upper.contains("TOTAL") || upper.contains("PEMBAYARAN") {
            return NOMINAL
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_default();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPM_SAMPLE: &str = "\
KEMENTERIAN KEUANGAN REPUBLIK INDONESIA
SURAT PERINTAH MEMBAYAR
Nomor 00123/SPM/2024 Tanggal 5 Januari 2024
DIPA-023.17.1.690523/2024
JUMLAH PEMBAYARAN 1.234.567,89
";

    #[test]
    fn extracts_all_spm_fields() {
        let detail = extract_spm(SPM_SAMPLE);
        assert_eq!(detail.jenis_dokumen, "Surat Perintah Membayar");
        assert_eq!(detail.nomor_spm, "00123/SPM/2024");
        assert_eq!(detail.tanggal_spm, "5 Januari 2024");
        assert_eq!(detail.dipa_spm, "DIPA-023.17.1.690523/2024");
        assert_eq!(detail.nominal_spm, "1.234.567,89");
    }

    #[test]
    fn spp_shares_the_rule_set() {
        let detail = extract_spp(SPM_SAMPLE);
        assert_eq!(detail.jenis_dokumen, "Surat Permintaan Pembayaran");
        assert_eq!(detail.nomor_spp, "00123/SPM/2024");
        assert_eq!(detail.tanggal_spp, "5 Januari 2024");
    }

    #[test]
    fn first_reference_line_wins() {
        let text = "Nomor A-1/X Tanggal 1 Maret 2024\nNomor B-2/Y Tanggal 2 April 2024";
        let detail = extract_spm(text);
        assert_eq!(detail.nomor_spm, "A-1/X");
        assert_eq!(detail.tanggal_spm, "1 Maret 2024");
    }

    #[test]
    fn reference_line_accepts_hyphenated_numbers() {
        let text = "Nomor ST-123/XYZ Tanggal 5 Januari 2024";
        let detail = extract_spm(text);
        assert_eq!(detail.nomor_spm, "ST-123/XYZ");
        assert_eq!(detail.tanggal_spm, "5 Januari 2024");
    }

    #[test]
    fn missing_reference_line_yields_empty_fields() {
        let detail = extract_spm("Nomor 1/2024 tanpa kata kunci tanggal di baris lain");
        assert_eq!(detail.nomor_spm, "");
        assert_eq!(detail.tanggal_spm, "");
    }

    #[test]
    fn first_totals_line_without_amount_ends_the_scan() {
        let text = "\
TOTAL sedang dihitung
TOTAL 9.876.543,21
";
        let detail = extract_spm(text);
        assert_eq!(detail.nominal_spm, "");
    }

    #[test]
    fn pembayaran_line_also_qualifies_for_the_amount() {
        let text = "Rincian pembayaran 850,00 untuk honor";
        let detail = extract_spm(text);
        assert_eq!(detail.nominal_spm, "850,00");
    }

    #[test]
    fn empty_text_yields_empty_detail() {
        let detail = extract_spp("");
        assert_eq!(detail.nomor_spp, "");
        assert_eq!(detail.tanggal_spp, "");
        assert_eq!(detail.dipa_spp, "");
        assert_eq!(detail.nominal_spp, "");
    }
}
