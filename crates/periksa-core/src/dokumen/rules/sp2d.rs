//! Extraction rules for SP2D fund disbursement orders.

use crate::dokumen::detector::SP2D_KEYWORD;
use crate::models::analysis::Sp2dDetail;

use super::patterns::{BANK, JUMLAH_DIBAYARKAN, NOMOR_SP2D, NPWP, REKENING, TANGGAL_BULAN};

/// Window after the account number searched for the bank name.
const BANK_WINDOW_CHARS: usize = 100;

/// Extract SP2D detail fields; misses degrade to empty strings.
///
/// Extraction is gated on the title keyword even though callers check
/// presence first, so the extractor stays inert on arbitrary text.
pub fn extract_sp2d(text: &str) -> Sp2dDetail {
    let mut nomor = String::new();
    let mut tanggal = String::new();
    let mut npwp = String::new();
    let mut rekening = String::new();
    let mut bank = String::new();
    let mut jumlah = String::new();

    if text.to_uppercase().contains(SP2D_KEYWORD) {
        if let Some(m) = NOMOR_SP2D.find(text) {
            nomor = m.as_str().to_string();
        }

        if let Some(caps) = TANGGAL_BULAN.captures(text) {
            tanggal = caps[1].to_string();
        }

        if let Some(m) = NPWP.find(text) {
            npwp = m.as_str().to_string();
        }

        if let Some(m) = REKENING.find(text) {
            rekening = m.as_str().to_string();

            // The bank name is only looked for in the window right after the
            // account number, never in the document at large.
            let window: String = text[m.end()..].chars().take(BANK_WINDOW_CHARS).collect();
            if let Some(name) = BANK.find(&window) {
                bank = name.as_str().trim().to_string();
            }
        }

        if let Some(caps) = JUMLAH_DIBAYARKAN.captures(text) {
            jumlah = caps[1].trim().to_string();
        }
    }

    Sp2dDetail {
        jenis_dokumen: Sp2dDetail::JENIS.to_string(),
        nomor_sp2d: nomor,
        tanggal_sp2d: tanggal,
        npwp_sp2d: npwp,
        rekening_sp2d: rekening,
        bank_sp2d: bank,
        jumlah_sp2d: jumlah,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP2D_SAMPLE: &str = "\
SURAT PERINTAH PENCAIRAN DANA
Nomor 24017/SP2D/1.01.01.01/2024
Tanggal 15 Februari 2024
NPWP 01.234.567.8-901.234
Rekening 123-45-6789012-3
BANK NEGARA INDONESIA CABANG JAKARTA
Jumlah yang dibayarkan Rp. 1.500.000,00
";

    #[test]
    fn extracts_all_sp2d_fields() {
        let detail = extract_sp2d(SP2D_SAMPLE);
        assert_eq!(detail.jenis_dokumen, "Surat Perintah Pencairan Dana");
        assert_eq!(detail.nomor_sp2d, "24017/SP2D/1.01.01.01/2024");
        assert_eq!(detail.tanggal_sp2d, "15 Februari 2024");
        assert_eq!(detail.npwp_sp2d, "01.234.567.8-901.234");
        assert_eq!(detail.rekening_sp2d, "123-45-6789012-3");
        assert_eq!(detail.bank_sp2d, "BANK NEGARA INDONESIA CABANG JAKARTA");
        assert_eq!(detail.jumlah_sp2d, "1.500.000,00");
    }

    #[test]
    fn without_title_keyword_every_field_is_empty() {
        let text = "Rekening 123-45-6789012-3\nBANK NEGARA INDONESIA";
        let detail = extract_sp2d(text);
        assert_eq!(detail.rekening_sp2d, "");
        assert_eq!(detail.bank_sp2d, "");
        assert_eq!(detail.jenis_dokumen, "Surat Perintah Pencairan Dana");
    }

    #[test]
    fn bank_is_not_searched_without_an_account_number() {
        let text = "SURAT PERINTAH PENCAIRAN DANA\nBANK NEGARA INDONESIA";
        let detail = extract_sp2d(text);
        assert_eq!(detail.rekening_sp2d, "");
        assert_eq!(detail.bank_sp2d, "");
    }

    #[test]
    fn bank_beyond_the_window_is_ignored() {
        let filler = "x".repeat(120);
        let text = format!(
            "SURAT PERINTAH PENCAIRAN DANA\n123-45-6789012-3\n{filler}\nBANK MANDIRI"
        );
        let detail = extract_sp2d(&text);
        assert_eq!(detail.rekening_sp2d, "123-45-6789012-3");
        assert_eq!(detail.bank_sp2d, "");
    }

    #[test]
    fn window_counts_characters_not_bytes() {
        // Multibyte filler right after the account number must not break the
        // window slicing; the bank name sits within 100 characters.
        let filler = "é".repeat(40);
        let text = format!(
            "SURAT PERINTAH PENCAIRAN DANA\n123-45-6789012-3 {filler}\nBANK MANDIRI"
        );
        let detail = extract_sp2d(&text);
        assert_eq!(detail.bank_sp2d, "BANK MANDIRI");
    }

    #[test]
    fn bank_name_stops_at_the_line_end() {
        let text = "\
SURAT PERINTAH PENCAIRAN DANA
123-45-6789012-3 BANK RAKYAT INDONESIA
baris berikutnya
";
        assert_eq!(extract_sp2d(text).bank_sp2d, "BANK RAKYAT INDONESIA");
    }

    #[test]
    fn tanggal_matches_case_insensitive_months() {
        let text = "SURAT PERINTAH PENCAIRAN DANA tanggal 3 MARET 2024";
        assert_eq!(extract_sp2d(text).tanggal_sp2d, "3 MARET 2024");
    }
}
