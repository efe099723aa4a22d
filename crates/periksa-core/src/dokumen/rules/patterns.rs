//! Shared regex patterns for Indonesian public-finance documents.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // SPM/SPP reference line ("Nomor 00123/SPM/2024 Tanggal 5 Januari 2024")
    pub static ref NOMOR_REF: Regex = Regex::new(
        r"Nomor\s+([A-Za-z0-9\-/]+)"
    ).unwrap();

    pub static ref TANGGAL_REF: Regex = Regex::new(
        r"Tanggal\s+([0-9]{1,2}[-/ ][A-Za-z]{3,9}[-/ ][0-9]{4})"
    ).unwrap();

    // DIPA budget code (DIPA-023.17.1.690523/2024)
    pub static ref DIPA: Regex = Regex::new(
        r"(DIPA[-\s:]?\d{3}\.\d{2}\.\d{1}\.\d{6}/\d{4})"
    ).unwrap();

    // Amount, dot-grouped thousands with comma decimals (1.234.567,89)
    pub static ref NOMINAL: Regex = Regex::new(
        r"(\d{1,3}(?:\.\d{3})*,\d{2})"
    ).unwrap();

    // Daftar SP2D ledger line: long reference number, DD-MM-YYYY date pairs,
    // amounts with mixed separators as OCR tends to render them
    pub static ref NOMOR_DAFTAR: Regex = Regex::new(
        r"\b(\d{15,})\b"
    ).unwrap();

    pub static ref TANGGAL_DMY: Regex = Regex::new(
        r"(\d{2}-\d{2}-\d{4})"
    ).unwrap();

    pub static ref NOMINAL_CAMPURAN: Regex = Regex::new(
        r"(\d{1,3}(?:[.,]\d{3})+[.,]\d{2})"
    ).unwrap();

    // SP2D fields
    pub static ref NOMOR_SP2D: Regex = Regex::new(
        r"\d{5}/SP2D/\d{1,2}\.\d{2}\.\d{2}\.\d{2}/\d{4}"
    ).unwrap();

    pub static ref TANGGAL_BULAN: Regex = Regex::new(
        r"(?i)(\d{1,2}\s(?:Januari|Februari|Maret|April|Mei|Juni|Juli|Agustus|September|Oktober|November|Desember)\s\d{4})"
    ).unwrap();

    // NPWP (taxpayer ID, 99.999.999.9-999.999)
    pub static ref NPWP: Regex = Regex::new(
        r"\d{2}\.\d{3}\.\d{3}\.\d-\d{3}\.\d{3}"
    ).unwrap();

    // Treasury bank account (999-99-9999999-9)
    pub static ref REKENING: Regex = Regex::new(
        r"\d{3}-\d{2}-\d{7}-\d"
    ).unwrap();

    // Bank name, searched only in the window after an account match
    pub static ref BANK: Regex = Regex::new(
        r"(?i)BANK.*"
    ).unwrap();

    pub static ref JUMLAH_DIBAYARKAN: Regex = Regex::new(
        r"(?i)Jumlah yang dibayarkan\s*(?:Rp)?[.: ]*\s*([\d.]+,\d{2})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_requires_comma_decimals() {
        assert!(NOMINAL.is_match("1.234.567,89"));
        assert!(NOMINAL.is_match("850,00"));
        assert!(!NOMINAL.is_match("1.234.567"));
    }

    #[test]
    fn dipa_accepts_separator_variants() {
        for sample in [
            "DIPA-023.17.1.690523/2024",
            "DIPA 023.17.1.690523/2024",
            "DIPA:023.17.1.690523/2024",
            "DIPA023.17.1.690523/2024",
        ] {
            assert!(DIPA.is_match(sample), "no match for {sample}");
        }
        assert!(!DIPA.is_match("DIPA-23.17.1.690523/2024"));
    }

    #[test]
    fn nomor_daftar_needs_fifteen_digits() {
        assert!(NOMOR_DAFTAR.is_match("240191301000814 some text"));
        assert!(!NOMOR_DAFTAR.is_match("24019130100081"));
    }

    #[test]
    fn tanggal_bulan_is_case_insensitive() {
        assert!(TANGGAL_BULAN.is_match("5 Januari 2024"));
        assert!(TANGGAL_BULAN.is_match("17 AGUSTUS 1945"));
        assert!(!TANGGAL_BULAN.is_match("5 January 2024"));
    }

    #[test]
    fn jumlah_dibayarkan_rp_is_optional() {
        let with_rp = "Jumlah yang dibayarkan Rp. 1.500.000,00";
        let without_rp = "Jumlah yang dibayarkan 1.500.000,00";
        assert_eq!(&JUMLAH_DIBAYARKAN.captures(with_rp).unwrap()[1], "1.500.000,00");
        assert_eq!(&JUMLAH_DIBAYARKAN.captures(without_rp).unwrap()[1], "1.500.000,00");
    }
}
