//! Extraction rules for Daftar SP2D ledger sheets.
//!
//! Ledger rows pack everything into one line: a 15+ digit reference number,
//! a request/approval date pair, and the disbursed amount. The first line
//! carrying a reference number is the row of interest.

use crate::models::analysis::DaftarSp2dDetail;

use super::patterns::{NOMINAL_CAMPURAN, NOMOR_DAFTAR, TANGGAL_DMY};

/// Extract ledger detail fields; misses degrade to empty strings.
///
/// Date and amount are only searched on the reference-number line. When the
/// line carries two dates the second one is taken: the first is the
/// disbursement request date, the second the approval date.
pub fn extract_daftar_sp2d(text: &str) -> DaftarSp2dDetail {
    let mut nomor = String::new();
    let mut tanggal = String::new();
    let mut nominal = String::new();

    for line in text.lines() {
        if let Some(caps) = NOMOR_DAFTAR.captures(line) {
            nomor = caps[1].trim().to_string();

            let dates: Vec<&str> = TANGGAL_DMY.find_iter(line).map(|m| m.as_str()).collect();
            if dates.len() >= 2 {
                tanggal = dates[1].to_string();
            }

            if let Some(amount) = NOMINAL_CAMPURAN.captures(line) {
                nominal = amount[1].trim().to_string();
            }
            break;
        }
    }

    DaftarSp2dDetail {
        jenis_dokumen: DaftarSp2dDetail::JENIS.to_string(),
        nomor_daftar_sp2d: nomor,
        tanggal_daftar_sp2d: tanggal,
        nominal_daftar_sp2d: nominal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_row_fields_from_one_line() {
        let text = "1 2401913010008147 01-01-2024 02-01-2024 12.345.678,90 PT ABC";
        let detail = extract_daftar_sp2d(text);
        assert_eq!(detail.jenis_dokumen, "DAFTAR SP2D SATKER");
        assert_eq!(detail.nomor_daftar_sp2d, "2401913010008147");
        assert_eq!(detail.tanggal_daftar_sp2d, "02-01-2024");
        assert_eq!(detail.nominal_daftar_sp2d, "12.345.678,90");
    }

    #[test]
    fn second_date_wins() {
        let text = "999999999999999 01-01-2024 02-01-2024";
        assert_eq!(extract_daftar_sp2d(text).tanggal_daftar_sp2d, "02-01-2024");
    }

    #[test]
    fn single_date_is_discarded() {
        let text = "999999999999999 01-01-2024 1.000,00";
        let detail = extract_daftar_sp2d(text);
        assert_eq!(detail.tanggal_daftar_sp2d, "");
        assert_eq!(detail.nominal_daftar_sp2d, "1.000,00");
    }

    #[test]
    fn first_reference_line_ends_the_scan() {
        let text = "\
999999999999999 tanpa tanggal maupun nominal
888888888888888 01-01-2024 02-01-2024 5.000,00
";
        let detail = extract_daftar_sp2d(text);
        assert_eq!(detail.nomor_daftar_sp2d, "999999999999999");
        assert_eq!(detail.tanggal_daftar_sp2d, "");
        assert_eq!(detail.nominal_daftar_sp2d, "");
    }

    #[test]
    fn mixed_separator_amounts_match() {
        let text = "999999999999999 12,345,678.90";
        assert_eq!(extract_daftar_sp2d(text).nominal_daftar_sp2d, "12,345,678.90");
    }

    #[test]
    fn no_reference_number_yields_empty_detail() {
        let detail = extract_daftar_sp2d("hanya teks biasa 1234");
        assert_eq!(detail.nomor_daftar_sp2d, "");
        assert_eq!(detail.tanggal_daftar_sp2d, "");
        assert_eq!(detail.nominal_daftar_sp2d, "");
    }
}
