//! XLSX export.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{ExportError, ExportResult};
use crate::export::{COLUMNS, columns};

/// Worksheet name.
pub const SHEET_NAME: &str = "VPAs";

/// Single-sheet workbook with a bold header row and the CSV columns.
///
/// # Errors
///
/// Returns an error if the workbook cannot be written or has too many rows.
pub fn to_xlsx(vpas: &[String]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(COLUMNS) {
        worksheet.write_string_with_format(0, col, title, &header)?;
    }

    for (index, vpa) in vpas.iter().enumerate() {
        let row = u32::try_from(index + 1)
            .map_err(|_| ExportError::Spreadsheet("too many rows".to_string()))?;
        for (col, value) in (0u16..).zip(columns(vpa)) {
            worksheet.write_string(row, col, value)?;
        }
    }
    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_xlsx_is_zip_container() {
        let vpas = vec!["9876543210@paytm".to_string()];
        let bytes = to_xlsx(&vpas).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_to_xlsx_empty() {
        let bytes = to_xlsx(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
