//! CSV export.

use crate::error::{ExportError, ExportResult};
use crate::export::{COLUMNS, columns};

/// Header row followed by one `phone_number,upi_handle,full_vpa` row per identifier.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn to_csv(vpas: &[String]) -> ExportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for vpa in vpas {
        writer.write_record(columns(vpa))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.error().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_csv() {
        let vpas = vec!["9876543210@paytm".to_string(), "9876543210@ybl".to_string()];
        let csv = String::from_utf8(to_csv(&vpas).unwrap()).unwrap();
        assert_eq!(
            csv,
            "phone_number,upi_handle,full_vpa\n\
             9876543210,paytm,9876543210@paytm\n\
             9876543210,ybl,9876543210@ybl\n"
        );
    }

    #[test]
    fn test_to_csv_quotes_and_missing_separator() {
        let vpas = vec!["a,b@x".to_string(), "plain".to_string()];
        let csv = String::from_utf8(to_csv(&vpas).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "\"a,b\",x,\"a,b@x\"");
        assert_eq!(lines[2], "plain,,plain");
    }

    #[test]
    fn test_to_csv_empty() {
        let csv = String::from_utf8(to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "phone_number,upi_handle,full_vpa\n");
    }
}
