use crate::domain::model::LabelRecord;
use crate::utils::error::{LabelError, Result};

/// Builds the scannable GS1 digital-link payload for a record.
///
/// Field contents are interpolated without escaping. Printed QR codes
/// already in the field encode this exact byte layout, so the format is
/// frozen; `check_fields` rejects anything that would corrupt it instead.
pub fn compose(base: &str, record: &LabelRecord) -> String {
    format!(
        "{}/01/{}/11/{}/21/{}",
        base, record.gtin, record.production_date, record.serial
    )
}

/// Rejects field values that cannot be interpolated into the payload
/// unescaped: path separators, whitespace and non-ASCII bytes. The input
/// domain is alphanumeric GTIN/date/serial data, so this only trips on
/// genuinely broken rows.
pub fn check_fields(record: &LabelRecord, row: usize) -> Result<()> {
    for (name, value) in [
        ("gtin", &record.gtin),
        ("production date", &record.production_date),
        ("serial", &record.serial),
    ] {
        if value
            .chars()
            .any(|c| !c.is_ascii() || c.is_ascii_whitespace() || c == '/')
        {
            return Err(LabelError::ProcessingError {
                message: format!(
                    "Record {row}: field '{name}' value '{value}' is not URL-safe"
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LabelRecord {
        LabelRecord {
            model: "A".to_string(),
            gtin: "00012345678905".to_string(),
            production_date: "2024-05".to_string(),
            serial: "103".to_string(),
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let expected = "https://x/01/00012345678905/11/2024-05/21/103";
        assert_eq!(compose("https://x", &record()), expected);
        assert_eq!(compose("https://x", &record()), expected);
    }

    #[test]
    fn test_check_fields_accepts_alphanumeric() {
        assert!(check_fields(&record(), 1).is_ok());
    }

    #[test]
    fn test_check_fields_rejects_separator() {
        let mut r = record();
        r.serial = "10/3".to_string();
        assert!(check_fields(&r, 1).is_err());
    }

    #[test]
    fn test_check_fields_rejects_whitespace_and_non_ascii() {
        let mut r = record();
        r.gtin = "000 123".to_string();
        assert!(check_fields(&r, 1).is_err());

        let mut r = record();
        r.production_date = "2024-05月".to_string();
        assert!(check_fields(&r, 1).is_err());
    }
}
