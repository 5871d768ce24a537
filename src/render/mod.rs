pub mod metrics;
pub mod pdf;
pub mod profile;
pub mod zpl;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Which artifacts a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Zpl,
    Both,
}

impl OutputFormat {
    pub fn wants_pdf(self) -> bool {
        matches!(self, OutputFormat::Pdf | OutputFormat::Both)
    }

    pub fn wants_zpl(self) -> bool {
        matches!(self, OutputFormat::Zpl | OutputFormat::Both)
    }
}

/// Physical label stock, selected by the caller and never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LabelSize {
    #[cfg_attr(feature = "cli", value(name = "2x1"))]
    #[serde(rename = "2x1")]
    TwoByOne,
    #[cfg_attr(feature = "cli", value(name = "4x2"))]
    #[serde(rename = "4x2")]
    FourByTwo,
}

/// `labels_DDMM_HHMMSS.pdf`. The clock is an explicit parameter so renders
/// stay reproducible under test.
pub fn document_name(now: &DateTime<Local>) -> String {
    format!("labels_{}.pdf", now.format("%d%m_%H%M%S"))
}

/// `zebra_labels_DDMM_HHMMSS.zpl`, same stamp scheme as the document.
pub fn printer_name(now: &DateTime<Local>) -> String {
    format!("zebra_labels_{}.zpl", now.format("%d%m_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_artifact_names_embed_the_stamp() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap();
        assert_eq!(document_name(&now), "labels_0105_090307.pdf");
        assert_eq!(printer_name(&now), "zebra_labels_0105_090307.zpl");
    }

    #[test]
    fn test_format_selection() {
        assert!(OutputFormat::Pdf.wants_pdf());
        assert!(!OutputFormat::Pdf.wants_zpl());
        assert!(OutputFormat::Both.wants_pdf() && OutputFormat::Both.wants_zpl());
    }
}
