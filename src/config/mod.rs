pub mod storage;

use crate::domain::ports::ConfigProvider;
use crate::render::{LabelSize, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "labelgen")]
#[command(about = "Generates GS1 product labels as a PDF sheet or a ZPL print job")]
pub struct CliConfig {
    /// CSV export of the product spreadsheet (model, gtin, production date, serial)
    #[arg(long)]
    pub input_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Pdf)]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = LabelSize::TwoByOne)]
    pub label_size: LabelSize,

    /// Distribution base URL encoded into document QR payloads
    #[arg(long, default_value = "https://auto.gs1ni.org")]
    pub document_base: String,

    /// Distribution base URL encoded into printer QR payloads
    #[arg(long, default_value = "https://id.website.com")]
    pub printer_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn label_size(&self) -> LabelSize {
        self.label_size
    }

    fn document_base(&self) -> &str {
        &self.document_base
    }

    fn printer_base(&self) -> &str {
        &self.printer_base
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_url("document_base", &self.document_base)?;
        validation::validate_url("printer_base", &self.printer_base)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            input_path: "labels.csv".to_string(),
            output_path: "./output".to_string(),
            format: OutputFormat::Both,
            label_size: LabelSize::TwoByOne,
            document_base: "https://auto.gs1ni.org".to_string(),
            printer_base: "https://id.website.com".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut c = config();
        c.document_base = "ftp://nope".to_string();
        assert!(c.validate().is_err());
    }
}
