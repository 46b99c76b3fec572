use super::encode_error;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{KissBomFormatter, KissBomParser};
use crate::sbom_projection::domain::{KissBom, Package};
use crate::shared::Result;

/// Column names of the header row, in output order
const CSV_HEADER: [&str; 4] = ["purl", "license", "copyright", "notes"];

/// CsvFormatter adapter for KissBOM CSV output
///
/// Writes the header row followed by one row per package. Absent values are
/// written as empty fields and values are quoted only where CSV needs it.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn record(package: &Package) -> [&str; 4] {
        [
            package.purl().as_str(),
            package.license().unwrap_or_default(),
            package.copyright().unwrap_or_default(),
            package.notes().unwrap_or_default(),
        ]
    }

    /// Rejects control characters other than tab, CR and LF.
    ///
    /// Quoting covers separators and line breaks, but characters such as NUL or
    /// ESC cannot be carried through a CSV file reliably.
    fn validate_record(record: &[&str; 4]) -> Result<()> {
        for (column, value) in CSV_HEADER.iter().zip(record.iter()) {
            if let Some(c) = value
                .chars()
                .find(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
            {
                return Err(encode_error(
                    OutputFormat::Csv,
                    format!(
                        "{} of package {} contains control character {:?}",
                        column,
                        record[0].escape_default(),
                        c
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KissBomFormatter for CsvFormatter {
    fn format(&self, bom: &KissBom) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(CSV_HEADER)
            .map_err(|e| encode_error(OutputFormat::Csv, e))?;

        for package in bom.packages() {
            let record = Self::record(package);
            Self::validate_record(&record)?;
            writer
                .write_record(record)
                .map_err(|e| encode_error(OutputFormat::Csv, e))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| encode_error(OutputFormat::Csv, e))?;
        String::from_utf8(bytes).map_err(|e| encode_error(OutputFormat::Csv, e))
    }
}

impl KissBomParser for CsvFormatter {
    fn parse(&self, content: &str) -> Result<KissBom> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let packages = reader
            .deserialize::<Package>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Failed to parse KissBOM CSV: {}", e))?;
        Ok(KissBom::new(packages))
    }
}
