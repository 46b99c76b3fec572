/// Formatter adapters for the KissBOM output formats
mod compatible_formatter;
mod csv_formatter;
mod json_formatter;
mod minimal_formatter;
mod yaml_formatter;

pub use compatible_formatter::{CompatibleFormatter, CYCLONEDX_SCHEMA_URL};
pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use minimal_formatter::MinimalFormatter;
pub use yaml_formatter::YamlFormatter;

use crate::application::dto::OutputFormat;
use crate::shared::error::KissbomError;

/// Wraps a codec failure as `KissbomError::Encode` for the given format
fn encode_error(format: OutputFormat, details: impl std::fmt::Display) -> anyhow::Error {
    KissbomError::Encode {
        format: format.to_string(),
        details: details.to_string(),
    }
    .into()
}
