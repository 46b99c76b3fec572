use super::OutputFormat;
use std::path::PathBuf;

/// Base name used when the SBOM carries no subject metadata
pub const DEFAULT_FALLBACK_NAME: &str = "kissbom";

/// ConvertRequest - Request DTO for the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path of the CycloneDX JSON document to convert
    pub input_path: PathBuf,
    /// Requested output format
    pub format: OutputFormat,
    /// Base name used when the document has no `metadata.component`
    pub fallback_name: String,
    /// Directory the output file is written to
    pub output_dir: PathBuf,
}

impl ConvertRequest {
    pub fn new(
        input_path: PathBuf,
        format: OutputFormat,
        fallback_name: String,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            input_path,
            format,
            fallback_name,
            output_dir,
        }
    }

    /// Request with the default fallback name, writing to the current directory
    pub fn with_defaults(input_path: PathBuf, format: OutputFormat) -> Self {
        Self::new(
            input_path,
            format,
            DEFAULT_FALLBACK_NAME.to_string(),
            PathBuf::from("."),
        )
    }
}
