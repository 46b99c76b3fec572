use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a usage mistake apart from a failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The conversion finished and the output file was written
    Success = 0,
    /// Conversion error (decode failure, unsupported format, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for KissBOM conversion.
///
/// Every variant aborts the current conversion. Callers that need to branch on
/// the kind of failure can recover it from an `anyhow::Error` with
/// `downcast_ref::<KissbomError>()`.
#[derive(Debug, Error)]
pub enum KissbomError {
    #[error("Failed to decode CycloneDX document\nDetails: {details}\n\n💡 Hint: Please verify that the input is a CycloneDX SBOM in JSON encoding")]
    SourceDecode { details: String },

    #[error("Unsupported output format: {format}\n\n💡 Hint: Valid formats are json, yaml, csv, minimal and compatible")]
    UnsupportedFormat { format: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    Encode { format: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
