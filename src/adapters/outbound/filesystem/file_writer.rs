use crate::ports::outbound::OutputWriter;
use crate::shared::error::KissbomError;
use crate::shared::security::{validate_file_name, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing converted KissBOMs to files
///
/// The file name must be a bare name: metadata-derived names containing path
/// separators are rejected rather than creating files outside `output_dir`.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: PathBuf, details: impl ToString) -> anyhow::Error {
        KissbomError::FileWrite {
            path,
            details: details.to_string(),
        }
        .into()
    }

    /// Validates that the output directory exists before writing
    fn validate_output_dir(output_dir: &Path, output_path: &Path) -> Result<()> {
        if output_dir != Path::new("") && !output_dir.is_dir() {
            return Err(Self::write_error(
                output_path.to_path_buf(),
                format!("Output directory does not exist: {}", output_dir.display()),
            ));
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for FileSystemWriter {
    fn write_output(&self, output_dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        let output_path = output_dir.join(file_name);

        validate_file_name(file_name).map_err(|e| Self::write_error(output_path.clone(), e))?;
        Self::validate_output_dir(output_dir, &output_path)?;
        validate_not_symlink(&output_path, "write")
            .map_err(|e| Self::write_error(output_path.clone(), e))?;

        fs::write(&output_path, content).map_err(|e| Self::write_error(output_path.clone(), e))?;

        Ok(output_path)
    }
}
