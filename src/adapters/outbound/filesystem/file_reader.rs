use crate::ports::outbound::SbomReader;
use crate::shared::error::KissbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOMs from the file system
///
/// Before reading, the path is checked to be a regular file (not a symlink)
/// no larger than `MAX_FILE_SIZE`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let file_size = validate_regular_file(path, "SBOM")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read SBOM: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(KissbomError::FileRead {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        self.safe_read_file(path).map_err(|e| {
            KissbomError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_sbom_success() {
        let temp_dir = TempDir::new().unwrap();
        let sbom_path = temp_dir.path().join("bom.json");
        fs::write(&sbom_path, r#"{"bomFormat": "CycloneDX"}"#).unwrap();

        let content = FileSystemReader::new().read_sbom(&sbom_path).unwrap();

        assert_eq!(content, br#"{"bomFormat": "CycloneDX"}"#);
    }

    #[test]
    fn test_read_sbom_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let result =
            FileSystemReader::new().read_sbom(&temp_dir.path().join("nonexistent_file.json"));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KissbomError>(),
            Some(KissbomError::FileRead { .. })
        ));
        assert!(err.to_string().contains("File does not exist"));
    }

    #[test]
    fn test_read_sbom_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().read_sbom(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_sbom_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("bom.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_sbom(&link);

        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
