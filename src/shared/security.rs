use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest SBOM the reader will load into memory (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than its
/// target. A path that does not exist passes; callers that need the file to
/// exist use [`validate_regular_file`].
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists, is not a symlink and is a regular file.
///
/// Returns the file size so the caller can check it against [`MAX_FILE_SIZE`]
/// without a second metadata lookup.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a bare output file name.
///
/// Names derived from SBOM metadata are untrusted: a publisher such as
/// `../../etc` must not move the output outside the chosen directory.
pub fn validate_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty() {
        anyhow::bail!("Output file name is empty");
    }

    if file_name.contains('/') || file_name.contains('\\') || file_name.contains('\0') {
        anyhow::bail!(
            "Invalid output file name \"{}\": path separators and NUL characters are not allowed",
            file_name.escape_default()
        );
    }

    if file_name == "." || file_name == ".." {
        anyhow::bail!("Invalid output file name \"{}\"", file_name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_missing_path_passes() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not-yet-written.json");

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "write");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_regular_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "12345").unwrap();

        assert_eq!(validate_regular_file(&file_path, "SBOM").unwrap(), 5);
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "SBOM");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/bom.json");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());

        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_name_accepts_metadata_name() {
        assert!(validate_file_name("acme-app_Acme Inc_2023-10-01T12:00:00Z.json").is_ok());
        assert!(validate_file_name("&*%\".json").is_ok());
    }

    #[test]
    fn test_validate_file_name_rejects_separators() {
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("../escape.json").is_err());
        assert!(validate_file_name("a\\b.json").is_err());
        assert!(validate_file_name("nul\0.json").is_err());
    }
}
