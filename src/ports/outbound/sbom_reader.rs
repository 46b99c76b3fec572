use crate::shared::Result;
use std::path::Path;

/// SbomReader port for reading the source SBOM
///
/// This port abstracts the byte store the CycloneDX document is read from.
pub trait SbomReader {
    /// Reads the raw bytes of the SBOM at `path`
    ///
    /// # Errors
    /// Returns `KissbomError::FileRead` if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;
}
