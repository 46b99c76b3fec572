use crate::shared::Result;
use std::path::{Path, PathBuf};

/// OutputWriter port for storing the converted KissBOM
///
/// This port abstracts the byte store the encoded output is written to.
pub trait OutputWriter {
    /// Writes `content` as `file_name` inside `output_dir`
    ///
    /// # Returns
    /// The full path of the written file
    ///
    /// # Errors
    /// Returns `KissbomError::FileWrite` if:
    /// - The file name is not valid for the store
    /// - The output directory does not exist
    /// - Writing fails due to permissions or I/O errors
    fn write_output(&self, output_dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf>;
}
