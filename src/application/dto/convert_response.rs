use std::path::PathBuf;

/// ConvertedOutput - The encoded KissBOM and the file name it belongs under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedOutput {
    pub content: String,
    pub file_name: String,
    pub package_count: usize,
}

/// ConvertResponse - Result record of a completed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResponse {
    /// File name the KissBOM was saved as
    pub output_file_name: String,
    /// Full path of the written file
    pub output_path: PathBuf,
    /// Number of packages in the KissBOM
    pub package_count: usize,
    pub bytes_written: usize,
}
