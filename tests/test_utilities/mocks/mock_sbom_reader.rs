use kissbom::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub content: Vec<u8>,
    pub should_fail: bool,
}

impl MockSbomReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.as_bytes().to_vec(),
            should_fail: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        if self.should_fail {
            return Err(KissbomError::FileRead {
                path: path.to_path_buf(),
                details: "Mock read failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
