use kissbom::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock OutputWriter that keeps written files in memory
#[derive(Default, Clone)]
pub struct MockOutputWriter {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    pub should_fail: bool,
}

impl MockOutputWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Content written to `path`, as UTF-8
    pub fn content_of(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl OutputWriter for MockOutputWriter {
    fn write_output(&self, output_dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = output_dir.join(file_name);
        if self.should_fail {
            return Err(KissbomError::FileWrite {
                path,
                details: "Mock write failure".to_string(),
            }
            .into());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.clone(), content.to_vec());
        Ok(path)
    }
}
