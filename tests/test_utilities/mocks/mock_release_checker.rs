use kissbom::prelude::*;

/// Mock ReleaseChecker returning a fixed tag, or failing
pub struct MockReleaseChecker {
    pub tag: Option<String>,
}

impl MockReleaseChecker {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
        }
    }

    pub fn unreachable() -> Self {
        Self { tag: None }
    }
}

impl ReleaseChecker for MockReleaseChecker {
    fn latest_release_tag(&self) -> Result<String> {
        match &self.tag {
            Some(tag) => Ok(tag.clone()),
            None => anyhow::bail!("Mock network failure"),
        }
    }
}
