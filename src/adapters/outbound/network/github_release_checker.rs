use crate::ports::outbound::ReleaseChecker;
use crate::shared::Result;
use serde::Deserialize;
use std::time::Duration;

/// GitHub API endpoint for the latest kissbom release
const LATEST_RELEASE_URL: &str =
    "https://api.github.com/repos/devops-kung-fu/kissbom/releases/latest";

/// The version check must never hold up a conversion for long
const REQUEST_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
}

/// GitHubReleaseChecker adapter for the GitHub releases API
///
/// Uses a blocking reqwest client: the check runs once, before the
/// conversion, on the main thread.
pub struct GitHubReleaseChecker {
    client: reqwest::blocking::Client,
    url: String,
}

impl GitHubReleaseChecker {
    /// Creates a checker against the public kissbom repository
    pub fn new() -> Result<Self> {
        Self::with_url(LATEST_RELEASE_URL.to_string())
    }

    /// Creates a checker against another releases endpoint
    pub fn with_url(url: String) -> Result<Self> {
        let user_agent = format!("kissbom/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, url })
    }
}

impl ReleaseChecker for GitHubReleaseChecker {
    fn latest_release_tag(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {}", response.status());
        }

        let release: GitHubRelease = response.json()?;
        Ok(release.tag_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_checker_creation() {
        assert!(GitHubReleaseChecker::new().is_ok());
    }

    #[test]
    fn test_release_checker_unreachable_endpoint() {
        let checker =
            GitHubReleaseChecker::with_url("http://127.0.0.1:9/releases/latest".to_string())
                .unwrap();
        assert!(checker.latest_release_tag().is_err());
    }

    #[test]
    fn test_release_payload_decoding() {
        let release: GitHubRelease =
            serde_json::from_str(r#"{"tag_name": "v0.2.0", "name": "v0.2.0", "draft": false}"#)
                .unwrap();
        assert_eq!(release.tag_name, "v0.2.0");
    }
}
