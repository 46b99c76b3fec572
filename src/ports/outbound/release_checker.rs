use crate::shared::Result;

/// ReleaseChecker port for looking up the latest published kissbom release
pub trait ReleaseChecker {
    /// Returns the tag of the latest release (for example `v0.2.0`)
    ///
    /// # Errors
    /// Returns an error if the release feed cannot be reached or parsed
    fn latest_release_tag(&self) -> Result<String>;
}
