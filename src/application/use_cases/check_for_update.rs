use crate::ports::outbound::ReleaseChecker;
use log::debug;

/// CheckForUpdateUseCase - Tells whether a newer kissbom release exists
///
/// The check is advisory: lookup failures are logged and treated as "no
/// update", never as an error.
pub struct CheckForUpdateUseCase<RC> {
    release_checker: RC,
    current_version: String,
}

impl<RC: ReleaseChecker> CheckForUpdateUseCase<RC> {
    pub fn new(release_checker: RC, current_version: impl Into<String>) -> Self {
        Self {
            release_checker,
            current_version: current_version.into(),
        }
    }

    /// Returns the latest release tag when it is not the running version
    pub fn execute(&self) -> Option<String> {
        let latest = match self.release_checker.latest_release_tag() {
            Ok(tag) => tag,
            Err(e) => {
                debug!("version check failed: {}", e);
                return None;
            }
        };

        if latest.is_empty() || latest.contains(&self.current_version) {
            None
        } else {
            Some(latest)
        }
    }
}
