/// Network adapters for external API calls
mod github_release_checker;

pub use github_release_checker::GitHubReleaseChecker;
