//! Remote service access
//!
//! Read-only existence/access checks plus the raw token-creation call.

mod github;

pub use github::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, GitHubClient, OTP_HEADER};

use crate::error::Result;

/// Whether `segment` can name a user, organization or project
///
/// Empty, `.` and `..` would be normalized away by URL parsing and hit a
/// different endpoint.
pub fn is_valid_segment(segment: &str) -> bool {
    !matches!(segment, "" | "." | "..")
}

/// Existence and access checks against the remote service
///
/// A `true`/`false` answer means the service responded; any non-200 status
/// is `false`. Transport failures are returned as errors instead.
pub trait RemoteValidator {
    /// Check that a user or organization exists
    fn username_exists(&self, username: &str) -> Result<bool>;

    /// Check that `token` can read `owner/project`
    ///
    /// A missing project and a token lacking permission both yield `false`.
    fn project_accessible(&self, owner: &str, project: &str, token: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_segment() {
        assert!(is_valid_segment("alice"));
        assert!(is_valid_segment("my.repo"));
        assert!(is_valid_segment("..."));
        assert!(!is_valid_segment(""));
        assert!(!is_valid_segment("."));
        assert!(!is_valid_segment(".."));
    }
}
