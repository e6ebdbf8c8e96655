//! Core types for hub-bridge

use secrecy::SecretString;
use serde::Serialize;

/// Configuration key holding the access token
pub const KEY_TOKEN: &str = "token";
/// Configuration key holding the project owner
pub const KEY_OWNER: &str = "owner";
/// Configuration key holding the project name
pub const KEY_PROJECT: &str = "project";

/// Inputs supplied by the caller before any prompting
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct BridgeParams {
    /// Explicit project owner
    pub owner: Option<String>,
    /// Explicit project name
    pub project: Option<String>,
    /// Project web URL (`https://github.com/<owner>/<project>`)
    pub url: Option<String>,
    /// Pre-existing access token; skips the login flow when set
    pub token: Option<String>,
}

impl BridgeParams {
    fn non_empty(value: Option<&String>) -> Option<&str> {
        value.map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Explicit owner, if non-empty
    pub fn owner(&self) -> Option<&str> {
        Self::non_empty(self.owner.as_ref())
    }

    /// Explicit project, if non-empty
    pub fn project(&self) -> Option<&str> {
        Self::non_empty(self.project.as_ref())
    }

    /// Project URL, if non-empty
    pub fn url(&self) -> Option<&str> {
        Self::non_empty(self.url.as_ref())
    }

    /// Supplied token, if non-empty
    pub fn token(&self) -> Option<&str> {
        Self::non_empty(self.token.as_ref())
    }
}

/// The owner/project pair a bridge targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// User or organization owning the project
    pub owner: String,
    /// Project (repository) name
    pub project: String,
}

impl ProjectIdentity {
    /// Create a new identity
    pub fn new(owner: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            project: project.into(),
        }
    }
}

impl std::fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.project)
    }
}

/// Login credentials used to mint a token
///
/// Only lives for the duration of one provisioning call.
#[derive(Debug)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from a username and a password
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Permission grant requested for a new token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `user:email` - enough to read public projects and public emails
    UserEmail,
    /// `repo` - read/write on every private repository the user can reach
    Repo,
}

impl Scope {
    /// Scope for the chosen project visibility
    pub const fn for_visibility(is_public: bool) -> Self {
        if is_public { Self::UserEmail } else { Self::Repo }
    }

    /// Wire name of the scope
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserEmail => "user:email",
            Self::Repo => "repo",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of a token creation request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenRequest {
    /// Requested scopes
    pub scopes: Vec<String>,
    /// Human-readable label shown on the remote service
    pub note: String,
    /// Nonce distinguishing otherwise identical requests
    pub fingerprint: String,
}

/// A freshly created access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// The access token
    pub token: String,
    /// Note the token was created with
    pub note: String,
    /// Fingerprint of the request that succeeded
    pub fingerprint: String,
}

/// Validated bridge configuration: the sole output of a configure run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    /// Access token
    pub token: String,
    /// Project owner
    pub owner: String,
    /// Project name
    pub project: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_maps_to_broader_scope() {
        assert_eq!(Scope::for_visibility(false), Scope::Repo);
        assert_eq!(Scope::for_visibility(true), Scope::UserEmail);
        assert_eq!(Scope::Repo.to_string(), "repo");
        assert_eq!(Scope::UserEmail.to_string(), "user:email");
    }

    #[test]
    fn test_empty_params_are_absent() {
        let params = BridgeParams {
            owner: Some(String::new()),
            project: Some("proj".to_string()),
            url: None,
            token: Some(String::new()),
        };
        assert_eq!(params.owner(), None);
        assert_eq!(params.project(), Some("proj"));
        assert_eq!(params.url(), None);
        assert_eq!(params.token(), None);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("alice", SecretString::new("hunter2".to_string()));
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
