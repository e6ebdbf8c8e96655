//! Error types for hub-bridge

use thiserror::Error;

/// Errors produced while configuring a bridge
#[derive(Debug, Error)]
pub enum Error {
    /// Project URL did not match the `<host>/<owner>/<project>` shape
    #[error("bad project url: {0}")]
    MalformedUrl(String),

    /// Owner does not exist on the remote service
    #[error("invalid parameter owner: {0}")]
    InvalidOwner(String),

    /// Network or timeout failure on an HTTP call
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Basic auth rejected, or one-time passcode rejected after the retry
    #[error("authentication failed: {0}")]
    AuthenticationFailure(String),

    /// Token creation succeeded but the body carried no usable token
    #[error("no token found in response: {0}")]
    MalformedTokenResponse(String),

    /// Token creation returned an unexpected status
    #[error("error creating token {status}: {body}")]
    TokenCreationFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Token obtained but it cannot reach the project
    #[error("project {owner}/{project} doesn't exist or authentication token has a wrong scope")]
    ProjectInaccessible {
        /// Project owner
        owner: String,
        /// Project name
        project: String,
    },

    /// Stored configuration lacks a required key
    #[error("missing {0} key")]
    MissingConfigurationKey(String),

    /// Reading from the terminal failed
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Reading or writing a store/settings file failed
    #[error("store error: {0}")]
    Store(String),

    /// Invalid settings value
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
