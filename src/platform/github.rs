//! GitHub REST v3 client

use crate::error::{Error, Result};
use crate::platform::{RemoteValidator, is_valid_segment};
use crate::types::{Credentials, TokenRequest};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Header carrying (and requesting) the one-time passcode
pub const OTP_HEADER: &str = "X-GitHub-OTP";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Blocking GitHub client
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a client for the public GitHub API
    pub fn new() -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a client for a custom API endpoint (GitHub Enterprise, tests)
    pub fn with_api_url(api_url: &str) -> Result<Self> {
        let parsed = Url::parse(api_url)
            .map_err(|e| Error::Config(format!("invalid API url {api_url}: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("hub-bridge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to, without trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, segments: &[&str]) -> String {
        let path: Vec<_> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!("{}/{}", self.api_url, path.join("/"))
    }

    /// POST a token creation request with basic auth
    ///
    /// Returns the raw response; status interpretation belongs to the caller.
    pub(crate) fn post_authorization(
        &self,
        credentials: &Credentials,
        otp_code: Option<&str>,
        body: &TokenRequest,
    ) -> Result<Response> {
        let url = self.endpoint(&["authorizations"]);
        debug!(username = %credentials.username, with_otp = otp_code.is_some(), "requesting token");

        let mut request = self
            .http
            .post(&url)
            .basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            )
            .json(body);

        if let Some(code) = otp_code {
            request = request.header(OTP_HEADER, code);
        }

        let response = request.send()?;
        debug!(status = %response.status(), "token request answered");
        Ok(response)
    }
}

impl RemoteValidator for GitHubClient {
    fn username_exists(&self, username: &str) -> Result<bool> {
        if !is_valid_segment(username) {
            debug!(username, "rejected username without lookup");
            return Ok(false);
        }

        let url = self.endpoint(&["users", username]);
        let response = self.http.get(&url).send()?;

        let exists = response.status() == StatusCode::OK;
        debug!(username, status = %response.status(), exists, "checked username");
        Ok(exists)
    }

    fn project_accessible(&self, owner: &str, project: &str, token: &str) -> Result<bool> {
        if !is_valid_segment(owner) || !is_valid_segment(project) {
            debug!(owner, project, "rejected project path without lookup");
            return Ok(false);
        }

        let url = self.endpoint(&["repos", owner, project]);
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("token {token}"))
            .send()?;

        // 404 and 401/403 all collapse to false
        let accessible = response.status() == StatusCode::OK;
        debug!(owner, project, status = %response.status(), accessible, "checked project access");
        Ok(accessible)
    }
}
