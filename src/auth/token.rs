//! Access token provisioning
//!
//! Token creation runs as a two-state machine: the first request carries no
//! passcode; a 401 carrying the OTP challenge header moves to `WithOtp`, and
//! the request is resent once. A second challenge ends the attempt.

use crate::auth::prompt::OtpSource;
use crate::error::{Error, Result};
use crate::platform::{GitHubClient, OTP_HEADER};
use crate::types::{Credentials, ProjectIdentity, Scope, TokenRecord, TokenRequest};
use rand::Rng;
use rand::distributions::Alphanumeric;
use reqwest::StatusCode;
use reqwest::blocking::Response;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, info};

/// Length of the request fingerprint
pub const FINGERPRINT_LEN: usize = 32;

/// Generate a request fingerprint
///
/// Only needs to avoid accidental collisions between requests.
pub fn random_fingerprint<R: Rng>(rng: &mut R) -> String {
    (0..FINGERPRINT_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Label attached to tokens created for `identity`
pub fn token_note(identity: &ProjectIdentity) -> String {
    format!("hub-bridge - {identity}")
}

/// Two-factor progress of one provisioning attempt
#[derive(Debug)]
enum TwoFactorState {
    NoOtp,
    WithOtp(SecretString),
}

impl TwoFactorState {
    fn code(&self) -> Option<&str> {
        match self {
            Self::NoOtp => None,
            Self::WithOtp(code) => Some(code.expose_secret().as_str()),
        }
    }
}

/// Classified answer of the authorization endpoint
#[derive(Debug)]
enum Reply {
    Created(String),
    OtpChallenge,
    Unauthorized(String),
    Other { status: u16, body: String },
}

impl Reply {
    fn from_response(response: Response) -> Result<Self> {
        let status = response.status();
        let challenged = response.headers().contains_key(OTP_HEADER);
        let body = response.text()?;

        Ok(match status {
            StatusCode::CREATED => Self::Created(body),
            StatusCode::UNAUTHORIZED if challenged => Self::OtpChallenge,
            StatusCode::UNAUTHORIZED => Self::Unauthorized(body),
            _ => Self::Other {
                status: status.as_u16(),
                body,
            },
        })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token: Option<String>,
}

/// Extract the token from a 201 response body
pub fn parse_token(body: &str) -> Result<String> {
    let parsed: TokenResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedTokenResponse(format!("{e}: {body}")))?;

    match parsed.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(Error::MalformedTokenResponse(body.to_string())),
    }
}

/// Creates scoped access tokens through the authorization API
pub struct TokenProvisioner<'a, R: Rng> {
    client: &'a GitHubClient,
    rng: R,
}

impl<'a, R: Rng> TokenProvisioner<'a, R> {
    /// Create a provisioner; `rng` supplies request fingerprints
    pub const fn new(client: &'a GitHubClient, rng: R) -> Self {
        Self { client, rng }
    }

    fn request(&mut self, note: &str, scope: Scope) -> TokenRequest {
        TokenRequest {
            scopes: vec![scope.as_str().to_string()],
            note: note.to_string(),
            fingerprint: random_fingerprint(&mut self.rng),
        }
    }

    /// Create a token, asking `otp` for a passcode if the account requires one
    ///
    /// At most two HTTP requests are made.
    pub fn create_token(
        &mut self,
        note: &str,
        credentials: &Credentials,
        scope: Scope,
        otp: &mut dyn OtpSource,
    ) -> Result<TokenRecord> {
        let mut state = TwoFactorState::NoOtp;

        loop {
            let request = self.request(note, scope);
            let response = self
                .client
                .post_authorization(credentials, state.code(), &request)?;
            let reply = Reply::from_response(response)?;

            state = match (state, reply) {
                (_, Reply::Created(body)) => {
                    let token = parse_token(&body)?;
                    info!(note, "token created");
                    return Ok(TokenRecord {
                        token,
                        note: request.note,
                        fingerprint: request.fingerprint,
                    });
                }
                (TwoFactorState::NoOtp, Reply::OtpChallenge) => {
                    debug!("two-factor authentication required");
                    TwoFactorState::WithOtp(SecretString::new(otp.one_time_code()?))
                }
                (TwoFactorState::WithOtp(_), Reply::OtpChallenge) => {
                    return Err(Error::AuthenticationFailure(
                        "two-factor authentication code rejected".to_string(),
                    ));
                }
                (_, Reply::Unauthorized(body)) => {
                    return Err(Error::AuthenticationFailure(body));
                }
                (_, Reply::Other { status, body }) => {
                    return Err(Error::TokenCreationFailed { status, body });
                }
            };
        }
    }
}
