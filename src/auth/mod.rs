//! Credential collection and token provisioning
//!
//! Credentials are only held for the duration of a token request.

mod prompt;
mod token;

pub use prompt::{CredentialPrompter, OtpSource, Terminal, check_otp_code};
pub use token::{FINGERPRINT_LEN, TokenProvisioner, parse_token, random_fingerprint, token_note};
