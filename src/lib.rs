//! hub-bridge - access-token provisioning for GitHub issue bridges
//!
//! Resolves which project a bridge targets, obtains an access token (either
//! supplied or minted through an interactive username/password/2FA login) and
//! verifies the token can reach the project before handing back a
//! [`ConfigurationRecord`](types::ConfigurationRecord).

pub mod auth;
pub mod configure;
pub mod error;
pub mod identity;
pub mod platform;
pub mod settings;
pub mod store;
pub mod types;

pub use configure::Configurator;
pub use error::{Error, Result};
