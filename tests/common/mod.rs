//! Shared test helpers

#![allow(dead_code)]

mod mock_validator;
mod scripted_terminal;

pub use mock_validator::MockValidator;
pub use scripted_terminal::{FixedOtp, ScriptedTerminal};

use hub_bridge::types::ConfigurationRecord;

/// Basic auth header value for alice:hunter2
pub const ALICE_BASIC_AUTH: &str = "Basic YWxpY2U6aHVudGVyMg==";

/// Record produced for alice/proj with token `t1`
pub fn alice_record(token: &str) -> ConfigurationRecord {
    ConfigurationRecord {
        token: token.to_string(),
        owner: "alice".to_string(),
        project: "proj".to_string(),
    }
}
