//! Interactive credential collection
//!
//! Every prompt loops until the input passes validation; invalid input is
//! reported through [`Terminal::message`] and never silently accepted.

use crate::error::Result;
use crate::platform::{RemoteValidator, is_valid_segment};
use secrecy::SecretString;

/// Line-oriented terminal capability
///
/// Abstracted so prompt logic can run against scripted input in tests.
pub trait Terminal {
    /// Print `prompt` and read one line of input
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print `prompt` and read one line with echo suppressed
    fn read_secret(&mut self, prompt: &str) -> Result<String>;

    /// Show an informational or error line
    fn message(&mut self, text: &str);
}

/// Source of a one-time passcode, asked at most once per token request
pub trait OtpSource {
    /// Obtain a 6-digit passcode
    fn one_time_code(&mut self) -> Result<String>;
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Validate a one-time passcode, returning the message to show on rejection
pub fn check_otp_code(code: &str) -> std::result::Result<(), &'static str> {
    if code.chars().count() != 6 {
        return Err("invalid 2FA code size");
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("2FA code must be digits only");
    }
    Ok(())
}

/// Collects username, password, visibility and passcode from a terminal
pub struct CredentialPrompter<'a> {
    terminal: &'a mut dyn Terminal,
    validator: &'a dyn RemoteValidator,
}

impl<'a> CredentialPrompter<'a> {
    /// Create a prompter over a terminal; usernames are checked with `validator`
    pub fn new(terminal: &'a mut dyn Terminal, validator: &'a dyn RemoteValidator) -> Self {
        Self {
            terminal,
            validator,
        }
    }

    /// Ask for a username until one exists on the remote service
    ///
    /// A failed lookup aborts the prompt with the transport error.
    pub fn prompt_username(&mut self) -> Result<String> {
        loop {
            let line = self.terminal.read_line("username")?;
            let username = strip_line_ending(&line);

            if is_valid_segment(username) && self.validator.username_exists(username)? {
                return Ok(username.to_string());
            }

            self.terminal.message("invalid username");
        }
    }

    /// Ask for a non-empty password
    pub fn prompt_password(&mut self) -> Result<SecretString> {
        loop {
            let password = self.terminal.read_secret("password")?;
            if !password.is_empty() {
                return Ok(SecretString::new(password));
            }
            self.terminal.message("password is empty");
        }
    }

    /// Ask for a 6-digit two-factor code
    pub fn prompt_2fa(&mut self) -> Result<String> {
        loop {
            let code = self
                .terminal
                .read_secret("two-factor authentication code")?;
            match check_otp_code(&code) {
                Ok(()) => return Ok(code),
                Err(reason) => self.terminal.message(reason),
            }
        }
    }

    /// Ask whether the project is public (`0`) or private (`1`)
    ///
    /// Returns `true` for public.
    pub fn prompt_project_visibility(&mut self) -> Result<bool> {
        self.terminal.message("[0]: public");
        self.terminal.message("[1]: private");

        loop {
            let line = self.terminal.read_line("repository visibility type")?;
            match strip_line_ending(&line) {
                "0" => return Ok(true),
                "1" => return Ok(false),
                _ => self.terminal.message("invalid input"),
            }
        }
    }
}

impl OtpSource for CredentialPrompter<'_> {
    fn one_time_code(&mut self) -> Result<String> {
        self.prompt_2fa()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_otp_code() {
        assert!(check_otp_code("123456").is_ok());
        assert_eq!(check_otp_code("12345"), Err("invalid 2FA code size"));
        assert_eq!(check_otp_code("1234567"), Err("invalid 2FA code size"));
        assert_eq!(check_otp_code("12a456"), Err("2FA code must be digits only"));
        assert_eq!(check_otp_code("12 456"), Err("2FA code must be digits only"));
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("alice\n"), "alice");
        assert_eq!(strip_line_ending("alice\r\n"), "alice");
        assert_eq!(strip_line_ending("alice"), "alice");
    }
}
