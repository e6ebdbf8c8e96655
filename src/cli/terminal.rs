//! Interactive terminal backed by dialoguer

use anstream::println;
use dialoguer::{Input, Password};
use hub_bridge::auth::Terminal;
use hub_bridge::error::{Error, Result};

/// Reads prompts from the controlling terminal
///
/// Validation is left to the prompter, so empty input is let through here.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Terminal(format!("Failed to read input: {e}")))
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| Error::Terminal(format!("Failed to read secret input: {e}")))
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}
