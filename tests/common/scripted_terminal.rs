//! Scripted terminal for driving prompt loops in tests

#![allow(dead_code)]

use hub_bridge::auth::{OtpSource, Terminal};
use hub_bridge::error::{Error, Result};
use std::collections::VecDeque;

/// `Terminal` fed from fixed input queues
///
/// Running out of input is an error, so a prompt loop that never accepts
/// its input fails the test instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    lines: VecDeque<String>,
    secrets: VecDeque<String>,
    /// Prompts shown, in order (secret prompts prefixed with `secret:`)
    pub prompts: Vec<String>,
    /// Messages shown, in order
    pub messages: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue plain line input
    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(ToString::to_string));
        self
    }

    /// Queue echo-suppressed input
    pub fn with_secrets(mut self, secrets: &[&str]) -> Self {
        self.secrets.extend(secrets.iter().map(ToString::to_string));
        self
    }

    /// Whether every queued input was consumed
    pub fn is_drained(&self) -> bool {
        self.lines.is_empty() && self.secrets.is_empty()
    }

    /// Count messages equal to `text`
    pub fn message_count(&self, text: &str) -> usize {
        self.messages.iter().filter(|m| *m == text).count()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines
            .pop_front()
            .ok_or_else(|| Error::Terminal(format!("no scripted line for {prompt}")))
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(format!("secret:{prompt}"));
        self.secrets
            .pop_front()
            .ok_or_else(|| Error::Terminal(format!("no scripted secret for {prompt}")))
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// `OtpSource` returning a fixed code and counting requests
#[derive(Debug)]
pub struct FixedOtp {
    code: String,
    pub calls: usize,
}

impl FixedOtp {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            calls: 0,
        }
    }
}

impl OtpSource for FixedOtp {
    fn one_time_code(&mut self) -> Result<String> {
        self.calls += 1;
        Ok(self.code.clone())
    }
}
