//! Mock remote validator for testing
//!
//! These are test utilities - not all may be used in current tests.

#![allow(dead_code)]

use hub_bridge::error::{Error, Result};
use hub_bridge::platform::RemoteValidator;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// In-memory `RemoteValidator`
///
/// Features:
/// - Configurable known users and accessible (owner, project, token) triples
/// - Call tracking for verification
/// - Error injection for username lookups
#[derive(Default)]
pub struct MockValidator {
    users: HashSet<String>,
    accessible: HashSet<(String, String, String)>,
    username_calls: RefCell<Vec<String>>,
    project_calls: Cell<usize>,
    failing_username_lookups: Cell<usize>,
}

impl MockValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing user or organization
    pub fn with_user(mut self, name: &str) -> Self {
        self.users.insert(name.to_string());
        self
    }

    /// Grant `token` access to `owner/project`
    pub fn with_access(mut self, owner: &str, project: &str, token: &str) -> Self {
        self.accessible
            .insert((owner.to_string(), project.to_string(), token.to_string()));
        self
    }

    /// Fail the next `count` username lookups with an error
    pub fn fail_username_lookups(self, count: usize) -> Self {
        self.failing_username_lookups.set(count);
        self
    }

    /// Usernames looked up, in order
    pub fn username_calls(&self) -> Vec<String> {
        self.username_calls.borrow().clone()
    }

    /// Number of project access checks
    pub fn project_calls(&self) -> usize {
        self.project_calls.get()
    }
}

impl RemoteValidator for MockValidator {
    fn username_exists(&self, username: &str) -> Result<bool> {
        self.username_calls.borrow_mut().push(username.to_string());

        let failing = self.failing_username_lookups.get();
        if failing > 0 {
            self.failing_username_lookups.set(failing - 1);
            return Err(Error::Config("injected lookup failure".to_string()));
        }

        Ok(self.users.contains(username))
    }

    fn project_accessible(&self, owner: &str, project: &str, token: &str) -> Result<bool> {
        self.project_calls.set(self.project_calls.get() + 1);
        Ok(self.accessible.contains(&(
            owner.to_string(),
            project.to_string(),
            token.to_string(),
        )))
    }
}
