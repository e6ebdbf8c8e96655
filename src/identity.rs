//! Owner/project resolution
//!
//! Explicit parameters win, then a project URL, then an interactive prompt.
//! Whatever the source, the owner must exist on the remote service.

use crate::auth::Terminal;
use crate::error::{Error, Result};
use crate::platform::{RemoteValidator, is_valid_segment};
use crate::types::{BridgeParams, ProjectIdentity};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Default web host projects are linked from
pub const DEFAULT_WEB_HOST: &str = "github.com";

static DEFAULT_PATTERN: LazyLock<UrlPattern> = LazyLock::new(|| {
    UrlPattern::new(DEFAULT_WEB_HOST).expect("default host pattern is a valid regex")
});

/// Extracts `<owner>/<project>` following a web host in a URL
#[derive(Debug, Clone)]
pub struct UrlPattern {
    host: String,
    regex: Regex,
}

impl UrlPattern {
    /// Build the pattern for `host` (e.g. `github.com`)
    pub fn new(host: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"{}/([^/]+)/([^/?#]+)", regex::escape(host)))
            .map_err(|e| Error::Config(format!("invalid web host {host}: {e}")))?;
        Ok(Self {
            host: host.to_string(),
            regex,
        })
    }

    /// Host this pattern matches
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Split a project URL into owner and project
    ///
    /// A trailing `.git` on the project segment is dropped.
    pub fn split(&self, url: &str) -> Result<ProjectIdentity> {
        let captures = self
            .regex
            .captures(url)
            .ok_or_else(|| Error::MalformedUrl(url.to_string()))?;

        let owner = &captures[1];
        let project = captures[2].strip_suffix(".git").unwrap_or(&captures[2]);
        if !is_valid_segment(owner) || !is_valid_segment(project) {
            return Err(Error::MalformedUrl(url.to_string()));
        }

        Ok(ProjectIdentity::new(owner, project))
    }
}

impl Default for UrlPattern {
    fn default() -> Self {
        DEFAULT_PATTERN.clone()
    }
}

/// Split a `github.com` project URL into owner and project
pub fn split_url(url: &str) -> Result<ProjectIdentity> {
    DEFAULT_PATTERN.split(url)
}

/// Resolves which project a bridge targets
pub struct IdentityResolver<'a> {
    terminal: &'a mut dyn Terminal,
    validator: &'a dyn RemoteValidator,
    pattern: &'a UrlPattern,
}

impl<'a> IdentityResolver<'a> {
    /// Create a resolver
    pub fn new(
        terminal: &'a mut dyn Terminal,
        validator: &'a dyn RemoteValidator,
        pattern: &'a UrlPattern,
    ) -> Self {
        Self {
            terminal,
            validator,
            pattern,
        }
    }

    /// Resolve the project identity and check that its owner exists
    pub fn resolve(&mut self, params: &BridgeParams) -> Result<ProjectIdentity> {
        let identity = if let (Some(owner), Some(project)) = (params.owner(), params.project()) {
            ProjectIdentity::new(owner, project)
        } else if let Some(url) = params.url() {
            self.pattern.split(url)?
        } else {
            self.prompt_url()?
        };
        debug!(%identity, "resolved project");

        if !self.validator.username_exists(&identity.owner)? {
            return Err(Error::InvalidOwner(identity.owner));
        }

        Ok(identity)
    }

    /// Ask for a project URL until one parses
    ///
    /// Only the URL shape is checked here.
    pub fn prompt_url(&mut self) -> Result<ProjectIdentity> {
        let prompt = format!("{} project URL", self.pattern.host());

        loop {
            let line = self.terminal.read_line(&prompt)?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                self.terminal.message("URL is empty");
                continue;
            }

            match self.pattern.split(line) {
                Ok(identity) => return Ok(identity),
                Err(e) => self.terminal.message(&e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_https_url() {
        let identity = split_url("https://github.com/alice/proj").unwrap();
        assert_eq!(identity, ProjectIdentity::new("alice", "proj"));
    }

    #[test]
    fn test_split_url_with_extra_segments() {
        let identity = split_url("https://github.com/alice/proj/issues/3").unwrap();
        assert_eq!(identity, ProjectIdentity::new("alice", "proj"));
    }

    #[test]
    fn test_split_url_strips_git_suffix() {
        let identity = split_url("git@github.com/alice/proj.git").unwrap();
        assert_eq!(identity.project, "proj");
    }

    #[test]
    fn test_split_url_rejects_other_hosts() {
        assert!(matches!(
            split_url("https://gitlab.com/alice/proj"),
            Err(Error::MalformedUrl(_))
        ));
        assert!(matches!(
            split_url("https://github.com/alice"),
            Err(Error::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_split_url_rejects_dot_segments() {
        for url in [
            "https://github.com/../proj",
            "https://github.com/./proj",
            "https://github.com/alice/..",
            "https://github.com/alice/.git",
        ] {
            assert!(
                matches!(split_url(url), Err(Error::MalformedUrl(_))),
                "url: {url}"
            );
        }
    }

    #[test]
    fn test_custom_host_pattern() {
        let pattern = UrlPattern::new("ghe.corp.example").unwrap();
        let identity = pattern.split("https://ghe.corp.example/team/tool").unwrap();
        assert_eq!(identity, ProjectIdentity::new("team", "tool"));
        assert!(pattern.split("https://github.com/team/tool").is_err());
    }
}
