//! End-to-end bridge configuration
//!
//! Resolves the project, obtains a token (supplied, or minted through an
//! interactive login) and confirms the token reaches the project. Any failure
//! aborts the run; a [`ConfigurationRecord`] is only returned once both the
//! owner and the project access have been confirmed.

use crate::auth::{CredentialPrompter, Terminal, TokenProvisioner, token_note};
use crate::error::{Error, Result};
use crate::identity::{IdentityResolver, UrlPattern};
use crate::platform::{GitHubClient, RemoteValidator};
use crate::types::{
    BridgeParams, ConfigurationRecord, Credentials, ProjectIdentity, Scope, TokenRecord,
};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

const SCOPE_NOTICE: &[&str] = &[
    "",
    "hub-bridge will now generate an access token in your GitHub profile. Your credentials are not stored and are only used to generate the token. The token is stored in the bridge configuration.",
    "",
    "Depending on your configuration the token will have one of the following scopes:",
    "  - 'user:email': to be able to read public-only users email",
    "  - 'repo'      : to be able to read private repositories",
    "",
];

/// Orchestrates identity resolution, token provisioning and access checks
pub struct Configurator<'a, R: Rng> {
    client: &'a GitHubClient,
    terminal: &'a mut dyn Terminal,
    pattern: UrlPattern,
    rng: R,
}

impl<'a> Configurator<'a, StdRng> {
    /// Create a configurator seeded from OS entropy
    pub fn new(client: &'a GitHubClient, terminal: &'a mut dyn Terminal) -> Self {
        Self::with_rng(client, terminal, StdRng::from_entropy())
    }
}

impl<'a, R: Rng> Configurator<'a, R> {
    /// Create a configurator with an explicit fingerprint generator
    pub fn with_rng(client: &'a GitHubClient, terminal: &'a mut dyn Terminal, rng: R) -> Self {
        Self {
            client,
            terminal,
            pattern: UrlPattern::default(),
            rng,
        }
    }

    /// Match project URLs against a different web host
    #[must_use]
    pub fn with_url_pattern(mut self, pattern: UrlPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Run the whole configuration flow
    pub fn configure(&mut self, params: &BridgeParams) -> Result<ConfigurationRecord> {
        let identity =
            IdentityResolver::new(&mut *self.terminal, self.client, &self.pattern).resolve(params)?;

        let token = match params.token() {
            Some(token) => token.to_string(),
            None => self.provision(&identity)?.token,
        };

        if !self
            .client
            .project_accessible(&identity.owner, &identity.project, &token)?
        {
            return Err(Error::ProjectInaccessible {
                owner: identity.owner,
                project: identity.project,
            });
        }

        info!(%identity, "bridge configured");
        Ok(ConfigurationRecord {
            token,
            owner: identity.owner,
            project: identity.project,
        })
    }

    /// Log in interactively and mint a token for `identity`
    fn provision(&mut self, identity: &ProjectIdentity) -> Result<TokenRecord> {
        for line in SCOPE_NOTICE {
            self.terminal.message(line);
        }

        let mut prompter = CredentialPrompter::new(&mut *self.terminal, self.client);
        let is_public = prompter.prompt_project_visibility()?;
        let username = prompter.prompt_username()?;
        let password = prompter.prompt_password()?;

        let credentials = Credentials::new(username, password);
        let scope = Scope::for_visibility(is_public);
        let note = token_note(identity);

        TokenProvisioner::new(self.client, &mut self.rng).create_token(
            &note,
            &credentials,
            scope,
            &mut prompter,
        )
    }
}
