//! Configure command - resolve a project and provision its access token

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use crate::cli::terminal::StdTerminal;
use anstream::println;
use hub_bridge::Configurator;
use hub_bridge::error::Result;
use hub_bridge::store::ConfigStore;
use hub_bridge::types::BridgeParams;
use std::path::PathBuf;

/// Options for the configure command
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    /// Name the bridge is saved under
    pub name: String,
    /// Owner/project/URL/token supplied on the command line
    pub params: BridgeParams,
}

/// Run the configure command
pub fn run_configure(
    api_url: Option<&str>,
    store_path: Option<PathBuf>,
    options: &ConfigureOptions,
) -> Result<()> {
    let ctx = CommandContext::new(api_url, store_path)?;
    let mut terminal = StdTerminal;

    let record = Configurator::new(&ctx.client, &mut terminal)
        .with_url_pattern(ctx.pattern.clone())
        .configure(&options.params)?;

    // Nothing is written until every check above has passed
    ctx.store.save(&options.name, &record)?;

    println!();
    println!(
        "{} Bridge {} configured for {}",
        check(),
        options.name.emphasis(),
        format!("{}/{}", record.owner, record.project).accent()
    );
    println!(
        "{}",
        format!("Saved to {}", ctx.store.path().display()).muted()
    );

    Ok(())
}
