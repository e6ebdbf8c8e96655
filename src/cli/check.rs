//! Check command - validate a stored bridge

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use hub_bridge::error::{Error, Result};
use hub_bridge::platform::RemoteValidator;
use hub_bridge::store::ConfigStore;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Bridge name to check
    pub name: String,
    /// Only validate the stored keys, skip the network check
    pub offline: bool,
}

/// Run the check command
pub fn run_check(
    api_url: Option<&str>,
    store_path: Option<PathBuf>,
    options: &CheckOptions,
) -> Result<()> {
    let ctx = CommandContext::new(api_url, store_path)?;

    let record = ctx.store.load(&options.name)?.ok_or_else(|| {
        Error::Store(format!(
            "no bridge named {} in {}",
            options.name,
            ctx.store.path().display()
        ))
    })?;
    println!(
        "{} Bridge {} has token, owner and project",
        check(),
        options.name.emphasis()
    );

    if options.offline {
        return Ok(());
    }

    let target = format!("{}/{}", record.owner, record.project);
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Checking access to {}...", target.accent()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let accessible = ctx
        .client
        .project_accessible(&record.owner, &record.project, &record.token);

    match accessible {
        Ok(true) => {
            spinner.finish_with_message(format!("{} Token can reach {}", check(), target.accent()));
            Ok(())
        }
        Ok(false) => {
            spinner.finish_and_clear();
            Err(Error::ProjectInaccessible {
                owner: record.owner,
                project: record.project,
            })
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e)
        }
    }
}
