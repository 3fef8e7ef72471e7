//! `autolinks inject <source>` – render the page with the action bar attached.

use anyhow::{Context, Result};
use autolinks_core::actions::{initialize_page_actions, InitOutcome};
use autolinks_core::config::AutolinksConfig;
use std::io::Write;
use std::path::Path;

use super::load;
use crate::cli::PageArgs;

pub async fn run_inject(
    cfg: &AutolinksConfig,
    args: &PageArgs,
    output: Option<&Path>,
) -> Result<()> {
    let mut page = load(cfg, args).await?;

    match initialize_page_actions(&mut page) {
        InitOutcome::Attached => tracing::info!("action bar attached"),
        InitOutcome::NoHeading => tracing::info!("page has no heading; writing it unchanged"),
        InitOutcome::AlreadyAttached => tracing::info!("page already carries the action bar"),
    }

    let html = page.render();
    match output {
        Some(path) => {
            std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(html.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
