//! `autolinks playlist <source>` – save the page's links as a `.dpl` playlist.

use anyhow::Result;
use autolinks_core::config::AutolinksConfig;
use autolinks_core::playlist::download_playlist;
use autolinks_core::save::{DirectorySink, StdoutSink};
use std::path::PathBuf;

use super::load;
use crate::cli::PageArgs;

pub async fn run_playlist(
    cfg: &AutolinksConfig,
    args: &PageArgs,
    output_dir: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let page = load(cfg, args).await?;

    if stdout {
        download_playlist(&page, &StdoutSink)?;
        return Ok(());
    }

    let dir = match output_dir.or_else(|| cfg.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let saved = download_playlist(&page, &DirectorySink::new(dir))?;
    println!("Saved playlist: {}", saved.display());
    Ok(())
}
