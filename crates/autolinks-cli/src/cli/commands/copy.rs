//! `autolinks copy <source>` – put the page's links on the clipboard.

use anyhow::Result;
use autolinks_core::clipboard::{
    copy_links, select_clipboard, ClipboardWriter, Osc52Clipboard,
};
use autolinks_core::config::AutolinksConfig;
use autolinks_core::links::extract_file_links;

use super::load;
use crate::cli::PageArgs;

/// Clipboard failures are logged, not returned: the command still exits 0.
pub async fn run_copy(cfg: &AutolinksConfig, args: &PageArgs, osc52: bool) -> Result<()> {
    let page = load(cfg, args).await?;
    let count = extract_file_links(&page).len();

    let writer: Result<Box<dyn ClipboardWriter>, _> = if osc52 {
        Ok(Box::new(Osc52Clipboard::stderr()))
    } else {
        select_clipboard(&cfg.clipboard)
    };
    let writer = match writer {
        Ok(w) => w,
        Err(e) => {
            tracing::warn!("clipboard unavailable: {e}");
            return Ok(());
        }
    };

    // The process must outlive the write, so wait for the completion signal.
    if copy_links(&page, writer).wait().await.is_ok() {
        println!("Copied {count} link(s) to the clipboard.");
    }
    Ok(())
}
