//! CLI command handlers, one file per subcommand.

mod completions;
mod copy;
mod inject;
mod list;
mod playlist;

pub use completions::run_completions;
pub use copy::run_copy;
pub use inject::run_inject;
pub use list::run_list;
pub use playlist::run_playlist;

use anyhow::Result;
use autolinks_core::config::AutolinksConfig;
use autolinks_core::page::{load_page, HtmlPage, PageSource};

use super::PageArgs;

/// Load the page named on the command line.
async fn load(cfg: &AutolinksConfig, args: &PageArgs) -> Result<HtmlPage> {
    let source = PageSource::parse(&args.source)?;
    load_page(&source, args.base_url.as_ref(), &cfg.fetch).await
}
