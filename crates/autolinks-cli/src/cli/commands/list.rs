//! `autolinks list <source>` – print the file links of a page.

use anyhow::Result;
use autolinks_core::config::AutolinksConfig;
use autolinks_core::links::extract_file_links;

use super::load;
use crate::cli::PageArgs;

pub async fn run_list(cfg: &AutolinksConfig, args: &PageArgs, json: bool) -> Result<()> {
    let page = load(cfg, args).await?;
    let links = extract_file_links(&page);

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else if links.is_empty() {
        println!("No file links found.");
    } else {
        for link in links {
            println!("{}\t{}", link.text, link.href);
        }
    }
    Ok(())
}
