//! Loading a listing page from an HTTP(S) URL or a local file.
//!
//! HTTP uses the curl crate (libcurl). The curl transfer blocks, so
//! [`load_page`] runs it on the blocking pool.

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use super::HtmlPage;
use crate::config::FetchConfig;

/// Where a page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Url(Url),
    File(PathBuf),
}

impl PageSource {
    /// `http://` and `https://` arguments are URLs; anything else is a path.
    pub fn parse(arg: &str) -> Result<Self> {
        let lower = arg.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(arg.trim()).with_context(|| format!("invalid URL: {arg}"))?;
            return Ok(PageSource::Url(url));
        }
        Ok(PageSource::File(PathBuf::from(arg)))
    }
}

/// Raw page body and the URL it was served from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub body: String,
}

/// GET `url` and return the body. Follows redirects; the final URL is
/// reported as the page URL. Non-2xx responses are errors.
///
/// Runs in the current thread; call from `spawn_blocking` in async code.
pub fn fetch_url(url: &Url, cfg: &FetchConfig) -> Result<FetchedPage> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.useragent(&cfg.user_agent)?;
    // Empty string: accept every encoding libcurl supports.
    easy.accept_encoding("")?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {url} failed"))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        bail!("GET {} returned HTTP {}", url, code);
    }

    let effective = easy
        .effective_url()?
        .and_then(|u| Url::parse(u).ok())
        .unwrap_or_else(|| url.clone());
    if effective != *url {
        tracing::debug!(from = %url, to = %effective, "page redirected");
    }

    Ok(FetchedPage {
        url: effective,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Read a saved listing from disk. Its page URL is the `file://` URL of the
/// canonical path.
pub fn read_file(path: &Path) -> Result<FetchedPage> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let canonical = std::fs::canonicalize(path)
        .with_context(|| format!("canonicalize {}", path.display()))?;
    let url = Url::from_file_path(&canonical)
        .map_err(|_| anyhow!("cannot express {} as a file URL", canonical.display()))?;
    Ok(FetchedPage {
        url,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Load and parse the page at `source`.
///
/// `base_url`, when given, replaces the page URL for link resolution and
/// playlist naming (useful for listings saved to disk).
pub async fn load_page(
    source: &PageSource,
    base_url: Option<&Url>,
    cfg: &FetchConfig,
) -> Result<HtmlPage> {
    let fetched = match source {
        PageSource::Url(url) => {
            let url = url.clone();
            let cfg = cfg.clone();
            tokio::task::spawn_blocking(move || fetch_url(&url, &cfg))
                .await
                .context("page fetch task failed")??
        }
        PageSource::File(path) => read_file(path)?,
    };

    let url = base_url.cloned().unwrap_or(fetched.url);
    tracing::debug!(%url, bytes = fetched.body.len(), "page loaded");
    Ok(HtmlPage::parse(&fetched.body, url))
}
