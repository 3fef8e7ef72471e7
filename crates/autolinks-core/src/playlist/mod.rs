//! DAUMPLAYLIST export.
//!
//! Format: a `DAUMPLAYLIST` header line, then one `<n>*file*<url>` line per
//! link with `n` counting from 1. Every line ends in `\n`. Embedded `"` are
//! doubled.

mod name;

pub use name::{directory_name, playlist_filename, to_kebab_case, DEFAULT_BASENAME};

use anyhow::Result;
use std::path::PathBuf;

use crate::links::{extract_file_links, FileLink};
use crate::page::PageDocument;
use crate::save::DownloadSink;

pub const PLAYLIST_HEADER: &str = "DAUMPLAYLIST";
pub const PLAYLIST_EXTENSION: &str = "dpl";
pub const PLAYLIST_MIME: &str = "application/octet-stream;charset=utf-8";

/// A playlist ready to be handed to a [`DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDownload {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

/// Double every `"` in `s`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\"\"")
}

/// Build the playlist payload for `links`.
pub fn build_playlist(links: &[FileLink]) -> String {
    let mut content = String::with_capacity(16 + links.len() * 64);
    content.push_str(PLAYLIST_HEADER);
    content.push('\n');
    for (index, link) in links.iter().enumerate() {
        // The `file` line carries only the URL; link text is not written.
        content.push_str(&format!("{}*file*{}\n", index + 1, escape_quotes(&link.href)));
    }
    content
}

/// Rescan `page` and format its playlist under the derived filename.
pub fn prepare_playlist<P: PageDocument + ?Sized>(page: &P) -> PlaylistDownload {
    let links = extract_file_links(page);
    PlaylistDownload {
        filename: playlist_filename(page.url()),
        mime: PLAYLIST_MIME,
        content: build_playlist(&links),
    }
}

/// Export the playlist of `page` through `sink`; returns where it landed.
pub fn download_playlist<P, S>(page: &P, sink: &S) -> Result<PathBuf>
where
    P: PageDocument + ?Sized,
    S: DownloadSink + ?Sized,
{
    let download = prepare_playlist(page);
    let saved = sink.save(&download)?;
    tracing::info!(
        filename = %download.filename,
        bytes = download.content.len(),
        "playlist saved to {}",
        saved.display()
    );
    Ok(saved)
}
