//! Copy a page's file links to the clipboard.
//!
//! Two interchangeable [`ClipboardWriter`] strategies: a native clipboard
//! utility when one is usable ([`CommandClipboard`]), otherwise the OSC 52
//! terminal escape ([`Osc52Clipboard`]). [`select_clipboard`] makes that
//! choice. [`copy_links`] does not block the caller and returns a
//! [`CopyHandle`] that may be awaited or dropped.

mod command;
mod osc52;

pub use command::CommandClipboard;
pub use osc52::Osc52Clipboard;

use std::io;
use std::process::ExitStatus;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::{ClipboardBackend, ClipboardConfig};
use crate::links::{extract_file_links, FileLink};
use crate::page::PageDocument;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard utility available")]
    NoBackend,
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("clipboard I/O: {0}")]
    Io(#[from] io::Error),
    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
    #[error("clipboard task did not complete: {0}")]
    Task(String),
}

/// Something that can put text on a clipboard.
pub trait ClipboardWriter: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Box<W> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// Clipboard payload: hrefs joined by `\n`, no trailing newline.
pub fn clipboard_text(links: &[FileLink]) -> String {
    links
        .iter()
        .map(|l| l.href.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pick the clipboard strategy for `cfg`.
///
/// `auto` prefers a native utility (configured command, else one found on
/// PATH for the current session) and falls back to OSC 52 on stderr.
pub fn select_clipboard(
    cfg: &ClipboardConfig,
) -> Result<Box<dyn ClipboardWriter>, ClipboardError> {
    let native = || match cfg.command.as_deref() {
        Some(argv) => CommandClipboard::from_argv(argv),
        None => CommandClipboard::detect(),
    };

    let writer: Box<dyn ClipboardWriter> = match cfg.backend {
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::stderr()),
        ClipboardBackend::Command => Box::new(native().ok_or(ClipboardError::NoBackend)?),
        ClipboardBackend::Auto => match native() {
            Some(cmd) => Box::new(cmd),
            None => Box::new(Osc52Clipboard::stderr()),
        },
    };
    tracing::debug!(backend = writer.name(), "clipboard selected");
    Ok(writer)
}

/// Completion signal of a [`copy_links`] call.
///
/// Dropping it leaves the write running in the background.
#[derive(Debug)]
pub struct CopyHandle {
    inner: JoinHandle<Result<(), ClipboardError>>,
}

impl CopyHandle {
    /// Wait for the write to finish and report its outcome.
    pub async fn wait(self) -> Result<(), ClipboardError> {
        self.inner
            .await
            .map_err(|e| ClipboardError::Task(e.to_string()))?
    }
}

/// Rescan `page` and write its file links to `writer` on the blocking pool.
///
/// Must be called from within a Tokio runtime. Failures are logged and
/// reported through the returned handle only.
pub fn copy_links<P, W>(page: &P, writer: W) -> CopyHandle
where
    P: PageDocument + ?Sized,
    W: ClipboardWriter + 'static,
{
    let links = extract_file_links(page);
    let count = links.len();
    let text = clipboard_text(&links);

    let inner = tokio::task::spawn_blocking(move || {
        let result = writer.write_text(&text);
        match &result {
            Ok(()) => tracing::info!(backend = writer.name(), count, "links copied"),
            Err(e) => tracing::warn!(backend = writer.name(), "clipboard write failed: {e}"),
        }
        result
    });
    CopyHandle { inner }
}
