//! Where a prepared playlist goes: a directory on disk or standard output.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::playlist::PlaylistDownload;

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Receives a finished download and stores it.
pub trait DownloadSink {
    /// Store `download`; returns the location it was written to.
    fn save(&self, download: &PlaylistDownload) -> Result<PathBuf>;
}

/// Path for the temp file: appends `.part` (e.g. `music.dpl` → `music.dpl.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes downloads into a directory, replacing any existing file of the
/// same name. The file appears under its final name only once fully written.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, download: &PlaylistDownload) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir {}", self.dir.display()))?;

        let final_path = self.dir.join(&download.filename);
        let tmp = temp_path(&final_path);
        {
            let mut f = fs::File::create(&tmp)
                .with_context(|| format!("create {}", tmp.display()))?;
            f.write_all(download.content.as_bytes())
                .with_context(|| format!("write {}", tmp.display()))?;
            f.sync_all()
                .with_context(|| format!("sync {}", tmp.display()))?;
        }
        fs::rename(&tmp, &final_path).with_context(|| {
            format!("rename {} -> {}", tmp.display(), final_path.display())
        })?;

        tracing::debug!(mime = download.mime, "wrote {}", final_path.display());
        Ok(final_path)
    }
}

/// Writes the payload to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DownloadSink for StdoutSink {
    fn save(&self, download: &PlaylistDownload) -> Result<PathBuf> {
        let mut out = std::io::stdout().lock();
        out.write_all(download.content.as_bytes())
            .context("write playlist to stdout")?;
        out.flush().context("flush stdout")?;
        Ok(PathBuf::from("-"))
    }
}
