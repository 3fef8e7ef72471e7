//! CLI for autolinks.

mod commands;

use anyhow::Result;
use autolinks_core::config::{self, AutolinksConfig};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use url::Url;

use commands::{run_completions, run_copy, run_inject, run_list, run_playlist};

/// Top-level CLI for autolinks.
#[derive(Debug, Parser)]
#[command(name = "autolinks", version)]
#[command(
    about = "autolinks: export file links from directory listings as a playlist or clipboard text",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// The page to work on.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Listing URL (http/https) or path to a saved HTML file.
    pub source: String,

    /// Resolve links and name the playlist as if the page lived at this URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<Url>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the file links found on a page.
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Print as a JSON array of {text, href} objects.
        #[arg(long)]
        json: bool,
    },

    /// Save the page's file links as a DAUMPLAYLIST (.dpl) file.
    Playlist {
        #[command(flatten)]
        page: PageArgs,

        /// Directory to save into (default: config `output_dir`, else current dir).
        #[arg(long, value_name = "DIR", conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,

        /// Write the playlist to stdout instead of a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Copy the page's file links to the clipboard, one per line.
    Copy {
        #[command(flatten)]
        page: PageArgs,

        /// Use the OSC 52 terminal escape regardless of config.
        #[arg(long)]
        osc52: bool,
    },

    /// Write the page back out with the Copy Links / Download Playlist bar
    /// attached to its heading.
    Inject {
        #[command(flatten)]
        page: PageArgs,

        /// Output file (default: stdout).
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    /// Whether the command reads `config.toml`.
    pub fn needs_config(&self) -> bool {
        !matches!(self, CliCommand::Completions { .. })
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        // A broken config.toml must not block commands that never read it.
        let cfg = if cli.command.needs_config() {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            AutolinksConfig::default()
        };

        match cli.command {
            CliCommand::List { page, json } => run_list(&cfg, &page, json).await?,
            CliCommand::Playlist {
                page,
                output_dir,
                stdout,
            } => run_playlist(&cfg, &page, output_dir, stdout).await?,
            CliCommand::Copy { page, osc52 } => run_copy(&cfg, &page, osc52).await?,
            CliCommand::Inject { page, output } => {
                run_inject(&cfg, &page, output.as_deref()).await?
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
