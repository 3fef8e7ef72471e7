//! Native clipboard utilities driven over stdin.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use super::{ClipboardError, ClipboardWriter};

/// A known utility: program name, fixed args, and the environment variable
/// that must be set for it to reach a clipboard (if any).
struct Candidate {
    program: &'static str,
    args: &'static [&'static str],
    session_var: Option<&'static str>,
}

const CANDIDATES: &[Candidate] = &[
    Candidate {
        program: "wl-copy",
        args: &[],
        session_var: Some("WAYLAND_DISPLAY"),
    },
    Candidate {
        program: "xclip",
        args: &["-selection", "clipboard"],
        session_var: Some("DISPLAY"),
    },
    Candidate {
        program: "xsel",
        args: &["--clipboard", "--input"],
        session_var: Some("DISPLAY"),
    },
    Candidate {
        program: "pbcopy",
        args: &[],
        session_var: None,
    },
    Candidate {
        program: "clip.exe",
        args: &[],
        session_var: None,
    },
];

/// Pipes text into a clipboard program such as `wl-copy` or `xclip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from an argv list (`["xclip", "-selection", "clipboard"]`).
    /// Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    /// First known utility that is on PATH and has a session to talk to.
    pub fn detect() -> Option<Self> {
        CANDIDATES.iter().find_map(|c| {
            if let Some(var) = c.session_var {
                if env::var_os(var).map_or(true, |v| v.is_empty()) {
                    return None;
                }
            }
            let path = which::which(c.program).ok()?;
            tracing::debug!("clipboard utility found at {}", path.display());
            Some(Self::new(
                c.program,
                c.args.iter().map(|a| a.to_string()).collect(),
            ))
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ClipboardWriter for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::Exit {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_argv_splits_program() {
        let c = CommandClipboard::from_argv(&argv(&["xclip", "-selection", "clipboard"])).unwrap();
        assert_eq!(c.program(), "xclip");
        assert_eq!(c.args, argv(&["-selection", "clipboard"]));
        assert!(CommandClipboard::from_argv(&[]).is_none());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let c = CommandClipboard::new("autolinks-no-such-clipboard-tool", vec![]);
        assert!(matches!(
            c.write_text("x"),
            Err(ClipboardError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn pipes_text_to_program() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let c = CommandClipboard::new(
            "sh",
            argv(&["-c", &format!("cat > '{}'", out.display())]),
        );
        c.write_text("http://a/x.pdf\nhttp://a/y.zip").unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "http://a/x.pdf\nhttp://a/y.zip"
        );
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_reported() {
        let c = CommandClipboard::new("sh", argv(&["-c", "cat > /dev/null; exit 3"]));
        assert!(matches!(
            c.write_text("x"),
            Err(ClipboardError::Exit { .. })
        ));
    }
}
