//! OSC 52 clipboard: ask the terminal emulator to set the clipboard.
//!
//! Works over SSH and without a display server, as long as the terminal
//! honors the sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};
use std::sync::Mutex;

use super::{ClipboardError, ClipboardWriter};

/// Writes `ESC ] 52 ; c ; <base64> BEL` to a terminal stream.
pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
    tmux_passthrough: bool,
}

impl Osc52Clipboard<io::Stderr> {
    /// Target stderr, wrapping for tmux when running inside it.
    pub fn stderr() -> Self {
        Self::new(io::stderr()).with_tmux_passthrough(std::env::var_os("TMUX").is_some())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            tmux_passthrough: false,
        }
    }

    /// Wrap the sequence in a tmux DCS passthrough.
    pub fn with_tmux_passthrough(mut self, enabled: bool) -> Self {
        self.tmux_passthrough = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// The escape sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str, tmux_passthrough: bool) -> String {
    let seq = format!("\x1b]52;c;{}\x07", STANDARD.encode(text));
    if tmux_passthrough {
        format!("\x1bPtmux;{}\x1b\\", seq.replace('\x1b', "\x1b\x1b"))
    } else {
        seq
    }
}

impl<W: Write + Send> ClipboardWriter for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let seq = osc52_sequence(text, self.tmux_passthrough);
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        out.write_all(seq.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sequence() {
        assert_eq!(osc52_sequence("hi", false), "\x1b]52;c;aGk=\x07");
        assert_eq!(osc52_sequence("", false), "\x1b]52;c;\x07");
    }

    #[test]
    fn tmux_sequence_doubles_escapes() {
        assert_eq!(
            osc52_sequence("hi", true),
            "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\"
        );
    }

    #[test]
    fn writes_sequence_to_stream() {
        let clip = Osc52Clipboard::new(Vec::new());
        clip.write_text("http://a/x.pdf\nhttp://a/y.zip").unwrap();
        let written = String::from_utf8(clip.into_inner()).unwrap();
        let payload = written
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        assert_eq!(
            STANDARD.decode(payload).unwrap(),
            b"http://a/x.pdf\nhttp://a/y.zip"
        );
    }
}
