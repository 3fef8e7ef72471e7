//! Playlist filename derivation from the page URL.

use url::Url;

/// Base name used when the page path has no segments.
pub const DEFAULT_BASENAME: &str = "file-links";

/// Last non-empty path segment of `page_url`, percent-decoded.
///
/// Returns [`DEFAULT_BASENAME`] for a root or empty path.
pub fn directory_name(page_url: &Url) -> String {
    page_url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .map(percent_decode)
        .unwrap_or_else(|| DEFAULT_BASENAME.to_string())
}

/// Lowercase, trim, drop apostrophes, collapse every run of characters
/// outside `[a-z0-9]` into one `-`, and strip dashes at both ends.
pub fn to_kebab_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.trim().chars() {
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Filename offered for the playlist of the page at `page_url`.
pub fn playlist_filename(page_url: &Url) -> String {
    format!(
        "{}.{}",
        to_kebab_case(&directory_name(page_url)),
        super::PLAYLIST_EXTENSION
    )
}

/// Percent-decode a path segment. Malformed escapes are kept as-is and
/// invalid UTF-8 is replaced.
pub(crate) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn directory_name_last_segment() {
        assert_eq!(directory_name(&url("http://a/Docs/My%20Folder/")), "My Folder");
        assert_eq!(directory_name(&url("http://a/Docs/My Folder/")), "My Folder");
        assert_eq!(directory_name(&url("http://a/pub/file.iso")), "file.iso");
        assert_eq!(directory_name(&url("http://a/one?x=/two/")), "one");
    }

    #[test]
    fn directory_name_empty_path() {
        assert_eq!(directory_name(&url("http://a/")), "file-links");
        assert_eq!(directory_name(&url("http://a")), "file-links");
        assert_eq!(directory_name(&url("http://a//")), "file-links");
    }

    #[test]
    fn kebab_case_examples() {
        assert_eq!(to_kebab_case("Hello, World!! 2024"), "hello-world-2024");
        assert_eq!(to_kebab_case("O'Brien's"), "obriens");
        assert_eq!(to_kebab_case("It\u{2019}s Here"), "its-here");
        assert_eq!(to_kebab_case("  --My Folder--  "), "my-folder");
        assert_eq!(to_kebab_case("file-links"), "file-links");
        assert_eq!(to_kebab_case("Café Music"), "caf-music");
        assert_eq!(to_kebab_case("!!!"), "");
    }

    #[test]
    fn playlist_filename_from_path() {
        assert_eq!(playlist_filename(&url("http://a/Docs/My%20Folder/")), "my-folder.dpl");
        assert_eq!(playlist_filename(&url("http://a/")), "file-links.dpl");
        assert!(playlist_filename(&url("http://a/x/Y%20Z")).ends_with(".dpl"));
    }

    #[test]
    fn percent_decode_cases() {
        assert_eq!(percent_decode("My%20Folder"), "My Folder");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz%4"), "%zz%4");
        assert_eq!(percent_decode("%ff"), "\u{fffd}");
    }
}
