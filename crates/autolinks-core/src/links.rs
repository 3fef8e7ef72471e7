//! File-link extraction.
//!
//! Picks the anchors of a page that point at downloadable files, judged by
//! the extension at the end of the URL path.

use serde::Serialize;

use crate::page::PageDocument;

/// Extensions recognized as downloadable files.
pub const FILE_EXTENSIONS: &[&str] = &[
    "pdf", "zip", "rar", "7z", //
    "mp3", "mp4", "mkv", "avi", //
    "jpg", "jpeg", "png", "gif", "webp", //
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", //
    "csv", "txt", "json",
];

/// An anchor that points at a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLink {
    /// Trimmed rendered text of the anchor.
    pub text: String,
    /// Absolute URL of the anchor.
    pub href: String,
}

/// True if `url`, ignoring everything from the first `?` and compared
/// case-insensitively, ends in `.<ext>` for an allow-listed extension.
pub fn is_file_link(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or_default().to_lowercase();
    FILE_EXTENSIONS.iter().any(|ext| {
        path.strip_suffix(ext)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Collect the file links of `page` in document order.
///
/// Anchors with a missing or empty href, or whose URL does not end in a
/// recognized extension, are skipped. The page is rescanned on every call.
pub fn extract_file_links<P: PageDocument + ?Sized>(page: &P) -> Vec<FileLink> {
    let links: Vec<FileLink> = page
        .anchors()
        .into_iter()
        .filter_map(|anchor| {
            let href = anchor.href.filter(|h| !h.is_empty())?;
            is_file_link(&href).then(|| FileLink {
                text: anchor.text.trim().to_string(),
                href,
            })
        })
        .collect();
    tracing::debug!(url = %page.url(), count = links.len(), "extracted file links");
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;
    use url::Url;

    #[test]
    fn matches_allow_listed_extensions() {
        assert!(is_file_link("http://a/x.pdf"));
        assert!(is_file_link("http://a/b/archive.7z"));
        assert!(is_file_link("https://a/data.json"));
        assert!(!is_file_link("http://a/dir/"));
        assert!(!is_file_link("http://a/index.html"));
    }

    #[test]
    fn case_and_query_insensitive() {
        assert!(is_file_link("http://a/IMAGE.JPG?x=1"));
        assert!(is_file_link("http://a/Movie.MkV?dl=1&t=2"));
        assert!(!is_file_link("http://a/page?file=x.pdf"));
    }

    #[test]
    fn requires_exact_dot_suffix() {
        assert!(!is_file_link("http://a/archive.tarball"));
        assert!(!is_file_link("http://a/notazip"));
        assert!(!is_file_link("http://a/x.pdfx"));
        assert!(is_file_link("http://a/x.tar.zip"));
    }

    fn listing() -> HtmlPage {
        HtmlPage::parse(
            r#"<html><body><h1>Index of /pub/</h1><pre>
            <a href="../">../</a>
            <a href="Report%202024.PDF">Report 2024.PDF</a>
            <a href="notes.txt?rev=3"> notes.txt </a>
            <a>no href</a>
            <a href="sub/">sub/</a>
            <a href="http://cdn.example.com/video.mp4">video.mp4</a>
            <a href="archive.tarball">archive.tarball</a>
            </pre></body></html>"#,
            Url::parse("http://example.com/pub/").unwrap(),
        )
    }

    #[test]
    fn extracts_in_document_order() {
        let links = extract_file_links(&listing());
        assert_eq!(
            links,
            vec![
                FileLink {
                    text: "Report 2024.PDF".into(),
                    href: "http://example.com/pub/Report%202024.PDF".into(),
                },
                FileLink {
                    text: "notes.txt".into(),
                    href: "http://example.com/pub/notes.txt?rev=3".into(),
                },
                FileLink {
                    text: "video.mp4".into(),
                    href: "http://cdn.example.com/video.mp4".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_page_yields_no_links() {
        let page = HtmlPage::parse("", Url::parse("http://example.com/").unwrap());
        assert!(extract_file_links(&page).is_empty());
    }

    #[test]
    fn rescanning_is_stable() {
        let page = listing();
        assert_eq!(extract_file_links(&page), extract_file_links(&page));
    }
}
