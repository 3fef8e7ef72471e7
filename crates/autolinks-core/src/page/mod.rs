//! The document capability the extractor and initializer work against.
//!
//! Link extraction, playlist formatting and page integration only see a page
//! through [`PageDocument`], so they can run against a parsed HTML listing
//! ([`HtmlPage`]) or any other source of anchors.

pub mod fetch;
mod html;

pub use fetch::{load_page, PageSource};
pub use html::HtmlPage;

use url::Url;

use crate::actions::ActionBar;

/// An anchor element as the page exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Absolute URL after resolving the `href` attribute against the page's
    /// base URL. `None` when the attribute is missing or does not resolve.
    pub href: Option<String>,
    /// Rendered text of the anchor, whitespace-collapsed.
    pub text: String,
}

/// Query/mutation surface of a loaded page.
pub trait PageDocument {
    /// The page's own location, used for playlist naming.
    fn url(&self) -> &Url;

    /// All anchor elements in document order.
    fn anchors(&self) -> Vec<Anchor>;

    /// True if the page has a top-level heading (`h1`).
    fn has_heading(&self) -> bool;

    /// True if an action bar is already attached to the heading.
    fn has_action_bar(&self) -> bool;

    /// Append `bar` as the last child of the top-level heading.
    /// Returns false (and leaves the page untouched) if there is no heading.
    fn append_to_heading(&mut self, bar: ActionBar) -> bool;
}
