//! Page integration: attach the "Copy Links" / "Download Playlist" bar to the
//! page heading.

use crate::page::PageDocument;

/// Class of the container appended to the heading.
pub const ACTION_BAR_CLASS: &str = "autoindex-actions";
/// Class of each button in the bar.
pub const BUTTON_CLASS: &str = "ai-btn";

/// The two exports a page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    CopyLinks,
    DownloadPlaylist,
}

impl PageAction {
    pub fn label(self) -> &'static str {
        match self {
            PageAction::CopyLinks => "Copy Links",
            PageAction::DownloadPlaylist => "Download Playlist",
        }
    }

    /// Value of the button's `data-action` attribute.
    pub fn id(self) -> &'static str {
        match self {
            PageAction::CopyLinks => "copy-links",
            PageAction::DownloadPlaylist => "download-playlist",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: PageAction,
}

impl From<PageAction> for Button {
    fn from(action: PageAction) -> Self {
        Self {
            label: action.label(),
            action,
        }
    }
}

/// Container holding the action buttons, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBar {
    pub buttons: Vec<Button>,
}

impl Default for ActionBar {
    fn default() -> Self {
        Self {
            buttons: vec![
                PageAction::CopyLinks.into(),
                PageAction::DownloadPlaylist.into(),
            ],
        }
    }
}

impl ActionBar {
    pub fn to_html(&self) -> String {
        let mut out = format!(r#"<div class="{ACTION_BAR_CLASS}">"#);
        for button in &self.buttons {
            out.push_str(&format!(
                r#"<button class="{BUTTON_CLASS}" data-action="{}">{}</button>"#,
                button.action.id(),
                button.label
            ));
        }
        out.push_str("</div>");
        out
    }
}

/// Result of [`initialize_page_actions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The bar was appended to the heading.
    Attached,
    /// The page has no top-level heading; nothing was changed.
    NoHeading,
    /// The heading already carries a bar; nothing was changed.
    AlreadyAttached,
}

/// Attach the action bar to `page`'s top-level heading.
///
/// A page without a heading is left alone. Calling this again on a page that
/// already has the bar is a no-op, so the buttons never appear twice.
pub fn initialize_page_actions<P: PageDocument + ?Sized>(page: &mut P) -> InitOutcome {
    if !page.has_heading() {
        tracing::debug!(url = %page.url(), "no heading on page; actions not attached");
        return InitOutcome::NoHeading;
    }
    if page.has_action_bar() {
        tracing::debug!(url = %page.url(), "action bar already present");
        return InitOutcome::AlreadyAttached;
    }
    if page.append_to_heading(ActionBar::default()) {
        tracing::debug!(url = %page.url(), "action bar attached");
        InitOutcome::Attached
    } else {
        InitOutcome::NoHeading
    }
}
