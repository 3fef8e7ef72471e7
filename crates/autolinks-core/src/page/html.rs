//! scraper-backed [`PageDocument`] over a parsed HTML listing.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Anchor, PageDocument};
use crate::actions::{ActionBar, ACTION_BAR_CLASS};

/// A parsed HTML page. Attached action bars live in the document tree.
pub struct HtmlPage {
    url: Url,
    document: Html,
}

fn selector(css: &str) -> Selector {
    // Only called with the literal selectors in this file.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

impl HtmlPage {
    /// Parse `html` as the page located at `url`.
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            url,
            document: Html::parse_document(html),
        }
    }

    /// URL that relative hrefs resolve against: the first `<base href>` if
    /// present and valid, otherwise the page URL.
    pub fn base_url(&self) -> Url {
        self.document
            .select(&selector("base[href]"))
            .next()
            .and_then(|base| base.value().attr("href"))
            .and_then(|href| self.url.join(href.trim()).ok())
            .unwrap_or_else(|| self.url.clone())
    }

    fn heading(&self) -> Option<ElementRef<'_>> {
        self.document.select(&selector("h1")).next()
    }

    /// Serialize the page, including any attached action bars.
    pub fn render(&self) -> String {
        self.document.html()
    }
}

/// Rendered text with whitespace runs collapsed to one space and trimmed.
fn rendered_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

impl PageDocument for HtmlPage {
    fn url(&self) -> &Url {
        &self.url
    }

    fn anchors(&self) -> Vec<Anchor> {
        let base = self.base_url();
        self.document
            .select(&selector("a"))
            .map(|a| Anchor {
                href: a
                    .value()
                    .attr("href")
                    .and_then(|href| base.join(href.trim()).ok())
                    .map(String::from),
                text: rendered_text(a),
            })
            .collect()
    }

    fn has_heading(&self) -> bool {
        self.heading().is_some()
    }

    fn has_action_bar(&self) -> bool {
        let Some(heading) = self.heading() else {
            return false;
        };
        heading
            .children()
            .filter_map(ElementRef::wrap)
            .any(|el| {
                el.value().name() == "div"
                    && el.value().classes().any(|c| c == ACTION_BAR_CLASS)
            })
    }

    fn append_to_heading(&mut self, bar: ActionBar) -> bool {
        let Some(heading_id) = self.heading().map(|h| h.id()) else {
            return false;
        };

        // Graft the parsed bar under the heading node, keeping sibling order.
        let fragment = Html::parse_fragment(&bar.to_html());
        let mut pending = vec![(*fragment.root_element(), heading_id)];
        while let Some((src, dst)) = pending.pop() {
            for child in src.children() {
                let Some(mut parent) = self.document.tree.get_mut(dst) else {
                    return false;
                };
                let id = parent.append(child.value().clone()).id();
                pending.push((child, id));
            }
        }
        true
    }
}
