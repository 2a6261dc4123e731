//! Read-only view over a parsed HTML document.
//!
//! The parsers only need four things from a DOM: the first element matching
//! a selector and a predicate, the element siblings that follow a node, the
//! elements nested inside a node, and a node's visible text. Nothing here
//! mutates the tree.

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

pub struct Dom {
    html: Html,
}

impl Dom {
    /// Parse raw page bytes. Invalid UTF-8 is replaced rather than rejected;
    /// malformed markup is repaired by the HTML5 parser.
    pub fn parse(bytes: &[u8]) -> Self {
        let source = String::from_utf8_lossy(bytes);
        Self {
            html: Html::parse_document(&source),
        }
    }

    /// First element, in document order, matching `selector` and `predicate`.
    pub fn find_first<P>(&self, selector: &Selector, predicate: P) -> Option<ElementRef<'_>>
    where
        P: Fn(&ElementRef<'_>) -> bool,
    {
        self.html.select(selector).find(|element| predicate(element))
    }
}

/// The element enclosing `node`, if it has one.
pub fn parent(node: ElementRef<'_>) -> Option<ElementRef<'_>> {
    node.parent().and_then(ElementRef::wrap)
}

/// Element siblings after `node` with the given tag name, in document order.
pub fn siblings_after<'a>(
    node: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    node.next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(move |sibling| sibling.value().name() == tag)
}

/// Elements nested anywhere inside `node` matching `selector`, in document order.
pub fn children<'a, 'b>(
    node: ElementRef<'a>,
    selector: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> + use<'a, 'b> {
    node.select(selector)
}

/// Visible text of `node` with whitespace runs collapsed and the ends trimmed.
pub fn text(node: ElementRef<'_>) -> String {
    node.text().flat_map(str::split_whitespace).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
          <section id="top">
            <h2><a href="/a">  first   link </a></h2>
            <p>not a div</p>
            <div class="one"><a href="/b">b</a><span><a href="/c">c</a></span></div>
            <div class="two"><a href="/d">d</a></div>
          </section>
        </body></html>
    "#;

    #[test]
    fn test_find_first_with_predicate() {
        let dom = Dom::parse(PAGE.as_bytes());
        let a = selector("a");
        let found = dom
            .find_first(&a, |e| e.value().attr("href") == Some("/c"))
            .unwrap();
        assert_eq!(text(found), "c");
        assert!(dom.find_first(&a, |_| false).is_none());
    }

    #[test]
    fn test_text_collapses_whitespace() {
        let dom = Dom::parse(PAGE.as_bytes());
        let first = dom.find_first(&selector("a"), |_| true).unwrap();
        assert_eq!(text(first), "first link");
    }

    #[test]
    fn test_siblings_after_filters_by_tag() {
        let dom = Dom::parse(PAGE.as_bytes());
        let anchor = dom.find_first(&selector("a"), |_| true).unwrap();
        let h2 = parent(anchor).unwrap();
        assert_eq!(h2.value().name(), "h2");

        let classes: Vec<_> = siblings_after(h2, "div")
            .map(|div| div.value().attr("class").unwrap_or_default().to_string())
            .collect();
        assert_eq!(classes, vec!["one", "two"]);
    }

    #[test]
    fn test_children_are_nested_in_order() {
        let dom = Dom::parse(PAGE.as_bytes());
        let div = dom.find_first(&selector("div.one"), |_| true).unwrap();
        let a = selector("a");
        let hrefs: Vec<_> = children(div, &a)
            .filter_map(|e| e.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/b", "/c"]);
    }

    #[test]
    fn test_parse_tolerates_invalid_utf8() {
        let mut bytes = b"<html><body><h1>ok".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"</h1></body></html>");
        let dom = Dom::parse(&bytes);
        let h1 = dom.find_first(&selector("h1"), |_| true).unwrap();
        assert!(text(h1).starts_with("ok"));
    }
}
