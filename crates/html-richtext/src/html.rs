//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and converts the result to
//! the Node structure used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse HTML into a Node tree rooted at the `<body>` element.
///
/// Both fragments and full documents are accepted; html5ever places fragment
/// content inside an implied body. Comments and doctypes are dropped.
///
/// # Example
///
/// ```rust
/// use html_richtext::parse_html;
///
/// let body = parse_html("<h2>Hello <em>World</em></h2>");
/// assert_eq!(body.tag_name(), "body");
/// assert_eq!(body.inner_html(), "<h2>Hello <em>World</em></h2>");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);

    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .map(scraper_to_node)
        .unwrap_or_else(|| Node::element("body"))
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment_yields_body() {
        let body = parse_html("<p>Hello World</p>");
        assert!(body.is_element());
        assert_eq!(body.tag_name(), "body");
        assert_eq!(body.inner_html(), "<p>Hello World</p>");
    }

    #[test]
    fn test_parse_full_document_skips_head() {
        let body = parse_html(
            "<!DOCTYPE html><html><head><title>T</title></head><body><hr><p>x</p></body></html>",
        );
        assert_eq!(body.inner_html(), "<hr><p>x</p>");
    }

    #[test]
    fn test_empty_input_has_empty_body() {
        let body = parse_html("");
        assert_eq!(body.tag_name(), "body");
        assert_eq!(body.children().count(), 0);
    }

    #[test]
    fn test_attributes_and_comments() {
        let body = parse_html(r#"<!-- note --><p><a href="https://example.com" title="Ex">x</a></p>"#);
        let p = body.element_children().next().unwrap();
        let a = p.element_children().next().unwrap();
        assert_eq!(a.attr("href"), Some("https://example.com"));
        assert_eq!(a.attr("title"), Some("Ex"));
        assert_eq!(body.children().count(), 1);
    }

    #[test]
    fn test_tag_names_are_lowercased_by_parser() {
        let body = parse_html("<P><STRONG>x</STRONG></P>");
        assert_eq!(body.inner_html(), "<p><strong>x</strong></p>");
    }
}
