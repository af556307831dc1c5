//! HTML parsing support.
//!
//! Parses a full HTML document with `scraper` (html5ever) and converts it to
//! the [`Node`] tree consumed by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a document [`Node`].
///
/// html5ever recovers from malformed markup the way browsers do, so this
/// never fails; recovered errors are logged at debug level.
///
/// # Example
///
/// ```rust
/// use htmldown::{parse_html, Converter};
///
/// let document = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let markdown = Converter::new().convert_node(&document).unwrap();
/// assert_eq!(markdown, "\n# Hello _World_\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    for error in &document.errors {
        tracing::debug!(%error, "recovered from html parse error");
    }

    let mut root = Node::document();
    for child in document.tree.root().children() {
        match child.value() {
            ScraperNode::Comment(comment) => root.add_child(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    root.add_child(scraper_to_node(element));
                }
            }
            _ => {}
        }
    }
    root
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => node.add_child(Node::comment(&comment.comment)),
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
    use crate::NodeType;

    #[test]
    fn test_parse_wraps_in_document() {
        let node = parse_html("<p>Hello World</p>");
        assert_eq!(node.node_type, NodeType::Document);

        let html = node.first_child().unwrap();
        assert_eq!(html.tag_name(), "html");
        let tags: Vec<&str> = html.element_children().map(Node::tag_name).collect();
        assert_eq!(tags, ["head", "body"]);
    }

    #[test]
    fn test_parse_keeps_comments_and_attributes() {
        let node = parse_html(r#"<div id="main" class="a"><!-- note -->text</div>"#);
        let body = &node.children[0].children[1];
        let div = &body.children[0];

        assert_eq!(div.attr("id"), Some("main"));
        assert_eq!(div.attr("class"), Some("a"));
        assert_eq!(div.children[0].node_type, NodeType::Comment);
        assert_eq!(div.children[0].value(), " note ");
        assert_eq!(div.children[1].value(), "text");
    }

    #[test]
    fn test_parse_lowercases_tags() {
        let node = parse_html("<DIV><SPAN>x</SPAN></DIV>");
        let body = &node.children[0].children[1];
        assert_eq!(body.children[0].tag_name(), "div");
        assert_eq!(body.children[0].children[0].tag_name(), "span");
    }
}
