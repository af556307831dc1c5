//! Converter - the main entry point for HTML to Markdown conversion.

use std::fmt;
#[cfg(feature = "html")]
use std::io::{BufWriter, Read, Write};

use crate::node::{Node, NodeRef, NodeType};
use crate::options::{AttrMatch, Options, OptionsBuilder, StartAnchor};
#[cfg(feature = "html")]
use crate::walker::IoSink;
use crate::walker::Walker;
use crate::{HtmldownError, Result};

/// Converts HTML documents to Markdown.
///
/// A converter is immutable and can be shared between threads; each call
/// walks the document with its own state.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Start building options for a Converter
    pub fn builder() -> OptionsBuilder {
        Options::builder()
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert an HTML document to Markdown
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> Result<String> {
        tracing::debug!(len = html.len(), "converting html");
        let document = crate::html::parse_html(html);
        self.convert_node(&document)
    }

    /// Read an HTML document from `input` and write Markdown to `output`.
    ///
    /// The input is read and parsed completely before anything is written.
    /// Output is buffered and flushed before returning.
    #[cfg(feature = "html")]
    pub fn convert_stream<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<()> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        let html = String::from_utf8(bytes)
            .map_err(|e| HtmldownError::ParseError(format!("input is not valid UTF-8: {e}")))?;
        tracing::debug!(len = html.len(), "converting html stream");

        let document = crate::html::parse_html(&html);
        let mut sink = IoSink::new(BufWriter::new(output));
        if let Err(err) = self.convert_node_to(&document, &mut sink) {
            return Err(match err {
                HtmldownError::WriteError => sink
                    .error
                    .take()
                    .map(HtmldownError::Io)
                    .unwrap_or(HtmldownError::WriteError),
                other => other,
            });
        }
        sink.flush()?;
        Ok(())
    }

    /// Convert an already built node tree to Markdown
    pub fn convert_node(&self, node: &Node) -> Result<String> {
        let mut out = String::new();
        self.convert_node_to(node, &mut out)?;
        Ok(out)
    }

    /// Convert an already built node tree, writing Markdown to `out`.
    ///
    /// Nothing is written when the start anchor cannot be found.
    pub fn convert_node_to<W: fmt::Write>(&self, node: &Node, out: W) -> Result<()> {
        let start = self.resolve(node)?;
        let mut walker = Walker::new(&self.options, out);
        walker
            .visit_children(start)
            .map_err(|_| HtmldownError::WriteError)
    }

    /// Find the node the conversion starts from
    fn resolve<'a>(&self, root: &'a Node) -> Result<NodeRef<'a>> {
        let anchor = self.options.anchor();
        let found = match &anchor {
            StartAnchor::Document => return Ok(NodeRef::new(root)),
            StartAnchor::Id(id) => find(NodeRef::new(root), &|n: &NodeRef<'a>| {
                n.is_element() && n.attr("id") == Some(id.as_str())
            }),
            StartAnchor::Tag { tag, class } => find(NodeRef::new(root), &|n: &NodeRef<'a>| {
                n.tag_name() == tag
                    && match class {
                        AttrMatch::Any => true,
                        AttrMatch::Exact(class) => n.attr_lower("class") == *class,
                    }
            }),
        };

        match found {
            Some(node) => {
                tracing::debug!(%anchor, tag = node.tag_name(), "resolved start anchor");
                Ok(node)
            }
            None => Err(HtmldownError::AnchorNotFound(anchor)),
        }
    }
}

/// Depth-first search, `node` included
fn find<'a>(node: NodeRef<'a>, matches: &dyn Fn(&NodeRef<'a>) -> bool) -> Option<NodeRef<'a>> {
    if node.node_type() == NodeType::Element && matches(&node) {
        return Some(node);
    }
    node.children().find_map(|child| find(child, matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Node {
        let mut root = Node::document();
        let mut body = Node::element("body");
        let mut nav = Node::element_with_attrs("div", vec![("class", "Menu")]);
        nav.add_child(Node::text("menu"));
        let mut main = Node::element_with_attrs("div", vec![("id", "main"), ("class", "content")]);
        let mut b = Node::element("b");
        b.add_child(Node::text("body"));
        main.add_child(b);
        body.add_child(nav);
        body.add_child(main);
        root.add_child(body);
        root
    }

    fn converter(build: impl FnOnce(&mut OptionsBuilder)) -> Converter {
        let mut builder = Converter::builder();
        build(&mut builder);
        Converter::with_options(builder.build().unwrap())
    }

    #[test]
    fn test_whole_document() {
        let markdown = Converter::new().convert_node(&page()).unwrap();
        assert_eq!(markdown, "menu**body**");
    }

    #[test]
    fn test_start_id() {
        let markdown = converter(|b| {
            b.start_id("main");
        })
        .convert_node(&page())
        .unwrap();
        assert_eq!(markdown, "**body**");
    }

    #[test]
    fn test_start_tag_matches_lowercased_class() {
        let markdown = converter(|b| {
            b.start_tag("div", "menu");
        })
        .convert_node(&page())
        .unwrap();
        assert_eq!(markdown, "menu");
    }

    #[test]
    fn test_start_tag_wildcard_takes_first() {
        let markdown = converter(|b| {
            b.start_tag("div", "");
        })
        .convert_node(&page())
        .unwrap();
        assert_eq!(markdown, "menu");
    }

    #[test]
    fn test_missing_anchor() {
        let err = converter(|b| {
            b.start_id("missing");
        })
        .convert_node(&page())
        .unwrap_err();
        assert!(
            matches!(err, HtmldownError::AnchorNotFound(StartAnchor::Id(ref id)) if id == "missing")
        );

        let err = converter(|b| {
            b.start_tag("table", "data");
        })
        .convert_node(&page())
        .unwrap_err();
        assert_eq!(err.to_string(), "Anchor not found: tag(table-data)");
    }

    #[test]
    fn test_missing_anchor_writes_nothing() {
        let mut out = String::new();
        let result = converter(|b| {
            b.start_id("missing");
        })
        .convert_node_to(&page(), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
