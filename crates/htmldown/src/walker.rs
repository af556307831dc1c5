//! Recursive tree walker and tag dispatch.

use std::fmt::{self, Write};
#[cfg(feature = "html")]
use std::io;

use crate::escape::escape_text;
use crate::node::{NodeRef, NodeType};
use crate::options::Options;
use crate::rules::Rule;

/// Per-conversion state, saved and restored around nested renderers
#[derive(Debug, Clone, Copy)]
pub(crate) struct WalkState<'c> {
    /// Blockquote nesting depth
    pub quote_level: usize,
    /// Emit text verbatim (inside code)
    pub raw: bool,
    /// Current fence language
    pub lang: &'c str,
}

/// Walks a node tree and writes Markdown into `out`.
pub(crate) struct Walker<'c, W> {
    pub(crate) options: &'c Options,
    pub(crate) state: WalkState<'c>,
    pub(crate) out: W,
}

impl<'c, W: Write> Walker<'c, W> {
    pub fn new(options: &'c Options, out: W) -> Self {
        Self {
            options,
            state: WalkState {
                quote_level: 0,
                raw: false,
                lang: &options.default_lang,
            },
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Visit every child of `node` in document order
    pub fn visit_children(&mut self, node: NodeRef<'_>) -> fmt::Result {
        for child in node.children() {
            match child.node_type() {
                NodeType::Text => self.text(child.value())?,
                NodeType::Comment => {
                    if self.options.hold_comment {
                        writeln!(self.out, "<!--{}-->", child.value())?;
                    }
                }
                NodeType::Element => {
                    let tag = child.tag_name();
                    if self.options.is_ignored(tag, child.attributes()) {
                        tracing::trace!(tag, "skipping ignored element");
                        continue;
                    }
                    self.render_element(tag, child)?;
                }
                NodeType::Document => {}
            }
        }
        Ok(())
    }

    /// Render `node` with the rule registered for `tag`
    pub fn render_element(&mut self, tag: &str, node: NodeRef<'_>) -> fmt::Result {
        match Rule::for_tag(tag) {
            Rule::Link => self.link(node),
            Rule::Strong => self.wrap(node, "**", "**"),
            Rule::LineBreak => self.out.write_str("\n\n"),
            Rule::Code => self.code(node),
            Rule::Strikethrough => self.wrap(node, "~~", "~~"),
            Rule::Emphasis => self.wrap(node, "_", "_"),
            Rule::Heading(level) => self.heading(level, node),
            Rule::Skip => Ok(()),
            Rule::ThematicBreak => self.out.write_str("\n\n--\n\n"),
            Rule::Image => self.image(node),
            Rule::ListItem => self.wrap(node, "* ", "\n"),
            Rule::Paragraph => self.paragraph(node),
            Rule::Preformatted => self.preformatted(node),
            Rule::Quote => self.quote(node),
            Rule::Generic => self.generic(tag, node),
            Rule::Table => self.table(node),
            Rule::List => self.wrap(node, "\n\n", "\n"),
            Rule::PassThrough => self.visit_children(node),
        }
    }

    /// Write `prefix`, the children of `node`, then `suffix`
    pub fn wrap(&mut self, node: NodeRef<'_>, prefix: &str, suffix: &str) -> fmt::Result {
        self.out.write_str(prefix)?;
        self.visit_children(node)?;
        self.out.write_str(suffix)
    }

    /// Run `body` with a modified state; the previous state is restored
    /// before returning, whatever `body` returned.
    pub fn scoped<F>(&mut self, enter: impl FnOnce(&mut WalkState<'c>), body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        let saved = self.state;
        enter(&mut self.state);
        let result = body(self);
        self.state = saved;
        result
    }

    fn text(&mut self, text: &str) -> fmt::Result {
        if self.state.raw {
            return self.out.write_str(text);
        }
        let escaped = escape_text(text, self.state.quote_level);
        self.out.write_str(&escaped)
    }
}

#[cfg(feature = "html")]
/// Adapts an [`io::Write`] to [`fmt::Write`], keeping the first I/O error.
pub(crate) struct IoSink<W> {
    inner: W,
    pub(crate) error: Option<io::Error>,
}

#[cfg(feature = "html")]
impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(feature = "html")]
impl<W: io::Write> Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::node::Node;

    /// Render the children of `root` with `options`
    pub(crate) fn render_with(root: &Node, options: &Options) -> String {
        let mut walker = Walker::new(options, String::new());
        walker.visit_children(NodeRef::new(root)).unwrap();
        walker.into_inner()
    }

    pub(crate) fn render(root: &Node) -> String {
        render_with(root, &Options::default())
    }

    pub(crate) fn element(tag: &str, children: Vec<Node>) -> Node {
        let mut node = Node::element(tag);
        for child in children {
            node.add_child(child);
        }
        node
    }

    pub(crate) fn wrapped(child: Node) -> Node {
        element("div", vec![child])
    }

    #[test]
    fn test_text_is_escaped() {
        let root = wrapped(Node::text("a*b"));
        assert_eq!(render(&root), "a\\*b");
    }

    #[test]
    fn test_comments_follow_option() {
        let root = wrapped(Node::comment(" note "));
        assert_eq!(render(&root), "");

        let options = Options::builder().hold_comment(true).build().unwrap();
        assert_eq!(render_with(&root, &options), "<!-- note -->\n");
    }

    #[test]
    fn test_ignored_subtree_is_dropped() {
        let mut sidebar = Node::element_with_attrs("div", vec![("class", "sidebar")]);
        sidebar.add_child(element("b", vec![Node::text("hidden")]));
        let root = element("body", vec![sidebar, Node::text("shown")]);

        let options = Options::builder().tag_ignore("div", "sidebar").build().unwrap();
        assert_eq!(render_with(&root, &options), "shown");
    }

    #[test]
    fn test_wildcard_ignore() {
        let root = element("body", vec![element("aside", vec![Node::text("x")]), Node::text("y")]);
        let options = Options::builder().tag_ignore("aside", "").build().unwrap();
        assert_eq!(render_with(&root, &options), "y");
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let root = wrapped(element("section", vec![element("b", vec![Node::text("x")])]));
        assert_eq!(render(&root), "**x**");
    }

    #[test]
    fn test_scoped_restores_state_on_error() {
        let options = Options::default();
        let mut walker = Walker::new(&options, String::new());
        let result = walker.scoped(
            |state| {
                state.quote_level += 3;
                state.raw = true;
            },
            |_| Err(fmt::Error),
        );
        assert!(result.is_err());
        assert_eq!(walker.state.quote_level, 0);
        assert!(!walker.state.raw);
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_io_sink_keeps_error() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = IoSink::new(Broken);
        assert!(sink.write_str("x").is_err());
        assert_eq!(
            sink.error.map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
