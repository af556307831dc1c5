//! Block renderers: headings, paragraphs, quotes and generic containers.

use std::fmt::{self, Write};

use crate::node::NodeRef;
use crate::rules::Rule;
use crate::walker::Walker;

impl<W: Write> Walker<'_, W> {
    pub(crate) fn heading(&mut self, level: usize, node: NodeRef<'_>) -> fmt::Result {
        let prefix = format!("\n{} ", "#".repeat(level));
        self.wrap(node, &prefix, "\n")
    }

    /// Two line breaks carrying the current quote markers, then the children
    pub(crate) fn paragraph(&mut self, node: NodeRef<'_>) -> fmt::Result {
        let line = format!("\n{}", "> ".repeat(self.state.quote_level));
        self.wrap(node, &line.repeat(2), "\n\n")
    }

    pub(crate) fn quote(&mut self, node: NodeRef<'_>) -> fmt::Result {
        self.scoped(
            |state| state.quote_level += 1,
            |walker| walker.wrap(node, "\n", "\n"),
        )
    }

    /// `span`/`div`: render as the configured replacement tag, if any
    pub(crate) fn generic(&mut self, tag: &str, node: NodeRef<'_>) -> fmt::Result {
        let options = self.options;
        match options.replacement(tag, node.attributes()) {
            Some(replacement) if Rule::for_tag(replacement) != Rule::Generic => {
                tracing::trace!(tag, replacement, "rendering replaced tag");
                self.render_element(replacement, node)
            }
            _ => self.visit_children(node),
        }
    }
}
