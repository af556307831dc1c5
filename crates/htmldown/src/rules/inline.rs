//! Inline renderers: links and images.

use std::fmt::{self, Write};

use crate::node::NodeRef;
use crate::walker::Walker;

impl<W: Write> Walker<'_, W> {
    /// `[children](href)`; inside code only the children are written
    pub(crate) fn link(&mut self, node: NodeRef<'_>) -> fmt::Result {
        if self.state.raw {
            return self.visit_children(node);
        }
        let href = node.attr_lower("href");
        self.out.write_char('[')?;
        self.visit_children(node)?;
        write!(self.out, "]({href})")
    }

    /// `![alt](src)` on its own line
    pub(crate) fn image(&mut self, node: NodeRef<'_>) -> fmt::Result {
        writeln!(
            self.out,
            "![{}]({})",
            node.attr_lower("alt"),
            node.attr_lower("src")
        )
    }
}
