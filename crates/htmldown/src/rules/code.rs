//! Code spans and fenced code blocks.

use std::fmt::{self, Write};

use crate::node::{NodeRef, NodeType};
use crate::walker::Walker;

impl<W: Write> Walker<'_, W> {
    /// Inline code when `code` holds a single text or link child, a fenced
    /// block otherwise.
    pub(crate) fn code(&mut self, node: NodeRef<'_>) -> fmt::Result {
        if node.parent_tag() == "pre" || node.node.children.len() > 1 {
            return self.preformatted(node);
        }
        let Some(child) = node.only_child() else {
            return Ok(());
        };

        match child.node_type() {
            NodeType::Text => write!(self.out, "`{}`", child.value()),
            NodeType::Element if child.tag_name() == "a" => {
                let href = node
                    .attr("href")
                    .or_else(|| child.attr("href"))
                    .map(str::to_lowercase)
                    .unwrap_or_default();
                self.scoped(
                    |state| state.raw = true,
                    |walker| {
                        walker.out.write_str("[`")?;
                        walker.visit_children(child)?;
                        write!(walker.out, "`]({href})")
                    },
                )
            }
            NodeType::Element => self.preformatted(node),
            _ => Ok(()),
        }
    }

    /// Fenced code block in raw mode; `<pre><code>` collapses to one fence
    pub(crate) fn preformatted(&mut self, node: NodeRef<'_>) -> fmt::Result {
        let options = self.options;
        self.scoped(
            |state| {
                state.raw = true;
                if let Some(lang) = options.lang_for(node.attributes()) {
                    state.lang = lang;
                }
            },
            |walker| match node.only_child() {
                Some(code) if code.tag_name() == "code" => walker.preformatted(code),
                _ => {
                    let open = format!("\n\n```{}\n", walker.state.lang);
                    walker.wrap(node, &open, "\n```\n")
                }
            },
        )
    }
}
