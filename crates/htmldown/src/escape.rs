//! Markdown escaping for text runs and table cells.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{NodeRef, NodeType};

/// ASCII whitespace only; non-breaking spaces are content
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:space:]]+").unwrap());

/// Characters that would otherwise be read as Markdown syntax
const SPECIAL: &[char] = &['_', '~', '*', '`', '>', '<', '|'];

/// Escape a text run for Markdown output.
///
/// Whitespace-only input produces an empty string. Leading and trailing tabs
/// and line breaks are trimmed, whitespace runs collapse to a single space,
/// and any remaining newline is followed by `quote_level` quote markers.
pub fn escape_text(text: &str, quote_level: usize) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let trimmed = text.trim_matches(['\t', '\r', '\n']);
    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");
    let escaped = escape_special(&collapsed);

    if quote_level == 0 || !escaped.contains('\n') {
        return escaped;
    }
    escaped.replace('\n', &format!("\n{}", "> ".repeat(quote_level)))
}

/// Prefix Markdown special characters with a backslash
pub fn escape_special(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if SPECIAL.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Format the children of a table cell on a single line.
///
/// Nested elements are kept as bare HTML tags so inline markup cannot break
/// the surrounding pipe-table row.
pub fn format_cell(cell: NodeRef<'_>) -> String {
    let mut out = String::new();
    for child in cell.children() {
        format_inline(child, &mut out);
    }
    out
}

fn format_inline(node: NodeRef<'_>, out: &mut String) {
    match node.node_type() {
        NodeType::Text => out.push_str(&escape_special(node.value()).replace('\n', "<br>")),
        NodeType::Element => {
            let tag = node.tag_name();
            if tag == "br" || tag == "hr" {
                out.push_str(&format!("<{tag} />"));
                return;
            }
            out.push_str(&format!("<{tag}>"));
            for child in node.children() {
                format_inline(child, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
        _ => {}
    }
}
