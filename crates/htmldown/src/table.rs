//! Pipe-table rendering.
//!
//! Tables are flattened into a header row, body rows and an optional footer
//! row. Malformed markup is accepted as found: a `th` row inside `tbody`
//! takes over the header and uneven rows are written unpadded.

use std::fmt::{self, Write};

use crate::escape::format_cell;
use crate::node::NodeRef;
use crate::walker::Walker;

/// A row of formatted cells; `header` is set when any cell was a `th`
#[derive(Debug, Default)]
struct Row {
    cells: Vec<String>,
    header: bool,
}

impl Row {
    fn extract(row: NodeRef<'_>) -> Self {
        let mut extracted = Row::default();
        for cell in row.children() {
            match cell.tag_name() {
                "th" => {
                    extracted.header = true;
                    extracted.cells.push(format_cell(cell));
                }
                "td" => extracted.cells.push(format_cell(cell)),
                _ => {}
            }
        }
        extracted
    }
}

#[derive(Debug, Default)]
struct Table {
    head: Option<Vec<String>>,
    body: Vec<Vec<String>>,
    foot: Option<Vec<String>>,
    columns: usize,
}

impl Table {
    fn collect(table: NodeRef<'_>) -> Self {
        let mut collected = Table::default();
        for section in table.children() {
            match section.tag_name() {
                "thead" => collected.head = collected.first_row(section),
                "tfoot" => collected.foot = collected.first_row(section),
                "tbody" => {
                    for row in section.children().filter(|n| n.is_element()) {
                        collected.push_body_row(row);
                    }
                }
                "tr" => collected.push_body_row(section),
                _ => {}
            }
        }
        collected
    }

    fn first_row(&mut self, section: NodeRef<'_>) -> Option<Vec<String>> {
        let row = section.children().find(|n| n.is_element())?;
        let row = self.measure(Row::extract(row));
        (!row.cells.is_empty()).then_some(row.cells)
    }

    fn push_body_row(&mut self, row: NodeRef<'_>) {
        let row = self.measure(Row::extract(row));
        if row.cells.is_empty() {
            return;
        }
        if row.header {
            self.head = Some(row.cells);
        } else {
            self.body.push(row.cells);
        }
    }

    fn measure(&mut self, row: Row) -> Row {
        self.columns = self.columns.max(row.cells.len());
        row
    }
}

/// Column marker for the table's `align` attribute
fn alignment_marker(align: &str) -> &'static str {
    match align {
        "left" => ":----",
        "right" => "----:",
        "center" => ":----:",
        _ => "----",
    }
}

fn write_row<W: Write>(out: &mut W, cells: &[String]) -> fmt::Result {
    writeln!(out, "| {} |", cells.join(" | "))
}

impl<W: Write> Walker<'_, W> {
    pub(crate) fn table(&mut self, node: NodeRef<'_>) -> fmt::Result {
        if node.node.children.is_empty() {
            return Ok(());
        }
        let table = Table::collect(node);
        // No cells anywhere: a header stub with no columns is not a valid pipe table
        if table.columns == 0 {
            return Ok(());
        }

        let marker = alignment_marker(&node.attr_lower("align"));
        let head = table
            .head
            .unwrap_or_else(|| vec![" ".to_string(); table.columns]);

        self.out.write_str("\n\n")?;
        write_row(&mut self.out, &head)?;
        write_row(&mut self.out, &vec![marker.to_string(); table.columns])?;
        for row in &table.body {
            write_row(&mut self.out, row)?;
        }
        if let Some(foot) = &table.foot {
            write_row(&mut self.out, foot)?;
        }
        self.out.write_char('\n')
    }
}
