//! HTML tables as pipe-delimited Markdown tables.

use crate::node::Element;
use crate::tag::Tag;

/// Render a `table` element as a pipe-delimited Markdown table, framed by
/// one leading and one trailing newline.
///
/// Rows are all `tr` descendants, wherever `thead`/`tbody` wrapping put
/// them. The separator row always follows the first row, whether its cells
/// were `th` or `td`. Row lengths are not validated against each other; a
/// short row simply yields a shorter line.
pub fn convert_table(table: &Element) -> String {
    let mut rows = Vec::new();
    collect_by_tags(table, &[Tag::Tr], &mut rows);
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::from("\n");
    for (i, row) in rows.iter().enumerate() {
        let mut cells = Vec::new();
        collect_by_tags(row, &[Tag::Th, Tag::Td], &mut cells);

        let texts: Vec<String> = cells.iter().map(|cell| cell_text(cell)).collect();
        out.push_str("| ");
        out.push_str(&texts.join(" | "));
        out.push_str(" |\n");

        if i == 0 {
            out.push_str("| ");
            out.push_str(&vec!["---"; cells.len()].join(" | "));
            out.push_str(" |\n");
        }
    }
    out.push('\n');
    out
}

/// Collect all descendant elements matching `tags`, preorder
fn collect_by_tags<'a>(element: &'a Element, tags: &[Tag], found: &mut Vec<&'a Element>) {
    for child in element.element_children() {
        if tags.contains(&child.tag()) {
            found.push(child);
        }
        collect_by_tags(child, tags, found);
    }
}

fn cell_text(cell: &Element) -> String {
    cell.text_content().trim().replace('\n', " ")
}
