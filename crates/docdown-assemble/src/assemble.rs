//! Document assembly: title, table of contents, section concatenation.

use docdown::{Converter, Element, Node, Result};

/// One page of the assembled document.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Builds one Markdown document out of per-page sections.
///
/// The document title takes heading level 1 and each section title level 2,
/// which is why the converter shifts page headings down by one.
pub struct DocumentBuilder {
    title: String,
    preamble: Option<String>,
    toc_heading: String,
    sections: Vec<Section>,
}

impl DocumentBuilder {
    /// Create a builder for a document with the given title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            preamble: None,
            toc_heading: "Contents".to_string(),
            sections: Vec::new(),
        }
    }

    /// Set a quoted preamble line shown under the title
    pub fn preamble(&mut self, text: &str) -> &mut Self {
        self.preamble = Some(text.to_string());
        self
    }

    /// Override the table-of-contents heading
    pub fn toc_heading(&mut self, text: &str) -> &mut Self {
        self.toc_heading = text.to_string();
        self
    }

    /// Append a section with already-converted Markdown content
    pub fn section(&mut self, title: &str, body: &str) -> &mut Self {
        self.sections.push(Section {
            title: title.to_string(),
            body: body.to_string(),
        });
        self
    }

    /// Convert a page's content tree and append it as a section
    pub fn node_section(
        &mut self,
        title: &str,
        node: &Node,
        converter: &Converter,
    ) -> Result<&mut Self> {
        let body = converter.convert(node)?;
        log::debug!("converted section '{}' ({} bytes)", title, body.len());
        self.sections.push(Section {
            title: title.to_string(),
            body,
        });
        Ok(self)
    }

    /// Render the assembled document
    pub fn build(&self) -> String {
        let mut out = String::new();

        out.push_str("# ");
        out.push_str(&self.title);
        out.push_str("\n\n");

        if let Some(preamble) = &self.preamble {
            out.push_str("> ");
            out.push_str(preamble);
            out.push_str("\n\n");
        }

        out.push_str("---\n\n");

        out.push_str("## ");
        out.push_str(&self.toc_heading);
        out.push_str("\n\n");
        for section in &self.sections {
            out.push_str("- [");
            out.push_str(&section.title);
            out.push_str("](#");
            out.push_str(&anchor(&section.title));
            out.push_str(")\n");
        }
        out.push_str("\n---\n\n");

        for section in &self.sections {
            out.push_str("## ");
            out.push_str(&section.title);
            out.push_str("\n\n");
            out.push_str(&section.body);
            out.push_str("\n\n---\n\n");
        }

        out
    }
}

/// Anchor for a table-of-contents entry: spaces become dashes, dots drop out
fn anchor(title: &str) -> String {
    title.replace(' ', "-").replace('.', "")
}

/// Locate the main content container of a parsed page: the first `div`
/// with a `content` class, else the first `article`, `main` or `body`,
/// else the root itself.
pub fn content_root(node: &Node) -> &Node {
    if let Some(found) = find_first(node, &|el| el.name() == "div" && has_class(el, "content")) {
        return found;
    }
    for name in ["article", "main", "body"] {
        if let Some(found) = find_first(node, &|el| el.name() == name) {
            return found;
        }
    }
    node
}

fn has_class(element: &Element, class: &str) -> bool {
    element
        .attr("class")
        .is_some_and(|value| value.split_whitespace().any(|token| token == class))
}

fn find_first<'a>(node: &'a Node, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Node> {
    if let Node::Element(element) = node {
        if pred(element) {
            return Some(node);
        }
        for child in element.children() {
            if let Some(found) = find_first(child, pred) {
                return Some(found);
            }
        }
    }
    None
}
