//! HTML parsing support.
//!
//! Parses HTML strings with `scraper` and maps the result onto the node
//! model in [`crate::node`]. Text is carried through raw (the converter
//! trims it) and comments are kept as comment nodes so the converter's
//! comment handling sees real input.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a [`Node`] tree.
///
/// # Example
///
/// ```rust
/// use docdown::{parse_html, Converter};
///
/// let node = parse_html("<h2>Hello <em>World</em></h2>");
/// let markdown = Converter::new().convert(&node).unwrap();
/// assert!(markdown.contains("Hello"));
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    element_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our node structure
fn element_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(element.value().name())
    } else {
        Node::element_with_attrs(element.value().name(), attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(element_to_node(child_element));
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
    use crate::Converter;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        let element = node.as_element().unwrap();
        assert_eq!(element.name(), "html");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_and_convert() {
        let node = parse_html("<p>Hello <strong>World</strong></p>");
        let result = Converter::new().convert(&node).unwrap();
        assert_eq!(result, "Hello **World**\n\n");
    }

    #[test]
    fn test_parse_attributes() {
        let node = parse_html(r#"<a href="https://example.com">Link</a>"#);
        let result = Converter::new().convert(&node).unwrap();
        assert_eq!(result, "[Link](https://example.com)");
    }

    #[test]
    fn test_parsed_comments_are_skipped() {
        let node = parse_html("<div><!-- hidden -->visible</div>");
        let result = Converter::new().convert(&node).unwrap();
        assert!(!result.contains("hidden"));
        assert!(result.contains("visible"));
    }

    #[test]
    fn test_parse_nested_list() {
        let node = parse_html("<ul><li>A<ul><li>B</li></ul></li></ul>");
        let result = Converter::new().convert(&node).unwrap();
        assert!(result.contains("\n- A \n"));
        assert!(result.contains("\n  - B \n"));
    }
}
