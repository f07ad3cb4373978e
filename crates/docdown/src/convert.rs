//! The tree-to-Markdown converter.
//!
//! A pure recursive walk over an immutable node tree: output is a function
//! of the node, the list nesting level and the options, with no shared
//! state across calls. Children are always visited in document order.

use crate::node::{Element, Node};
use crate::options::ConvertOptions;
use crate::table::convert_table;
use crate::tag::Tag;
use crate::{ConvertError, Result};

/// Converts node trees to Markdown text.
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Convert the subtree rooted at `node` to Markdown
    pub fn convert(&self, node: &Node) -> Result<String> {
        self.convert_at(node, 0)
    }

    /// Convert the subtree rooted at `node` at a given list nesting level
    pub fn convert_at(&self, node: &Node, list_level: usize) -> Result<String> {
        let mut out = String::new();
        match node {
            Node::Comment(_) => {}
            Node::Text(text) => push_text(text, &mut out),
            Node::Element(element) => self.element(element, None, list_level, 0, &mut out)?,
        }
        Ok(out)
    }

    /// Convert the children of `element`, appending to `out`. Text nodes
    /// become space-terminated tokens; comments contribute nothing.
    fn children(
        &self,
        element: &Element,
        list_level: usize,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        for child in element.children() {
            match child {
                Node::Comment(_) => {}
                Node::Text(text) => push_text(text, out),
                Node::Element(inner) => {
                    self.element(inner, Some(element.tag()), list_level, depth, out)?
                }
            }
        }
        Ok(())
    }

    fn children_to_string(
        &self,
        element: &Element,
        list_level: usize,
        depth: usize,
    ) -> Result<String> {
        let mut out = String::new();
        self.children(element, list_level, depth, &mut out)?;
        Ok(out)
    }

    fn element(
        &self,
        element: &Element,
        parent: Option<Tag>,
        list_level: usize,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(ConvertError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }

        match element.tag() {
            Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4 | Tag::H5 | Tag::H6 => {
                // Shift the level down so the assembler's document title
                // keeps level 1 to itself
                let level = element.tag().heading_level().unwrap_or(1) + self.options.heading_offset;
                out.push('\n');
                out.push_str(&"#".repeat(usize::from(level)));
                out.push(' ');
                out.push_str(element.text_content().trim());
                out.push_str("\n\n");
            }

            Tag::P => {
                let content = self.children_to_string(element, list_level, depth + 1)?;
                out.push_str(content.trim());
                out.push_str("\n\n");
            }

            Tag::Pre | Tag::Code => {
                let code = element.text_content();
                // A pre tag, or any code spanning lines, becomes a fence;
                // single-line bare code stays inline
                if element.tag() == Tag::Pre || code.contains('\n') {
                    out.push_str("```");
                    out.push_str(&self.options.fence_language);
                    out.push('\n');
                    out.push_str(&code);
                    out.push_str("\n```\n\n");
                } else {
                    out.push('`');
                    out.push_str(&code);
                    out.push('`');
                }
            }

            Tag::Ul | Tag::Ol => {
                out.push('\n');
                let ordered = element.tag() == Tag::Ol;
                // Indent grows only when this list sits directly inside a
                // list item; any other container keeps the level unchanged
                let item_level = if parent == Some(Tag::Li) {
                    list_level + 1
                } else {
                    list_level
                };
                let indent = "  ".repeat(item_level);

                let mut index = 0usize;
                for item in element.element_children().filter(|c| c.tag() == Tag::Li) {
                    index += 1;
                    let content = self.children_to_string(item, item_level, depth + 1)?;
                    out.push_str(&indent);
                    if ordered {
                        out.push_str(&index.to_string());
                        out.push_str(". ");
                    } else {
                        out.push_str("- ");
                    }
                    out.push_str(content.trim_start());
                    out.push('\n');
                }
                out.push('\n');
            }

            Tag::Img => {
                let alt = element
                    .attr("alt")
                    .unwrap_or(self.options.image_alt_placeholder.as_str());
                let src = element.attr("src").unwrap_or("");
                out.push_str("![");
                out.push_str(alt);
                out.push_str("](");
                out.push_str(src);
                out.push_str(")\n\n");
            }

            Tag::A => {
                let content = self.children_to_string(element, list_level, depth + 1)?;
                let mut text = content.trim().to_string();
                // Children may be pure markup (e.g. a wrapped image the
                // page dropped); fall back to the raw text content
                if text.is_empty() {
                    text = element.text_content().trim().to_string();
                }
                match element.attr("href") {
                    Some(href) if !href.is_empty() => {
                        out.push('[');
                        out.push_str(&text);
                        out.push_str("](");
                        out.push_str(href);
                        out.push(')');
                    }
                    _ => out.push_str(&text),
                }
            }

            Tag::Strong | Tag::B => {
                let content = self.children_to_string(element, list_level, depth + 1)?;
                out.push_str("**");
                out.push_str(content.trim());
                out.push_str("**");
            }

            Tag::Em | Tag::I => {
                let content = self.children_to_string(element, list_level, depth + 1)?;
                out.push('*');
                out.push_str(content.trim());
                out.push('*');
            }

            Tag::Br => out.push('\n'),

            Tag::Table => out.push_str(&convert_table(element)),

            Tag::Div | Tag::Section | Tag::Article => {
                self.children(element, list_level, depth + 1, out)?;
                out.push('\n');
            }

            Tag::Span => self.children(element, list_level, depth + 1, out)?,

            Tag::Script | Tag::Style | Tag::Nav | Tag::Header | Tag::Footer | Tag::Aside => {}

            // Everything else passes its content through unwrapped, but
            // only when that content carries something visible
            Tag::Li | Tag::Tr | Tag::Th | Tag::Td | Tag::Unknown => {
                let inner = self.children_to_string(element, list_level, depth + 1)?;
                if !inner.trim().is_empty() {
                    out.push_str(&inner);
                }
            }
        }

        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_text(text: &str, out: &mut String) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        out.push_str(trimmed);
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(node: &Node) -> String {
        Converter::new().convert(node).unwrap()
    }

    fn element_with_text(tag: &str, text: &str) -> Node {
        let mut node = Node::element(tag);
        node.add_child(Node::text(text));
        node
    }

    #[test]
    fn test_text_node_is_space_terminated() {
        let node = Node::text("  Hello  ");
        assert_eq!(convert(&node), "Hello ");
    }

    #[test]
    fn test_blank_text_node_emits_nothing() {
        let node = Node::text("   \n  ");
        assert_eq!(convert(&node), "");
    }

    #[test]
    fn test_heading_level_offset() {
        let node = element_with_text("h2", "Title");
        assert_eq!(convert(&node), "\n### Title\n\n");
    }

    #[test]
    fn test_h1_becomes_level_two() {
        let node = element_with_text("h1", " Top ");
        assert_eq!(convert(&node), "\n## Top\n\n");
    }

    #[test]
    fn test_paragraph() {
        let mut p = Node::element("p");
        p.add_child(Node::text("Hello "));
        let mut strong = Node::element("strong");
        strong.add_child(Node::text("World"));
        p.add_child(strong);
        assert_eq!(convert(&p), "Hello **World**\n\n");
    }

    #[test]
    fn test_pre_always_fenced() {
        let node = element_with_text("pre", "x = 1\ny = 2");
        assert_eq!(convert(&node), "```python\nx = 1\ny = 2\n```\n\n");
    }

    #[test]
    fn test_single_line_pre_still_fenced() {
        let node = element_with_text("pre", "x = 1");
        assert_eq!(convert(&node), "```python\nx = 1\n```\n\n");
    }

    #[test]
    fn test_inline_code() {
        let node = element_with_text("code", "get_trade_detail()");
        assert_eq!(convert(&node), "`get_trade_detail()`");
    }

    #[test]
    fn test_multiline_code_becomes_fence() {
        let node = element_with_text("code", "a = 1\nb = 2");
        assert_eq!(convert(&node), "```python\na = 1\nb = 2\n```\n\n");
    }

    #[test]
    fn test_fence_language_is_configurable() {
        let options = ConvertOptions {
            fence_language: "text".to_string(),
            ..Default::default()
        };
        let converter = Converter::with_options(options);
        let node = element_with_text("pre", "raw");
        assert_eq!(converter.convert(&node).unwrap(), "```text\nraw\n```\n\n");
    }

    #[test]
    fn test_unordered_list() {
        let mut ul = Node::element("ul");
        ul.add_child(element_with_text("li", "A"));
        ul.add_child(element_with_text("li", "B"));
        assert_eq!(convert(&ul), "\n- A \n- B \n\n");
    }

    #[test]
    fn test_ordered_list_indices_are_one_based() {
        let mut ol = Node::element("ol");
        ol.add_child(element_with_text("li", "First"));
        ol.add_child(element_with_text("li", "Second"));
        assert_eq!(convert(&ol), "\n1. First \n2. Second \n\n");
    }

    #[test]
    fn test_nested_list_indents_two_spaces() {
        let mut inner = Node::element("ul");
        inner.add_child(element_with_text("li", "B"));
        let mut li = Node::element("li");
        li.add_child(Node::text("A"));
        li.add_child(inner);
        let mut ul = Node::element("ul");
        ul.add_child(li);

        let result = convert(&ul);
        assert!(result.starts_with("\n- A \n"));
        assert!(result.contains("\n  - B \n"));
    }

    #[test]
    fn test_list_inside_div_does_not_indent() {
        let mut ul = Node::element("ul");
        ul.add_child(element_with_text("li", "A"));
        let mut div = Node::element("div");
        div.add_child(ul);

        let result = convert(&div);
        assert!(result.contains("\n- A \n"));
        assert!(!result.contains("  - A"));
    }

    #[test]
    fn test_list_ignores_non_li_children() {
        let mut ul = Node::element("ul");
        ul.add_child(element_with_text("li", "A"));
        ul.add_child(element_with_text("p", "stray"));
        assert_eq!(convert(&ul), "\n- A \n\n");
    }

    #[test]
    fn test_image_with_attrs() {
        let node = Node::element_with_attrs("img", vec![("src", "images/a.png"), ("alt", "chart")]);
        assert_eq!(convert(&node), "![chart](images/a.png)\n\n");
    }

    #[test]
    fn test_image_alt_placeholder() {
        let node = Node::element_with_attrs("img", vec![("src", "images/a.png")]);
        assert_eq!(convert(&node), "![图片](images/a.png)\n\n");
    }

    #[test]
    fn test_image_without_src() {
        let node = Node::element_with_attrs("img", vec![("alt", "chart")]);
        assert_eq!(convert(&node), "![chart]()\n\n");
    }

    #[test]
    fn test_link_with_href() {
        let mut a = Node::element_with_attrs("a", vec![("href", "https://example.com")]);
        a.add_child(Node::text("Link"));
        assert_eq!(convert(&a), "[Link](https://example.com)");
    }

    #[test]
    fn test_link_with_empty_href_emits_plain_text() {
        let mut a = Node::element_with_attrs("a", vec![("href", "")]);
        a.add_child(Node::text("text"));
        assert_eq!(convert(&a), "text");
    }

    #[test]
    fn test_link_without_href_emits_plain_text() {
        let mut a = Node::element("a");
        a.add_child(Node::text("text"));
        assert_eq!(convert(&a), "text");
    }

    #[test]
    fn test_link_falls_back_to_raw_text() {
        // The recursive conversion of a nav/script child yields nothing,
        // so the link text falls back to the raw text content
        let mut nav = Node::element("nav");
        nav.add_child(Node::text("Home"));
        let mut a = Node::element_with_attrs("a", vec![("href", "u")]);
        a.add_child(nav);
        assert_eq!(convert(&a), "[Home](u)");
    }

    #[test]
    fn test_strong_and_em() {
        let strong = element_with_text("b", " bold ");
        assert_eq!(convert(&strong), "**bold**");

        let em = element_with_text("i", " italic ");
        assert_eq!(convert(&em), "*italic*");
    }

    #[test]
    fn test_br() {
        assert_eq!(convert(&Node::element("br")), "\n");
    }

    #[test]
    fn test_block_containers_append_newline() {
        let mut div = Node::element("div");
        div.add_child(Node::text("x"));
        assert_eq!(convert(&div), "x \n");

        let mut span = Node::element("span");
        span.add_child(Node::text("x"));
        assert_eq!(convert(&span), "x ");
    }

    #[test]
    fn test_skipped_tags_contribute_nothing() {
        for tag in ["script", "style", "nav", "header", "footer", "aside"] {
            let mut node = Node::element(tag);
            node.add_child(Node::text("invisible"));
            assert_eq!(convert(&node), "", "tag {} should be skipped", tag);
        }
    }

    #[test]
    fn test_skipped_tag_descendants_are_skipped() {
        let mut inner = Node::element("p");
        inner.add_child(Node::text("invisible"));
        let mut nav = Node::element("nav");
        nav.add_child(inner);
        let mut div = Node::element("div");
        div.add_child(nav);
        assert_eq!(convert(&div), "\n");
    }

    #[test]
    fn test_unknown_tag_passes_content_through() {
        let mut node = Node::element("figure");
        node.add_child(element_with_text("p", "caption"));
        assert_eq!(convert(&node), "caption\n\n");
    }

    #[test]
    fn test_empty_unknown_tag_emits_nothing() {
        let node = Node::element("figure");
        assert_eq!(convert(&node), "");
    }

    #[test]
    fn test_comments_never_appear() {
        let mut div = Node::element("div");
        div.add_child(Node::comment("secret"));
        div.add_child(Node::text("visible"));
        let mut p = Node::element("p");
        p.add_child(Node::comment("also secret"));
        p.add_child(Node::text("body"));
        div.add_child(p);

        let result = convert(&div);
        assert!(!result.contains("secret"));
        assert!(result.contains("visible"));
        assert!(result.contains("body"));
    }

    #[test]
    fn test_table_delegation() {
        let mut tr = Node::element("tr");
        tr.add_child(element_with_text("td", "a"));
        tr.add_child(element_with_text("td", "b"));
        let mut table = Node::element("table");
        table.add_child(tr);

        assert_eq!(convert(&table), "\n| a | b |\n| --- | --- |\n\n");
    }

    #[test]
    fn test_idempotence() {
        let mut ul = Node::element("ul");
        let mut li = Node::element("li");
        li.add_child(Node::text("A"));
        let mut inner = Node::element("ol");
        inner.add_child(element_with_text("li", "B"));
        li.add_child(inner);
        ul.add_child(li);

        let converter = Converter::new();
        let first = converter.convert(&ul).unwrap();
        let second = converter.convert(&ul).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_at_applies_list_level() {
        let mut ul = Node::element("ul");
        ul.add_child(element_with_text("li", "A"));
        let result = Converter::new().convert_at(&ul, 2).unwrap();
        assert_eq!(result, "\n    - A \n\n");
    }

    #[test]
    fn test_depth_limit_fails_fast() {
        let mut node = element_with_text("div", "leaf");
        for _ in 0..10 {
            let mut parent = Node::element("div");
            parent.add_child(node);
            node = parent;
        }

        let options = ConvertOptions {
            max_depth: 4,
            ..Default::default()
        };
        let converter = Converter::with_options(options);
        assert!(matches!(
            converter.convert(&node),
            Err(ConvertError::DepthExceeded { limit: 4 })
        ));
    }
}
