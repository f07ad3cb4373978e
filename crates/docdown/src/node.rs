//! DOM-like node model for parsed documentation pages.
//!
//! Trees are owned: children are held by value, so a tree is acyclic by
//! construction and the converter can borrow it immutably. Any HTML parser
//! can map its output onto this structure.

use indexmap::IndexMap;

use crate::tag::Tag;

/// A single node in a parsed HTML document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a tag name, attributes and children
    Element(Element),
    /// A text leaf
    Text(String),
    /// A comment leaf; contributes nothing to any output
    Comment(String),
}

/// An element node: lowercase tag name, attribute map, children in
/// document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    tag: Tag,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(name: &str) -> Self {
        Node::Element(Element::new(name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(name);
        for (key, value) in attrs {
            element.attrs.insert(key.to_string(), value.to_string());
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// View this node as an element, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Append a child node. Has no effect on text and comment nodes.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Get all text content from this node and its descendants, ignoring
    /// markup and comments
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Comment(_) => String::new(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl Element {
    fn new(name: &str) -> Self {
        let name = name.to_lowercase();
        Self {
            tag: Tag::from_name(&name),
            name,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// The lowercase tag name, including names outside the recognized set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The recognized tag, or [`Tag::Unknown`]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Child nodes in document order
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Only the element children, in document order
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
