//! # docdown
//!
//! Convert scraped HTML documentation trees to Markdown.
//!
//! The converter walks an immutable DOM-like node tree and emits Markdown
//! text directly, preserving the conventions of the documentation pipeline
//! it was built for: heading levels are shifted down by one (level 1 is
//! reserved for the document title the assembler adds), code fences always
//! carry a fixed language hint, and list nesting indents two spaces per
//! level — but only for lists nested directly inside a list item.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use docdown::{Converter, Node};
//!
//! let mut heading = Node::element("h2");
//! heading.add_child(Node::text("Quick Start"));
//!
//! let markdown = Converter::new().convert(&heading).unwrap();
//! assert_eq!(markdown, "\n### Quick Start\n\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use docdown::{parse_html, Converter};
//!
//! let node = parse_html("<p>Hello <strong>World</strong></p>");
//! let markdown = Converter::new().convert(&node).unwrap();
//! assert!(markdown.contains("**World**"));
//! ```

pub mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod table;
mod tag;

pub use convert::Converter;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Element, Node};
pub use options::ConvertOptions;
pub use table::convert_table;
pub use tag::Tag;

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The tree nests deeper than [`ConvertOptions::max_depth`]. A tree
    /// that deep is treated as malformed input rather than recursed into.
    #[error("node tree exceeds maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
