//! # docdown-assemble
//!
//! Assembly and post-processing for Markdown produced by [`docdown`].
//!
//! The assembler stitches per-page Markdown into one document with a title
//! and a table of contents. The post-processing passes then tidy the result
//! the way the original pipeline did: blank-line normalization, code fence
//! re-indentation against the surrounding list context, and rewriting of
//! scraped external links into intra-document anchors.
//!
//! ```rust
//! use docdown_assemble::DocumentBuilder;
//!
//! let mut builder = DocumentBuilder::new("API Reference");
//! builder.section("Quick Start", "Install the package.\n");
//! let document = builder.build();
//! assert!(document.starts_with("# API Reference\n"));
//! ```

mod assemble;
mod fences;
mod format;
mod links;

pub use assemble::{content_root, DocumentBuilder, Section};
pub use fences::reindent_fences;
pub use format::normalize_blank_lines;
pub use links::{LinkFixer, DEFAULT_NEW_WINDOW_MARKER};

/// Run every post-processing pass in pipeline order: blank-line
/// normalization, fence re-indentation, then link rewriting.
pub fn postprocess(content: &str) -> String {
    let formatted = normalize_blank_lines(content);
    let indented = reindent_fences(&formatted);
    LinkFixer::new().fix(&indented)
}
