//! Configuration for tree-to-Markdown conversion

/// Options for the converter.
///
/// The defaults replicate the documentation pipeline this library was
/// extracted from: every code fence carries the `python` language hint and
/// images without an `alt` attribute fall back to the literal word "图片".
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Language hint appended to every code fence, regardless of content
    pub fence_language: String,

    /// Alt text used when an `img` carries no `alt` attribute
    pub image_alt_placeholder: String,

    /// Added to every heading's level; the default of 1 keeps heading
    /// level 1 free for the document title supplied by the assembler
    pub heading_offset: u8,

    /// Recursion depth at which conversion fails fast instead of
    /// overflowing the stack on a malformed tree
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            fence_language: "python".to_string(),
            image_alt_placeholder: "图片".to_string(),
            heading_offset: 1,
            max_depth: 512,
        }
    }
}
