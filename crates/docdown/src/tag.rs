//! Closed enumeration of the tags the converter recognizes.
//!
//! Anything outside this set maps to [`Tag::Unknown`] and takes the
//! default pass-through branch during conversion.

/// A recognized HTML tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Pre,
    Code,
    Ul,
    Ol,
    Li,
    Img,
    A,
    Strong,
    B,
    Em,
    I,
    Br,
    Table,
    Tr,
    Th,
    Td,
    Div,
    Section,
    Article,
    Span,
    Script,
    Style,
    Nav,
    Header,
    Footer,
    Aside,
    /// Any tag outside the recognized set
    Unknown,
}

impl Tag {
    /// Map a tag name to its variant. Case-insensitive.
    pub fn from_name(name: &str) -> Tag {
        match name.to_lowercase().as_str() {
            "h1" => Tag::H1,
            "h2" => Tag::H2,
            "h3" => Tag::H3,
            "h4" => Tag::H4,
            "h5" => Tag::H5,
            "h6" => Tag::H6,
            "p" => Tag::P,
            "pre" => Tag::Pre,
            "code" => Tag::Code,
            "ul" => Tag::Ul,
            "ol" => Tag::Ol,
            "li" => Tag::Li,
            "img" => Tag::Img,
            "a" => Tag::A,
            "strong" => Tag::Strong,
            "b" => Tag::B,
            "em" => Tag::Em,
            "i" => Tag::I,
            "br" => Tag::Br,
            "table" => Tag::Table,
            "tr" => Tag::Tr,
            "th" => Tag::Th,
            "td" => Tag::Td,
            "div" => Tag::Div,
            "section" => Tag::Section,
            "article" => Tag::Article,
            "span" => Tag::Span,
            "script" => Tag::Script,
            "style" => Tag::Style,
            "nav" => Tag::Nav,
            "header" => Tag::Header,
            "footer" => Tag::Footer,
            "aside" => Tag::Aside,
            _ => Tag::Unknown,
        }
    }

    /// Heading level for `h1`..`h6`
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Tag::H1 => Some(1),
            Tag::H2 => Some(2),
            Tag::H3 => Some(3),
            Tag::H4 => Some(4),
            Tag::H5 => Some(5),
            Tag::H6 => Some(6),
            _ => None,
        }
    }
}
