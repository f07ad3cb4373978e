//! Rewrite scraped external links into intra-document anchors.
//!
//! The vendor site renders cross-references as external links whose text
//! carries an "opens in new window" marker. Once the pages are merged into
//! one document those links should point at the matching heading instead.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches headings as the converter emits them for this site, e.g.
/// `#### # get_trade_detail` — the inner `#` is a scraping artifact the
/// pattern keys on
static ARTIFACT_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#+\s+#\s+(.*)$").expect("valid regex"));

/// Marker the vendor site appends to external link text
pub const DEFAULT_NEW_WINDOW_MARKER: &str = "在新窗口打开";

/// Rewrites marked external links into anchors pointing at headings found
/// in the same document.
pub struct LinkFixer {
    link: Regex,
}

impl LinkFixer {
    /// Create a fixer using [`DEFAULT_NEW_WINDOW_MARKER`]
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_NEW_WINDOW_MARKER)
    }

    /// Create a fixer for a custom marker
    pub fn with_marker(marker: &str) -> Self {
        let pattern = format!(r"\[(.*?)\s+{}\]\(.*?\)", regex::escape(marker));
        Self {
            link: Regex::new(&pattern).expect("valid regex"),
        }
    }

    /// Rewrite every marked link whose text matches a heading into an
    /// anchor. Links with no matching heading are left untouched.
    pub fn fix(&self, content: &str) -> String {
        let headings = collect_headings(content);
        log::debug!("found {} headings for link rewriting", headings.len());

        self.link
            .replace_all(content, |caps: &Captures| {
                let text = caps[1].trim().to_string();
                match best_heading(&headings, &text) {
                    Some(heading) => format!("[{}](#-{})", text, heading),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl Default for LinkFixer {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_headings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            ARTIFACT_HEADING
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
        })
        .collect()
}

/// Prefer a heading that ends with the link text; otherwise take the first
/// heading containing it
fn best_heading<'a>(headings: &'a [String], text: &str) -> Option<&'a String> {
    let candidates: Vec<&String> = headings.iter().filter(|h| h.contains(text)).collect();
    candidates
        .iter()
        .find(|h| h.ends_with(text))
        .copied()
        .or_else(|| candidates.first().copied())
}
