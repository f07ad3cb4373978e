//! Re-indent fenced code blocks to match their surrounding list context.
//!
//! The converter emits fences at column 0 even when the fence belongs to a
//! list item. This pass scans backwards from each fence for the nearest
//! context line and shifts the whole block to the indent that context
//! implies.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(- )?```").expect("valid regex"));
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#{1,6}\s").expect("valid regex"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([-*+]|\d+\.)\s").expect("valid regex"));

/// Shift every fenced code block to the indent of its surrounding context:
/// two columns past the nearest list item marker, or column 0 under a
/// heading or plain text.
pub fn reindent_fences(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut output: Vec<String> = Vec::new();
    let mut blocks = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !FENCE.is_match(line) {
            output.push(line.to_string());
            i += 1;
            continue;
        }

        blocks += 1;
        let indent = " ".repeat(target_indent(&lines, i));

        // Opening fence loses its own indent; body lines keep theirs and
        // are shifted as a whole
        output.push(format!("{}{}", indent, line.trim_start()));
        i += 1;
        while i < lines.len() {
            let body = lines[i];
            output.push(format!("{}{}", indent, body));
            i += 1;
            if body.trim_start().starts_with("```") {
                break;
            }
        }
    }

    log::debug!("re-indented {} fenced blocks", blocks);
    output.join("\n")
}

/// Scan backwards for the nearest non-blank line that fixes the indent:
/// a heading or column-0 text resets it to zero, a list item yields the
/// item's own indent plus two. Indented plain lines keep the scan going.
fn target_indent(lines: &[&str], fence_idx: usize) -> usize {
    for prev in lines[..fence_idx].iter().rev() {
        if prev.trim().is_empty() {
            continue;
        }
        if HEADING.is_match(prev) {
            return 0;
        }
        if let Some(caps) = LIST_ITEM.captures(prev) {
            return caps[1].len() + 2;
        }
        if !prev.starts_with(char::is_whitespace) {
            return 0;
        }
    }
    0
}
