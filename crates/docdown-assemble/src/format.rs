//! Blank-line normalization for assembled Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#{1,6}\s").expect("valid regex"));
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*_]{3,}\s*$").expect("valid regex"));
static EXTRA_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Insert blank lines before headings, fences and horizontal rules where
/// missing, drop repeated blank lines, and leave code block interiors
/// untouched. List, table and plain text lines pass through unchanged.
pub fn normalize_blank_lines(content: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut in_code_block = false;
    let mut last_line_was_blank = true;

    for line in content.lines() {
        let stripped = line.trim();

        if stripped.starts_with("```") {
            if !in_code_block {
                if !last_line_was_blank && !output.is_empty() {
                    output.push(String::new());
                }
                output.push(line.to_string());
                in_code_block = true;
            } else {
                output.push(line.to_string());
                in_code_block = false;
            }
            last_line_was_blank = false;
            continue;
        }

        if in_code_block {
            output.push(line.to_string());
            last_line_was_blank = false;
            continue;
        }

        if HEADING.is_match(line) {
            if !last_line_was_blank && !output.is_empty() {
                output.push(String::new());
            }
            output.push(line.to_string());
            last_line_was_blank = false;
        } else if HORIZONTAL_RULE.is_match(line) {
            if !last_line_was_blank && !output.is_empty() {
                output.push(String::new());
            }
            output.push(line.to_string());
            output.push(String::new());
            last_line_was_blank = true;
        } else if stripped.is_empty() {
            if !last_line_was_blank {
                output.push(String::new());
            }
            last_line_was_blank = true;
        } else {
            output.push(line.to_string());
            last_line_was_blank = false;
        }
    }

    let joined = output.join("\n");
    EXTRA_BLANKS.replace_all(&joined, "\n\n").into_owned()
}
