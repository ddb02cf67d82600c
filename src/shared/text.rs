//! Text layout helpers for terminal transcripts.
//!
//! Widths are Unicode display widths, so CJK characters count as two
//! columns.

use unicode_width::UnicodeWidthStr;

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Word-wraps prose to `max_width` columns.
///
/// Blank lines are kept as paragraph breaks. Indented lines and lines
/// inside ``` fences are copied verbatim, since reflowing code or nested
/// lists would change their meaning. A single word wider than
/// `max_width` is placed on its own line rather than split.
pub fn wrap_text(text: &str, max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in text.lines() {
        let is_fence = line.trim_start().starts_with("```");
        if is_fence {
            in_fence = !in_fence;
        }

        if is_fence || in_fence || line.starts_with([' ', '\t']) || line.trim().is_empty() {
            lines.push(line.trim_end().to_string());
        } else {
            lines.extend(wrap_line(line, max_width));
        }
    }

    lines.join("\n")
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
