//! Plain-text transcript of an issue and its comment thread.

use crate::issue::models::Author;
use crate::issue::Issue;
use crate::shared::text::{display_width, wrap_text};

/// Width of attribution lines, and the default wrap column.
pub const TRANSCRIPT_WIDTH: usize = 69;

/// Dashes kept before an attribution that is wider than the line.
const MIN_ATTRIBUTION_DASHES: usize = 3;

/// Render `issue` as:
///
/// ```text
/// owner/repo#1(open) Title
/// ========================
/// Issue body
/// ------------------------------------- @author at 2024-01-01T00:00:00Z
///
/// Comment body, wrapped at `wrap_width`
/// ---------------------------------- @commenter at 2024-01-02T00:00:00Z
/// ```
pub fn render_transcript(issue: &Issue, wrap_width: usize) -> String {
    let mut output = String::new();

    let header = format!("{}({}) {}", issue.reference, issue.status(), issue.title);
    output.push_str(&format!("{header}\n"));
    output.push_str(&format!("{}\n", "=".repeat(display_width(&header))));

    push_body(&mut output, &normalize_newlines(&issue.body));
    output.push_str(&format!("{}\n", attribution(&issue.author, &issue.created_at)));

    for comment in &issue.comments {
        output.push('\n');
        push_body(&mut output, &wrap_text(&comment.body, wrap_width));
        output.push_str(&format!("{}\n", attribution(&comment.author, &comment.created_at)));
    }

    output
}

fn push_body(output: &mut String, body: &str) {
    let body = body.trim_end();
    if !body.is_empty() {
        output.push_str(body);
        output.push('\n');
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// `@login at timestamp`, right-aligned in a `TRANSCRIPT_WIDTH` field
/// padded with dashes.
fn attribution(author: &Author, created_at: &str) -> String {
    let text = format!("@{} at {}", author.login, created_at);
    let dashes = TRANSCRIPT_WIDTH
        .saturating_sub(display_width(&text) + 1)
        .max(MIN_ATTRIBUTION_DASHES);
    format!("{} {}", "-".repeat(dashes), text)
}
