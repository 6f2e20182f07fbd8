//! Plain-text rendering for terminals and logs.

use crate::nodes::{Block, Document};

/// Divider line printed for separator blocks.
pub const PLAIN_DIVIDER: &str = "* * *";

/// Render a document as text with delimiters stripped.
///
/// Each paragraph ends with a newline; separators become a divider line.
pub fn render_plain(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => {
                for span in &p.spans {
                    out.push_str(&span.text);
                }
            }
            Block::Separator => out.push_str(PLAIN_DIVIDER),
        }
        out.push('\n');
    }
    out
}
