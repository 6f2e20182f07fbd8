//! The ibarat markup parser.
//!
//! Single left-to-right pass, no recursion. Delimiter content is taken
//! literally, so `[**x**]` is one reference span reading `**x**`. Stored
//! entries depend on this: a nesting grammar would change how existing
//! content renders.

use crate::nodes::{Block, Document, Paragraph, Span, SpanStyle};
use crate::syntax::{Delimiter, SEPARATOR, is_delimiter_start};

/// Parse raw ibarat text into a document.
///
/// Never fails. Unterminated delimiters degrade to plain text.
pub fn parse(text: &str) -> Document {
    let separator_chars = SEPARATOR.chars().count();
    let mut blocks = Vec::new();
    let mut byte_offset = 0;
    let mut char_offset = 0;

    for (i, segment) in text.split(SEPARATOR).enumerate() {
        if i > 0 {
            blocks.push(Block::Separator);
            byte_offset += SEPARATOR.len();
            char_offset += separator_chars;
        }
        let paragraph = parse_paragraph(segment, byte_offset, char_offset);
        byte_offset = paragraph.byte_range.end;
        char_offset = paragraph.char_range.end;
        blocks.push(Block::Paragraph(paragraph));
    }

    tracing::trace!(
        target: "ibarat::parse",
        source_len = text.len(),
        blocks = blocks.len(),
        "parsed ibarat text"
    );

    Document { blocks }
}

/// Tokenize one separator-free segment into spans.
///
/// `base_byte` and `base_char` locate the segment inside the raw text.
pub fn parse_paragraph(segment: &str, base_byte: usize, base_char: usize) -> Paragraph {
    let mut tokens = Tokenizer::new(segment, base_byte, base_char);
    let bytes = segment.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        // Delimiters are ASCII, so stepping bytewise never matches inside a
        // multi-byte char.
        if !is_delimiter_start(bytes[pos]) {
            pos += 1;
            continue;
        }
        let rest = &segment[pos..];
        let Some(delim) = Delimiter::at(rest) else {
            pos += 1;
            continue;
        };
        match delim.match_at(rest) {
            Some((content_len, token_len)) => {
                let open = delim.open().len();
                tokens.flush_plain(pos);
                tokens.push(
                    delim.into(),
                    &rest[open..open + content_len],
                    pos,
                    pos + token_len,
                );
                pos += token_len;
            }
            // Unterminated: the opener stays in the plain run.
            None => pos += delim.open().len(),
        }
    }
    tokens.flush_plain(bytes.len());

    tokens.finish()
}

struct Tokenizer<'a> {
    segment: &'a str,
    base_byte: usize,
    base_char: usize,
    spans: Vec<Span>,
    /// Start of the pending plain run (segment byte offset).
    plain_start: usize,
    /// Last (byte, char) position converted, for incremental counting.
    cursor: (usize, usize),
}

impl<'a> Tokenizer<'a> {
    fn new(segment: &'a str, base_byte: usize, base_char: usize) -> Self {
        Self {
            segment,
            base_byte,
            base_char,
            spans: Vec::new(),
            plain_start: 0,
            cursor: (0, 0),
        }
    }

    /// Char offset within the segment for a byte offset at or after the
    /// last converted one.
    fn char_at_byte(&mut self, byte: usize) -> usize {
        let (last_byte, last_char) = self.cursor;
        let chars = last_char + self.segment[last_byte..byte].chars().count();
        self.cursor = (byte, chars);
        chars
    }

    fn push(&mut self, style: SpanStyle, text: &str, start: usize, end: usize) {
        let char_start = self.char_at_byte(start);
        let char_end = self.char_at_byte(end);
        self.spans.push(Span {
            style,
            text: text.to_string(),
            byte_range: self.base_byte + start..self.base_byte + end,
            char_range: self.base_char + char_start..self.base_char + char_end,
        });
        self.plain_start = end;
    }

    fn flush_plain(&mut self, end: usize) {
        let start = self.plain_start;
        if start < end {
            let text = &self.segment[start..end];
            self.push(SpanStyle::Plain, text, start, end);
        }
        self.plain_start = end;
    }

    fn finish(mut self) -> Paragraph {
        let end_byte = self.segment.len();
        let end_char = self.char_at_byte(end_byte);
        Paragraph {
            spans: self.spans,
            byte_range: self.base_byte..self.base_byte + end_byte,
            char_range: self.base_char..self.base_char + end_char,
        }
    }
}
