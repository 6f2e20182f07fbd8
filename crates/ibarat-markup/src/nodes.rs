//! Parsed document nodes.
//!
//! A [`Document`] is derived from raw ibarat text and never persisted. Spans
//! keep the source ranges of their whole token (delimiters included) so a
//! presentation layer can map rendered content back to the raw text.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::syntax::{Delimiter, SEPARATOR};

/// Style of a rendered span. Styles never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Reference,
}

impl SpanStyle {
    /// Delimiter pair consumed by the parser for this style.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self.delimiter() {
            Some(d) => (d.open(), d.close()),
            None => ("", ""),
        }
    }

    pub fn delimiter(self) -> Option<Delimiter> {
        match self {
            Self::Plain => None,
            Self::Bold => Some(Delimiter::Bold),
            Self::Italic => Some(Delimiter::Italic),
            Self::Reference => Some(Delimiter::Reference),
        }
    }
}

impl From<Delimiter> for SpanStyle {
    fn from(d: Delimiter) -> Self {
        match d {
            Delimiter::Reference => Self::Reference,
            Delimiter::Bold => Self::Bold,
            Delimiter::Italic => Self::Italic,
        }
    }
}

/// A styled run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub style: SpanStyle,
    /// Display text, without delimiters.
    pub text: String,
    /// Byte range of the whole token in the raw text.
    pub byte_range: Range<usize>,
    /// Char range of the whole token in the raw text.
    pub char_range: Range<usize>,
}

impl Span {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The span as it appeared in the raw text.
    pub fn to_markup(&self) -> String {
        let (open, close) = self.style.delimiters();
        let mut out = String::with_capacity(open.len() + self.text.len() + close.len());
        out.push_str(open);
        out.push_str(&self.text);
        out.push_str(close);
        out
    }
}

/// One separator-delimited segment of the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub spans: Vec<Span>,
    /// Source byte range of the segment.
    pub byte_range: Range<usize>,
    /// Source char range of the segment.
    pub char_range: Range<usize>,
}

impl Paragraph {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn to_markup(&self) -> String {
        self.spans.iter().map(Span::to_markup).collect()
    }

    pub fn to_plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    /// Visual divider. Carries no content.
    Separator,
}

impl Block {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Paragraph(p) => Some(p),
            Self::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

/// Parsed ibarat text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.paragraphs().flat_map(|p| p.spans.iter())
    }

    pub fn separator_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_separator()).count()
    }

    /// Rebuild the raw text this document was parsed from.
    pub fn to_markup(&self) -> String {
        self.join_blocks(Paragraph::to_markup)
    }

    /// Span texts with delimiters stripped and separators kept.
    pub fn to_plain_text(&self) -> String {
        self.join_blocks(Paragraph::to_plain_text)
    }

    fn join_blocks(&self, para: impl Fn(&Paragraph) -> String) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(p) => out.push_str(&para(p)),
                Block::Separator => out.push_str(SEPARATOR),
            }
        }
        out
    }
}
