//! HtmlWriter - HTML generation for parsed ibarat documents.
//!
//! One segment is produced per block, so callers can either join them into a
//! single fragment or keep them apart for paragraph-level updates.

mod plain;

#[cfg(test)]
mod tests;

pub use plain::render_plain;

use std::convert::Infallible;
use std::fmt;

use markdown_weaver_escape::{StrWrite, escape_html, escape_html_body_text};

use crate::nodes::{Block, Document, Paragraph, Span, SpanStyle};
use crate::paragraph::{ParagraphRender, hash_source, make_paragraph_id};
use crate::render::{RenderOptions, StyleClassProvider};

/// Segmented HTML output writer.
#[derive(Debug, Clone, Default)]
pub struct SegmentedWriter {
    segments: Vec<String>,
    current: String,
}

impl SegmentedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_segment(&mut self) {
        if !self.current.is_empty() {
            self.segments.push(std::mem::take(&mut self.current));
        }
    }

    pub fn into_segments(mut self) -> Vec<String> {
        self.new_segment();
        self.segments
    }
}

impl StrWrite for SegmentedWriter {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.current.push_str(s);
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Infallible> {
        self.current.push_str(&fmt::format(args));
        Ok(())
    }
}

/// HTML writer for ibarat documents.
///
/// Generic over:
/// - `W`: output sink
/// - `C`: extra CSS classes per style (optional)
pub struct HtmlWriter<'o, W, C = ()> {
    writer: W,
    options: &'o RenderOptions,
    classes: C,
}

impl<'o, W: StrWrite> HtmlWriter<'o, W, ()> {
    pub fn new(writer: W, options: &'o RenderOptions) -> Self {
        Self {
            writer,
            options,
            classes: (),
        }
    }
}

impl<'o, W: StrWrite, C: StyleClassProvider> HtmlWriter<'o, W, C> {
    pub fn with_classes<C2: StyleClassProvider>(self, classes: C2) -> HtmlWriter<'o, W, C2> {
        HtmlWriter {
            writer: self.writer,
            options: self.options,
            classes,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_document(&mut self, doc: &Document) -> Result<(), W::Error>
    where
        W: SegmentSink,
    {
        for block in &doc.blocks {
            match block {
                Block::Paragraph(p) => self.write_paragraph(p)?,
                Block::Separator => self.writer.write_str("<hr />\n")?,
            }
            self.writer.end_segment();
        }
        Ok(())
    }

    pub fn write_paragraph(&mut self, para: &Paragraph) -> Result<(), W::Error> {
        self.writer.write_str("<p dir=\"")?;
        self.writer.write_str(self.options.direction.as_html_attr())?;
        self.writer.write_str("\">")?;
        for span in &para.spans {
            if self.options.elide_empty_spans && span.is_empty() {
                continue;
            }
            self.write_span(span)?;
        }
        self.writer.write_str("</p>\n")
    }

    fn write_span(&mut self, span: &Span) -> Result<(), W::Error> {
        let extra = self.classes.class_for(span.style);
        let (tag, base_class) = match span.style {
            SpanStyle::Plain => ("span", None),
            SpanStyle::Bold => ("strong", None),
            SpanStyle::Italic => ("em", None),
            SpanStyle::Reference => ("span", Some(self.options.reference_class.as_str())),
        };

        // Unstyled plain text needs no element.
        if span.style == SpanStyle::Plain && extra.is_none() {
            return escape_html_body_text(&mut self.writer, &span.text);
        }

        self.writer.write_str("<")?;
        self.writer.write_str(tag)?;
        let classes: Vec<&str> = base_class.into_iter().chain(extra).collect();
        if !classes.is_empty() {
            self.writer.write_str(" class=\"")?;
            escape_html(&mut self.writer, &classes.join(" "))?;
            self.writer.write_str("\"")?;
        }
        self.writer.write_str(">")?;
        escape_html_body_text(&mut self.writer, &span.text)?;
        self.writer.write_str("</")?;
        self.writer.write_str(tag)?;
        self.writer.write_str(">")
    }
}

/// Sinks that can split output into per-block segments.
pub trait SegmentSink: StrWrite {
    fn end_segment(&mut self) {}
}

impl SegmentSink for SegmentedWriter {
    fn end_segment(&mut self) {
        self.new_segment();
    }
}

/// Render a document to one HTML segment per block.
pub fn render_segments<C: StyleClassProvider>(
    doc: &Document,
    options: &RenderOptions,
    classes: C,
) -> Vec<String> {
    let mut writer = HtmlWriter::new(SegmentedWriter::new(), options).with_classes(classes);
    let Ok(()) = writer.write_document(doc);
    writer.into_inner().into_segments()
}

/// Render a document to a single HTML fragment.
pub fn render_html(doc: &Document, options: &RenderOptions) -> String {
    render_segments(doc, options, ()).concat()
}

/// Render each paragraph to its own [`ParagraphRender`]. Separators are
/// skipped; they carry no content to diff.
pub fn render_paragraphs<C: StyleClassProvider>(
    doc: &Document,
    options: &RenderOptions,
    classes: C,
) -> Vec<ParagraphRender> {
    let segments = render_segments(doc, options, classes);
    doc.blocks
        .iter()
        .zip(segments)
        .filter_map(|(block, html)| block.as_paragraph().map(|p| (p, html)))
        .enumerate()
        .map(|(index, (para, html))| ParagraphRender {
            id: make_paragraph_id(index),
            byte_range: para.byte_range.clone(),
            char_range: para.char_range.clone(),
            html,
            source_hash: hash_source(&para.to_markup()),
        })
        .collect()
}
