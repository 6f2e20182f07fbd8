//! ibarat-markup: the markup engine for citation texts in fiqh entries.
//!
//! This crate provides:
//! - `insert_markup` - pure insertion of `[..]`, `**..**`, `*..*` and the separator
//! - `parse` - raw text to a `Document` of paragraphs, separators and styled spans
//! - `EditorDocument` / `IbaratEditor` - a rope-backed editor session with undo
//! - `HtmlWriter`, `render_html`, `render_plain` - sample display adapters
//! - `RenderCache` - memoized parsing for repeated renders
//!
//! All offsets in the public API count Unicode scalar values, not bytes.

pub mod actions;
pub mod document;
pub mod error;
pub mod execute;
pub mod nodes;
pub mod paragraph;
pub mod parse;
pub mod render;
pub mod render_cache;
pub mod syntax;
pub mod text;
pub mod text_helpers;
pub mod types;
pub mod undo;
pub mod writer;

pub use actions::{EditorAction, MarkupOperation, Range};
pub use document::{EditorDocument, IbaratEditor, PlainEditor};
pub use error::MarkupError;
pub use execute::{Insertion, execute_action, insert_markup, selection_after};
pub use nodes::{Block, Document, Paragraph, Span, SpanStyle};
pub use paragraph::{ParagraphRender, changed_paragraphs, hash_source, make_paragraph_id};
pub use parse::parse;
pub use render::{RenderOptions, StyleClassProvider, TextDirection};
pub use render_cache::{CacheStats, RenderCache};
pub use smol_str::SmolStr;
pub use syntax::{Delimiter, SEPARATOR};
pub use text::{EditorRope, TextBuffer};
pub use types::Selection;
pub use undo::{UndoManager, UndoableBuffer};
pub use writer::{HtmlWriter, SegmentedWriter, render_html, render_paragraphs, render_plain};
