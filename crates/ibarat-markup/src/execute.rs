//! Markup insertion and action execution.
//!
//! [`insert_markup`] is the pure splice used by any UI: given the text, a
//! selection and an operation it returns the new text and the selection to
//! highlight afterwards. [`execute_action`] applies the same splice to an
//! [`EditorDocument`] so the edit lands in its undo history.

use crate::actions::{EditorAction, MarkupOperation, Range};
use crate::document::EditorDocument;
use crate::error::MarkupError;
use crate::text_helpers::{char_to_byte, len_chars};
use crate::types::Selection;
use crate::undo::UndoManager;

/// Result of a markup insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    /// Selection to restore in the editor widget.
    pub selection: Range,
}

/// Insert markup for `op` around (or, for a separator, after) `range`.
///
/// Offsets are chars. Wrapping re-selects exactly the original content, so
/// pressing the same control again nests another delimiter pair around it.
pub fn insert_markup(
    text: &str,
    range: Range,
    op: MarkupOperation,
) -> Result<Insertion, MarkupError> {
    let len = len_chars(text);
    let range = range.validate(len)?;
    let invalid = || MarkupError::InvalidRange {
        start: range.start,
        end: range.end,
        len,
    };
    let start_byte = char_to_byte(text, range.start).ok_or_else(invalid)?;
    let end_byte = char_to_byte(text, range.end).ok_or_else(invalid)?;

    let (prefix, suffix) = (op.prefix(), op.suffix());
    let mut out = String::with_capacity(text.len() + prefix.len() + suffix.len());
    if op.is_wrap() {
        out.push_str(&text[..start_byte]);
        out.push_str(prefix);
        out.push_str(&text[start_byte..end_byte]);
        out.push_str(suffix);
        out.push_str(&text[end_byte..]);
    } else {
        out.push_str(&text[..end_byte]);
        out.push_str(prefix);
        out.push_str(&text[end_byte..]);
    }

    let selection = selection_after(range, op);
    tracing::trace!(
        target: "ibarat::insert",
        %op,
        %range,
        %selection,
        "inserted markup"
    );

    Ok(Insertion {
        text: out,
        selection,
    })
}

/// Selection to restore after applying `op` to a valid `range`.
pub fn selection_after(range: Range, op: MarkupOperation) -> Range {
    let prefix_len = len_chars(op.prefix());
    if op.is_wrap() {
        Range::new(range.start + prefix_len, range.end + prefix_len)
    } else {
        Range::caret(range.end + prefix_len)
    }
}

/// Execute an editor action on a document.
///
/// This is the central dispatch point for all editor operations.
/// Returns true if the action was handled and the document was modified.
pub fn execute_action<D: EditorDocument>(
    doc: &mut D,
    action: &EditorAction,
) -> Result<bool, MarkupError> {
    match action {
        EditorAction::Insert { text, range } => execute_insert(doc, text, *range),
        EditorAction::Format(op) => execute_format(doc, *op).map(|_| true),
        EditorAction::Select(range) => {
            let range = range.validate(doc.len_chars())?;
            doc.set_selection(Selection::from(range));
            Ok(true)
        }
        EditorAction::SelectAll => {
            let len = doc.len_chars();
            doc.set_selection(Selection::new(0, len));
            Ok(true)
        }
        EditorAction::Undo => Ok(execute_history(doc, D::undo)),
        EditorAction::Redo => Ok(execute_history(doc, D::redo)),
    }
}

/// Apply a markup operation to the document's current selection.
pub fn execute_format<D: EditorDocument>(
    doc: &mut D,
    op: MarkupOperation,
) -> Result<Range, MarkupError> {
    let range = doc.selection().to_range().validate(doc.len_chars())?;

    doc.buffer_mut().begin_group();
    if op.is_wrap() {
        // Insert end marker first so start position stays valid.
        doc.insert(range.end, op.suffix());
        doc.insert(range.start, op.prefix());
    } else {
        doc.insert(range.end, op.prefix());
    }
    doc.buffer_mut().end_group();

    let selection = selection_after(range, op);
    doc.set_selection(Selection::from(selection));
    tracing::trace!(target: "ibarat::insert", %op, %range, %selection, "formatted selection");
    Ok(selection)
}

fn execute_insert<D: EditorDocument>(
    doc: &mut D,
    text: &str,
    range: Range,
) -> Result<bool, MarkupError> {
    let range = range.validate(doc.len_chars())?;
    if range.is_caret() {
        doc.insert(range.start, text);
    } else {
        doc.replace(range, text);
    }
    doc.set_cursor_offset(range.start + len_chars(text));
    Ok(true)
}

fn execute_history<D: EditorDocument>(doc: &mut D, step: fn(&mut D) -> bool) -> bool {
    if !step(doc) {
        return false;
    }
    let max = doc.len_chars();
    let head = doc.selection().head.min(max);
    doc.set_cursor_offset(head);
    true
}
