//! Editor document trait and the default session implementation.
//!
//! An ibarat editing session starts empty when an entry form opens and is
//! mutated by successive markup insertions until the text is submitted.
//! `EditorDocument` abstracts that state so the action logic in
//! [`execute`](crate::execute) works with any buffer backend.

use smol_str::SmolStr;

use crate::actions::{MarkupOperation, Range};
use crate::error::MarkupError;
use crate::text::{EditorRope, TextBuffer};
use crate::types::Selection;
use crate::undo::{DEFAULT_MAX_STEPS, UndoManager, UndoableBuffer};

/// Core trait for editor documents.
///
/// The buffer must implement both `TextBuffer` and `UndoManager`; every
/// mutation goes through it so it can be undone.
pub trait EditorDocument {
    type Buffer: TextBuffer + UndoManager;

    fn buffer(&self) -> &Self::Buffer;

    fn buffer_mut(&mut self) -> &mut Self::Buffer;

    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection);

    fn set_cursor_offset(&mut self, offset: usize) {
        self.set_selection(Selection::caret(offset));
    }

    fn content_string(&self) -> String {
        self.buffer().contents()
    }

    fn len_chars(&self) -> usize {
        self.buffer().len_chars()
    }

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer().char_at(offset)
    }

    fn slice(&self, range: Range) -> Option<SmolStr> {
        self.buffer().slice(range.into())
    }

    fn selected_text(&self) -> Option<SmolStr> {
        let sel = self.selection();
        if sel.is_caret() {
            None
        } else {
            self.slice(sel.to_range())
        }
    }

    fn insert(&mut self, offset: usize, text: &str) {
        self.buffer_mut().insert(offset, text);
    }

    fn delete(&mut self, range: Range) {
        self.buffer_mut().delete(range.into());
    }

    fn replace(&mut self, range: Range, text: &str) {
        self.buffer_mut().replace(range.into(), text);
    }

    /// Apply a markup operation to the current selection.
    ///
    /// Returns the new selection, which is also stored on the document.
    fn apply(&mut self, op: MarkupOperation) -> Result<Range, MarkupError>
    where
        Self: Sized,
    {
        crate::execute::execute_format(self, op)
    }

    fn undo(&mut self) -> bool {
        self.buffer_mut().undo()
    }

    fn redo(&mut self) -> bool {
        self.buffer_mut().redo()
    }

    fn can_undo(&self) -> bool {
        self.buffer().can_undo()
    }

    fn can_redo(&self) -> bool {
        self.buffer().can_redo()
    }

    fn clear_history(&mut self) {
        self.buffer_mut().clear_history();
    }
}

/// Simple field-based implementation of EditorDocument.
#[derive(Clone, Debug)]
pub struct PlainEditor<T> {
    buffer: T,
    selection: Selection,
}

/// Editor session over an undoable rope, the default for ibarat text.
pub type IbaratEditor = PlainEditor<UndoableBuffer<EditorRope>>;

impl<T: TextBuffer + UndoManager + Default> Default for PlainEditor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: TextBuffer + UndoManager> PlainEditor<T> {
    pub fn new(buffer: T) -> Self {
        Self {
            buffer,
            selection: Selection::default(),
        }
    }

    /// Get direct access to the inner buffer (bypasses trait).
    pub fn inner(&self) -> &T {
        &self.buffer
    }
}

impl PlainEditor<UndoableBuffer<EditorRope>> {
    /// Open a session on existing text, caret at the end.
    pub fn from_text(text: &str) -> Self {
        let rope = EditorRope::from(text);
        let len = rope.len_chars();
        let mut editor = Self::new(UndoableBuffer::new(rope, DEFAULT_MAX_STEPS));
        editor.selection = Selection::caret(len);
        editor
    }
}

impl<T: TextBuffer + UndoManager> EditorDocument for PlainEditor<T> {
    type Buffer = T;

    fn buffer(&self) -> &Self::Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Self::Buffer {
        &mut self.buffer
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }
}
