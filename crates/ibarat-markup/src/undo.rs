//! Undo history for editor sessions.

use std::collections::VecDeque;
use std::ops::Range;

use smol_str::SmolStr;

use crate::text::TextBuffer;

/// Default bound on recorded undo steps.
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Undo/redo over a buffer. Implementations apply the change themselves.
pub trait UndoManager {
    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Returns false when there is nothing to undo.
    fn undo(&mut self) -> bool;

    /// Returns false when there is nothing to redo.
    fn redo(&mut self) -> bool;

    /// Edits until the matching `end_group` undo as one step.
    fn begin_group(&mut self);

    fn end_group(&mut self);

    fn clear_history(&mut self);
}

/// One splice: `removed` was replaced by `added` at char offset `at`.
#[derive(Debug, Clone)]
struct Edit {
    at: usize,
    removed: SmolStr,
    added: SmolStr,
}

impl Edit {
    fn apply<T: TextBuffer>(&self, buffer: &mut T) {
        splice(buffer, self.at, &self.removed, &self.added);
    }

    fn revert<T: TextBuffer>(&self, buffer: &mut T) {
        splice(buffer, self.at, &self.added, &self.removed);
    }
}

fn splice<T: TextBuffer>(buffer: &mut T, at: usize, old: &str, new: &str) {
    let old_chars = old.chars().count();
    if old_chars > 0 {
        buffer.delete(at..at + old_chars);
    }
    if !new.is_empty() {
        buffer.insert(at, new);
    }
}

/// What one press of undo reverts. A wrap is two inserts but one step.
type Step = Vec<Edit>;

/// A [`TextBuffer`] that records every edit made through it.
#[derive(Clone, Debug)]
pub struct UndoableBuffer<T> {
    buffer: T,
    done: VecDeque<Step>,
    undone: Vec<Step>,
    max_steps: usize,
    open_group: Option<Step>,
}

impl<T: TextBuffer + Default> Default for UndoableBuffer<T> {
    fn default() -> Self {
        Self::new(T::default(), DEFAULT_MAX_STEPS)
    }
}

impl<T: TextBuffer> UndoableBuffer<T> {
    pub fn new(buffer: T, max_steps: usize) -> Self {
        Self {
            buffer,
            done: VecDeque::new(),
            undone: Vec::new(),
            max_steps,
            open_group: None,
        }
    }

    pub fn inner(&self) -> &T {
        &self.buffer
    }

    fn record(&mut self, edit: Edit) {
        self.undone.clear();
        match self.open_group.as_mut() {
            Some(group) => group.push(edit),
            None => self.commit(vec![edit]),
        }
    }

    fn commit(&mut self, step: Step) {
        if step.is_empty() {
            return;
        }
        self.done.push_back(step);
        if self.done.len() > self.max_steps {
            self.done.pop_front();
        }
    }
}

impl<T: TextBuffer> TextBuffer for UndoableBuffer<T> {
    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn insert(&mut self, at: usize, text: &str) {
        self.record(Edit {
            at,
            removed: SmolStr::default(),
            added: text.into(),
        });
        self.buffer.insert(at, text);
    }

    fn delete(&mut self, chars: Range<usize>) {
        let removed = self.buffer.slice(chars.clone()).unwrap_or_default();
        self.record(Edit {
            at: chars.start,
            removed,
            added: SmolStr::default(),
        });
        self.buffer.delete(chars);
    }

    /// Recorded as one splice, so a single undo restores the replaced text.
    fn replace(&mut self, chars: Range<usize>, text: &str) {
        let removed = self.buffer.slice(chars.clone()).unwrap_or_default();
        self.record(Edit {
            at: chars.start,
            removed,
            added: text.into(),
        });
        self.buffer.replace(chars, text);
    }

    fn slice(&self, chars: Range<usize>) -> Option<SmolStr> {
        self.buffer.slice(chars)
    }

    fn char_at(&self, at: usize) -> Option<char> {
        self.buffer.char_at(at)
    }

    fn contents(&self) -> String {
        self.buffer.contents()
    }
}

impl<T: TextBuffer> UndoManager for UndoableBuffer<T> {
    fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    fn undo(&mut self) -> bool {
        let Some(step) = self.done.pop_back() else {
            return false;
        };
        for edit in step.iter().rev() {
            edit.revert(&mut self.buffer);
        }
        self.undone.push(step);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(step) = self.undone.pop() else {
            return false;
        };
        for edit in &step {
            edit.apply(&mut self.buffer);
        }
        self.done.push_back(step);
        true
    }

    fn begin_group(&mut self) {
        self.open_group.get_or_insert_with(Vec::new);
    }

    fn end_group(&mut self) {
        if let Some(step) = self.open_group.take() {
            self.commit(step);
        }
    }

    fn clear_history(&mut self) {
        self.done.clear();
        self.undone.clear();
        self.open_group = None;
    }
}
