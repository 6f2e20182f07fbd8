//! Selection state for editor sessions.

use crate::actions::Range;

/// A selection as the widget reports it: `anchor` is where the drag began,
/// `head` is where the caret is now. A right-to-left drag over Arabic text
/// usually ends with `head < anchor`.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn caret(at: usize) -> Self {
        Self::new(at, at)
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.head
    }

    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    pub fn len(&self) -> usize {
        self.anchor.abs_diff(self.head)
    }

    /// Ordered range covered by the selection.
    pub fn to_range(&self) -> Range {
        Range::new(self.anchor, self.head).normalize()
    }
}

impl From<Range> for Selection {
    fn from(r: Range) -> Self {
        Self::new(r.start, r.end)
    }
}
