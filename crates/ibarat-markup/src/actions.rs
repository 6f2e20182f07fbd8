//! Editor actions and markup operations.
//!
//! Platform-agnostic definitions for the operations behind the ibarat editor
//! toolbar. `MarkupOperation` is the fixed set of markup the inserter knows
//! about, while `EditorAction` represents the semantic editing operations a
//! surrounding UI can dispatch against an [`EditorDocument`](crate::EditorDocument).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarkupError;
use crate::syntax::{BOLD_DELIM, ITALIC_DELIM, REF_CLOSE, REF_OPEN, SEPARATOR};

/// A range in the document, measured in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize range so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Check the range against a text of `len` chars.
    ///
    /// Unlike [`normalize`](Self::normalize) this never repairs the range:
    /// an inverted or out-of-bounds range is a caller bug.
    pub fn validate(self, len: usize) -> Result<Self, MarkupError> {
        if self.start <= self.end && self.end <= len {
            Ok(self)
        } else {
            Err(MarkupError::InvalidRange {
                start: self.start,
                end: self.end,
                len,
            })
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(r: Range) -> Self {
        r.start..r.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The markup the editor toolbar can insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupOperation {
    /// Bibliographic reference, `[...]`.
    Reference,
    /// Bold emphasis, `**...**`.
    Bold,
    /// Italic emphasis, `*...*`.
    Italic,
    /// Block separator. Not a wrap: inserted at the end of the selection.
    Separator,
}

impl MarkupOperation {
    pub const ALL: [MarkupOperation; 4] = [
        MarkupOperation::Reference,
        MarkupOperation::Bold,
        MarkupOperation::Italic,
        MarkupOperation::Separator,
    ];

    /// Literal inserted before the selection.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Reference => REF_OPEN,
            Self::Bold => BOLD_DELIM,
            Self::Italic => ITALIC_DELIM,
            Self::Separator => SEPARATOR,
        }
    }

    /// Literal inserted after the selection. Empty for `Separator`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Reference => REF_CLOSE,
            Self::Bold => BOLD_DELIM,
            Self::Italic => ITALIC_DELIM,
            Self::Separator => "",
        }
    }

    /// Whether this operation wraps the selection rather than inserting at it.
    pub fn is_wrap(self) -> bool {
        !matches!(self, Self::Separator)
    }

    /// Label of the toolbar control that triggers this operation.
    pub fn control_label(self) -> &'static str {
        match self {
            Self::Reference => "[ Ref ]",
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Separator => "―",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Separator => "separator",
        }
    }
}

impl fmt::Display for MarkupOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkupOperation {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ref" | "reference" => Ok(Self::Reference),
            "b" | "bold" => Ok(Self::Bold),
            "i" | "italic" => Ok(Self::Italic),
            "hr" | "sep" | "separator" => Ok(Self::Separator),
            _ => Err(MarkupError::UnknownOperation(s.into())),
        }
    }
}

/// All possible editor actions.
///
/// These represent semantic operations on the document, decoupled from
/// how they're triggered (toolbar button, keyboard shortcut, CLI flag).
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Insert text at the given range (replacing any selected content).
    Insert { text: String, range: Range },

    /// Apply a markup operation to the current selection.
    Format(MarkupOperation),

    /// Replace the selection.
    Select(Range),

    /// Select all content.
    SelectAll,

    /// Undo the last change.
    Undo,

    /// Redo the last undone change.
    Redo,
}

impl From<MarkupOperation> for EditorAction {
    fn from(op: MarkupOperation) -> Self {
        Self::Format(op)
    }
}
