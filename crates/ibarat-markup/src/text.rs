//! Storage behind an editor session.

use std::fmt;
use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

/// Mutable text addressed by char offset.
///
/// Arabic ibarat is mostly two-byte UTF-8 with combining harakat, so byte
/// offsets never leave this trait.
pub trait TextBuffer {
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    fn insert(&mut self, at: usize, text: &str);

    fn delete(&mut self, chars: Range<usize>);

    fn replace(&mut self, chars: Range<usize>, text: &str) {
        let at = chars.start;
        self.delete(chars);
        self.insert(at, text);
    }

    /// `None` when `chars` is inverted or past the end.
    fn slice(&self, chars: Range<usize>) -> Option<SmolStr>;

    fn char_at(&self, at: usize) -> Option<char>;

    /// The whole buffer as one string.
    fn contents(&self) -> String;
}

/// Rope storage, so splices stay cheap on long makalah bodies.
#[derive(Clone, Default)]
pub struct EditorRope(ropey::Rope);

impl EditorRope {
    pub fn rope(&self) -> &ropey::Rope {
        &self.0
    }
}

impl TextBuffer for EditorRope {
    fn len_chars(&self) -> usize {
        self.0.len_chars()
    }

    fn insert(&mut self, at: usize, text: &str) {
        self.0.insert(at, text);
    }

    fn delete(&mut self, chars: Range<usize>) {
        self.0.remove(chars);
    }

    fn slice(&self, chars: Range<usize>) -> Option<SmolStr> {
        self.0.get_slice(chars).map(|s| s.to_smolstr())
    }

    fn char_at(&self, at: usize) -> Option<char> {
        self.0.get_char(at)
    }

    fn contents(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Debug for EditorRope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EditorRope").field(&self.contents()).finish()
    }
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self(ropey::Rope::from_str(s))
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
