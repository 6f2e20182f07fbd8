//! Per-paragraph render output.
//!
//! A display layer keeps the previous `Vec<ParagraphRender>` and, after the
//! text changes, swaps only the paragraphs whose source changed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use smol_str::{SmolStr, format_smolstr};

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphRender {
    /// `p-{n}`, where `n` counts paragraphs only, not separators.
    pub id: SmolStr,
    pub byte_range: Range<usize>,
    pub char_range: Range<usize>,
    /// One `<p>` element, newline-terminated.
    pub html: String,
    pub source_hash: u64,
}

impl ParagraphRender {
    pub fn contains_char(&self, offset: usize) -> bool {
        self.char_range.contains(&offset)
    }

    pub fn char_len(&self) -> usize {
        self.char_range.len()
    }
}

pub fn hash_source(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

pub fn make_paragraph_id(index: usize) -> SmolStr {
    format_smolstr!("p-{index}")
}

/// Indices into `new` whose paragraph is absent from, or differs in, `old`.
pub fn changed_paragraphs(old: &[ParagraphRender], new: &[ParagraphRender]) -> Vec<usize> {
    new.iter()
        .enumerate()
        .filter(|(i, p)| old.get(*i).is_none_or(|o| o.source_hash != p.source_hash))
        .map(|(i, _)| i)
        .collect()
}
