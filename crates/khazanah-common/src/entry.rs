//! Fiqh entry records and their form rules.
//!
//! An entry is a question with its answer, the ibarat (citation) text that
//! supports it, and the kitab it was taken from. The ibarat text is stored
//! raw; [`FiqhEntry::ibarat_document`] parses it for display.

use serde::{Deserialize, Serialize};

use ibarat_markup::{Document, parse};

use crate::error::{ValidationErrors, ValidationIssue};

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_ANSWER_SUMMARY_CHARS: usize = 10;
pub const MIN_IBARAT_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Decision of a bahtsul masail forum.
    Rumusan,
    /// Citation with a short answer.
    #[default]
    Ibarat,
    /// Long-form article. Its body lives in `ibarat_text`.
    Makalah,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rumusan => "rumusan",
            Self::Ibarat => "ibarat",
            Self::Makalah => "makalah",
        }
    }

    /// Whether entries of this type carry a question and answer summary.
    pub fn has_answer(self) -> bool {
        matches!(self, Self::Rumusan | Self::Ibarat)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kitab_name: String,
    /// Volume, page, chapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub order_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FiqhEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub answer_summary: String,
    /// Raw ibarat markup.
    #[serde(default)]
    pub ibarat_text: String,
    #[serde(default)]
    pub source_books: Vec<SourceBook>,
    #[serde(default)]
    pub musyawarah_source: String,
    #[serde(default)]
    pub entry_type: EntryType,
}

impl FiqhEntry {
    /// Check the entry against the submission form rules.
    ///
    /// All issues are collected; nothing stops at the first failure.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.chars().count() < MIN_TITLE_CHARS {
            errors.push(ValidationIssue::new(
                "title",
                "Judul harus minimal 3 karakter",
            ));
        }

        for (i, book) in self.source_books.iter().enumerate() {
            if book.kitab_name.is_empty() {
                errors.push(ValidationIssue::new(
                    smol_str::format_smolstr!("source_books.{i}.kitab_name"),
                    "Nama kitab harus diisi",
                ));
            }
        }

        let ibarat_chars = self.ibarat_text.trim().chars().count();
        match self.entry_type {
            EntryType::Rumusan | EntryType::Ibarat => {
                if self.answer_summary.chars().count() < MIN_ANSWER_SUMMARY_CHARS {
                    errors.push(ValidationIssue::new(
                        "answer_summary",
                        "Ringkasan jawaban harus minimal 10 karakter",
                    ));
                }
                if ibarat_chars < MIN_IBARAT_CHARS {
                    errors.push(ValidationIssue::new(
                        "ibarat_text",
                        "Teks ibarat harus diisi",
                    ));
                }
            }
            EntryType::Makalah => {
                if ibarat_chars < MIN_IBARAT_CHARS {
                    errors.push(ValidationIssue::new(
                        "ibarat_text",
                        "Isi makalah harus diisi",
                    ));
                }
            }
        }

        tracing::debug!(
            target: "khazanah::entry",
            title = %self.title,
            issues = errors.issues.len(),
            "validated entry"
        );
        errors.into_result()
    }

    pub fn ibarat_document(&self) -> Document {
        parse(&self.ibarat_text)
    }

    /// Source books in display order. Ties keep their stored order.
    pub fn sorted_source_books(&self) -> Vec<&SourceBook> {
        let mut books: Vec<&SourceBook> = self.source_books.iter().collect();
        books.sort_by_key(|b| b.order_index);
        books
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_entry() -> FiqhEntry {
        FiqhEntry {
            title: "Hukum jual beli online".into(),
            question_text: "Bagaimana hukumnya?".into(),
            answer_summary: "Hukumnya sah dengan syarat".into(),
            ibarat_text: "**وَيَصِحُّ** [البيع] بالصفة".into(),
            source_books: vec![SourceBook {
                kitab_name: "Fath al-Qarib".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn messages(err: &ValidationErrors) -> Vec<(&str, &str)> {
        err.issues
            .iter()
            .map(|i| (i.path.as_str(), i.message.as_str()))
            .collect()
    }

    #[test]
    fn test_valid_entry() {
        assert_eq!(valid_entry().validate(), Ok(()));
    }

    #[test]
    fn test_short_fields() {
        let entry = FiqhEntry {
            title: "ab".into(),
            answer_summary: "pendek".into(),
            ibarat_text: "  abc   ".into(),
            ..valid_entry()
        };
        let err = entry.validate().unwrap_err();
        assert_eq!(
            messages(&err),
            vec![
                ("title", "Judul harus minimal 3 karakter"),
                ("answer_summary", "Ringkasan jawaban harus minimal 10 karakter"),
                ("ibarat_text", "Teks ibarat harus diisi"),
            ]
        );
    }

    #[test]
    fn test_arabic_lengths_count_chars() {
        // Five Arabic letters, ten bytes.
        let entry = FiqhEntry {
            ibarat_text: "قَالَ".into(),
            ..valid_entry()
        };
        assert_eq!(entry.validate(), Ok(()));
    }

    #[test]
    fn test_empty_kitab_name() {
        let mut entry = valid_entry();
        entry.source_books.push(SourceBook::default());
        let err = entry.validate().unwrap_err();
        assert_eq!(
            messages(&err),
            vec![("source_books.1.kitab_name", "Nama kitab harus diisi")]
        );
    }

    #[test]
    fn test_makalah_rules() {
        let entry = FiqhEntry {
            entry_type: EntryType::Makalah,
            answer_summary: String::new(),
            ibarat_text: "    ".into(),
            ..valid_entry()
        };
        let err = entry.validate().unwrap_err();
        assert_eq!(
            messages(&err),
            vec![("ibarat_text", "Isi makalah harus diisi")]
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let entry: FiqhEntry = serde_json::from_str(r#"{ "title": "Zakat profesi" }"#).unwrap();
        assert_eq!(entry.entry_type, EntryType::Ibarat);
        assert!(entry.source_books.is_empty());
        assert!(entry.id.is_none());

        let entry: FiqhEntry =
            serde_json::from_str(r#"{ "title": "x", "entry_type": "makalah" }"#).unwrap();
        assert_eq!(entry.entry_type, EntryType::Makalah);
        assert!(!entry.entry_type.has_answer());
    }

    #[test]
    fn test_sorted_source_books() {
        let book = |name: &str, order_index| SourceBook {
            kitab_name: name.into(),
            order_index,
            ..Default::default()
        };
        let entry = FiqhEntry {
            source_books: vec![book("c", 2), book("a", 0), book("b", 1), book("a2", 0)],
            ..valid_entry()
        };
        let names: Vec<&str> = entry
            .sorted_source_books()
            .iter()
            .map(|b| b.kitab_name.as_str())
            .collect();
        assert_eq!(names, ["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_ibarat_document() {
        let doc = valid_entry().ibarat_document();
        assert_eq!(doc.spans().count(), 4);
        insta::assert_snapshot!(doc.to_plain_text(), @"وَيَصِحُّ البيع بالصفة");
    }
}
