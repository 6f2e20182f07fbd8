//! Error types for khazanah - thin wrapper over markup and IO errors

use std::path::PathBuf;

use ibarat_markup::MarkupError;
use miette::Diagnostic;
use smol_str::SmolStr;

/// Main error type for khazanah operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum KhazanahError {
    /// Config file could not be understood
    #[error("invalid config {}: {message}", .path.display())]
    #[diagnostic(
        code(khazanah::config),
        help("see `khazanah --help` for the accepted config keys")
    )]
    Config { path: PathBuf, message: String },

    /// Entry failed its form rules
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationErrors),

    /// Markup insertion error
    #[error(transparent)]
    #[diagnostic(transparent)]
    Markup(#[from] MarkupError),

    /// IO error
    #[error("could not read {}", .path.display())]
    #[diagnostic(code(khazanah::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error(transparent)]
    #[diagnostic(code(khazanah::json))]
    Json(#[from] serde_json::Error),
}

impl KhazanahError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single rule violation on an entry field.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("{path}: {message}")]
#[diagnostic(code(khazanah::validation::field))]
pub struct ValidationIssue {
    /// Dotted field path, e.g. `source_books.0.kitab_name`.
    pub path: SmolStr,
    /// User-facing message, in the form's language.
    pub message: SmolStr,
}

impl ValidationIssue {
    pub fn new(path: impl Into<SmolStr>, message: impl Into<SmolStr>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// All rule violations found on an entry.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq, Default)]
#[error("entry has {} validation issue(s)", .issues.len())]
#[diagnostic(code(khazanah::validation))]
pub struct ValidationErrors {
    #[related]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Issues reported for `path`.
    pub fn for_field<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.path == path)
    }

    /// `Ok` when nothing was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let mut errors = ValidationErrors::default();
        assert_eq!(errors.clone().into_result(), Ok(()));

        errors.push(ValidationIssue::new("title", "Judul harus minimal 3 karakter"));
        assert_eq!(errors.to_string(), "entry has 1 validation issue(s)");
        assert_eq!(
            errors.issues[0].to_string(),
            "title: Judul harus minimal 3 karakter"
        );
        assert_eq!(errors.for_field("title").count(), 1);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = KhazanahError::config("config.kdl", "bad direction");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("khazanah::config")
        );

        let err = KhazanahError::from(ValidationErrors::default());
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("khazanah::validation")
        );

        let err = KhazanahError::from(MarkupError::InvalidRange {
            start: 2,
            end: 1,
            len: 3,
        });
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("ibarat::invalid_range")
        );
    }
}
