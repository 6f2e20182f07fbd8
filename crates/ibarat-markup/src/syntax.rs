//! Markup literals and the shared delimiter scanner.
//!
//! Both the inserter and the parser work from the literals defined here, so
//! text produced by one is always understood by the other.

use serde::{Deserialize, Serialize};

pub const REF_OPEN: &str = "[";
pub const REF_CLOSE: &str = "]";
pub const BOLD_DELIM: &str = "**";
pub const ITALIC_DELIM: &str = "*";

/// Block separator. Matched literally, never as a pattern.
pub const SEPARATOR: &str = "\n***\n";

/// Opening delimiter of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    Reference,
    Bold,
    Italic,
}

impl Delimiter {
    pub fn open(self) -> &'static str {
        match self {
            Self::Reference => REF_OPEN,
            Self::Bold => BOLD_DELIM,
            Self::Italic => ITALIC_DELIM,
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Self::Reference => REF_CLOSE,
            Self::Bold => BOLD_DELIM,
            Self::Italic => ITALIC_DELIM,
        }
    }

    /// Opening delimiter at the start of `rest`, if any.
    ///
    /// `**` is tested before `*` so a bold marker is never read as two
    /// italic markers.
    pub fn at(rest: &str) -> Option<Self> {
        if rest.starts_with(REF_OPEN) {
            Some(Self::Reference)
        } else if rest.starts_with(BOLD_DELIM) {
            Some(Self::Bold)
        } else if rest.starts_with(ITALIC_DELIM) {
            Some(Self::Italic)
        } else {
            None
        }
    }

    /// Byte length of content and closing marker for a span opening at the
    /// start of `rest`.
    ///
    /// Returns `(content_len, token_len)` where `token_len` covers the
    /// delimiters too, or `None` when the span is never closed.
    pub fn match_at(self, rest: &str) -> Option<(usize, usize)> {
        let open = self.open().len();
        let close = self.close();
        let content_len = rest[open..].find(close)?;
        Some((content_len, open + content_len + close.len()))
    }
}

/// Whether `b` can start a delimiter. Used to skip plain runs quickly.
pub(crate) fn is_delimiter_start(b: u8) -> bool {
    b == b'[' || b == b'*'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_at_prefers_bold() {
        assert_eq!(Delimiter::at("**x**"), Some(Delimiter::Bold));
        assert_eq!(Delimiter::at("*x*"), Some(Delimiter::Italic));
        assert_eq!(Delimiter::at("[x]"), Some(Delimiter::Reference));
        assert_eq!(Delimiter::at("x"), None);
        assert_eq!(Delimiter::at(""), None);
    }

    #[test]
    fn test_match_at() {
        assert_eq!(Delimiter::Bold.match_at("**ab** c"), Some((2, 6)));
        assert_eq!(Delimiter::Bold.match_at("****"), Some((0, 4)));
        assert_eq!(Delimiter::Bold.match_at("**open"), None);
        assert_eq!(Delimiter::Italic.match_at("*a*"), Some((1, 3)));
        assert_eq!(Delimiter::Reference.match_at("[]"), Some((0, 2)));
        assert_eq!(Delimiter::Reference.match_at("[**x**]"), Some((5, 7)));
        assert_eq!(Delimiter::Reference.match_at("[no close"), None);
    }
}
