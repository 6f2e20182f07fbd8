//! Rendering options and traits for the presentation layer.
//!
//! The parser decides structure only. How a style looks, and which way the
//! text runs, is decided here by the caller.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::nodes::SpanStyle;

pub const DEFAULT_REFERENCE_CLASS: &str = "ibarat-ref";

/// Text direction applied to a whole rendered paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Right-to-left, the default for Arabic ibarat.
    #[default]
    Rtl,
    Ltr,
    /// Let the browser pick from the first strong character.
    Auto,
}

impl TextDirection {
    pub fn as_html_attr(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
            Self::Auto => "auto",
        }
    }
}

impl std::str::FromStr for TextDirection {
    type Err = SmolStr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rtl" => Ok(Self::Rtl),
            "ltr" => Ok(Self::Ltr),
            "auto" => Ok(Self::Auto),
            other => Err(other.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub direction: TextDirection,
    /// CSS class for reference spans.
    pub reference_class: SmolStr,
    /// Skip spans with no text. The parser always keeps them.
    pub elide_empty_spans: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            direction: TextDirection::Rtl,
            reference_class: SmolStr::new_static(DEFAULT_REFERENCE_CLASS),
            elide_empty_spans: false,
        }
    }
}

/// Supplies extra CSS classes per span style.
///
/// Implementations are provided by the consuming application. Returning
/// `None` keeps the writer's default markup for that style.
pub trait StyleClassProvider {
    fn class_for(&self, style: SpanStyle) -> Option<&str>;
}

/// Unit type implementation - default markup only.
impl StyleClassProvider for () {
    fn class_for(&self, _style: SpanStyle) -> Option<&str> {
        None
    }
}

impl<T: StyleClassProvider> StyleClassProvider for &T {
    fn class_for(&self, style: SpanStyle) -> Option<&str> {
        (*self).class_for(style)
    }
}

impl<T: StyleClassProvider> StyleClassProvider for Option<T> {
    fn class_for(&self, style: SpanStyle) -> Option<&str> {
        self.as_ref().and_then(|p| p.class_for(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TailwindClasses;

    impl StyleClassProvider for TailwindClasses {
        fn class_for(&self, style: SpanStyle) -> Option<&str> {
            match style {
                SpanStyle::Reference => Some("text-emerald-700 font-bold"),
                _ => None,
            }
        }
    }

    #[test]
    fn test_unit_and_option_impls() {
        assert_eq!(().class_for(SpanStyle::Bold), None);

        let some = Some(TailwindClasses);
        assert_eq!(
            some.class_for(SpanStyle::Reference),
            Some("text-emerald-700 font-bold")
        );
        let none: Option<TailwindClasses> = None;
        assert_eq!(none.class_for(SpanStyle::Reference), None);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("ltr".parse::<TextDirection>(), Ok(TextDirection::Ltr));
        assert_eq!(TextDirection::default().as_html_attr(), "rtl");
        assert!("sideways".parse::<TextDirection>().is_err());
    }
}
