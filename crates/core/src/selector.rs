//! Selector parsing and resolution.
//!
//! Only three forms exist, told apart by the first character:
//!
//! | Input    | Variant               | Lookup                      |
//! |----------|-----------------------|-----------------------------|
//! | `#page`  | `ById("page")`        | `element_by_id`             |
//! | `.item`  | `ByClass("item")`     | `elements_by_class_name`    |
//! | `div`    | `ByTag("div")`        | `elements_by_tag_name`      |
//!
//! Anything else, including compound selectors such as `div.item` or
//! `ul > li`, is taken as a tag name verbatim and will normally match
//! nothing.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::document::Document;

/// A parsed selector string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    ById(String),
    ByClass(String),
    ByTag(String),
}

impl Selector {
    /// Parses a selector string. Never fails; see the module docs for how
    /// unsupported syntax is treated.
    pub fn parse(selector: &str) -> Self {
        if let Some(id) = selector.strip_prefix('#') {
            Selector::ById(id.to_string())
        } else if let Some(class) = selector.strip_prefix('.') {
            Selector::ByClass(class.to_string())
        } else {
            Selector::ByTag(selector.to_string())
        }
    }

    /// The selector text without its prefix character.
    pub fn value(&self) -> &str {
        match self {
            Selector::ById(v) | Selector::ByClass(v) | Selector::ByTag(v) => v,
        }
    }

    /// Short name of the lookup strategy, used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Selector::ById(_) => "id",
            Selector::ByClass(_) => "class",
            Selector::ByTag(_) => "tag",
        }
    }

    /// Runs the lookup against `document`.
    ///
    /// An id lookup that finds nothing yields an empty vector.
    pub fn resolve<D: Document + ?Sized>(&self, document: &D) -> Vec<D::Element> {
        let elements = match self {
            Selector::ById(id) => document.element_by_id(id).into_iter().collect(),
            Selector::ByClass(class) => document.elements_by_class_name(class),
            Selector::ByTag(tag) => document.elements_by_tag_name(tag),
        };
        debug!(
            target = "dollar",
            selector = %self,
            kind = self.kind(),
            matched = elements.len(),
            "resolved selector"
        );
        elements
    }
}

impl From<&str> for Selector {
    fn from(selector: &str) -> Self {
        Selector::parse(selector)
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::parse(s))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::ById(id) => write!(f, "#{id}"),
            Selector::ByClass(class) => write!(f, ".{class}"),
            Selector::ByTag(tag) => f.write_str(tag),
        }
    }
}
