//! dollar: a tiny jQuery-style selection helper.
//!
//! A [`Selection`] is built from a selector string (`#id`, `.class` or a tag
//! name) against any [`Document`] implementation, and exposes chainable
//! mutations:
//!
//! ```ignore
//! use dollar::{dom::Dom, select};
//!
//! let mut dom = Dom::parse_html(r#"<div class="foobar"></div><div class="foobar"></div>"#);
//! select(&mut dom, ".foobar")
//!     .add_class_name("bar")
//!     .remove_class_name("foobar")
//!     .hide();
//! ```
//!
//! The document is borrowed mutably for the lifetime of the selection, and
//! the matched elements are collected once at construction.

pub mod document;
pub mod dom;
pub mod error;
pub mod operation;
pub mod selection;
pub mod selector;

pub use document::Document;
pub use error::{Error, Result};
pub use operation::Operation;
pub use selection::{Selection, select};
pub use selector::Selector;

/// Value written to `display` by [`Selection::hide`].
pub const DISPLAY_HIDDEN: &str = "none";

/// Value written to `display` by [`Selection::show`].
pub const DISPLAY_SHOWN: &str = "inherit";
