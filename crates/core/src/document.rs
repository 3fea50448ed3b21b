//! The host document seen by a [`Selection`](crate::Selection).

use std::fmt::Debug;

/// Lookup and mutation primitives a selection needs from its document.
///
/// Implementations hand out cheap element handles (arena indices, JS object
/// references). Lookups return elements in document order. Mutations are
/// infallible from the caller's side: a backend that can fail internally
/// logs the failure and moves on.
pub trait Document {
    /// Handle to one element of this document.
    type Element: Clone + Debug;

    /// Returns the first element in document order whose id is `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Returns every element carrying all whitespace-separated classes in
    /// `class_names`.
    fn elements_by_class_name(&self, class_names: &str) -> Vec<Self::Element>;

    /// Returns every element whose tag equals `tag_name` (`*` matches all).
    fn elements_by_tag_name(&self, tag_name: &str) -> Vec<Self::Element>;

    fn set_style_property(&mut self, element: &Self::Element, property: &str, value: &str);

    fn add_class(&mut self, element: &Self::Element, class_name: &str);

    fn remove_class(&mut self, element: &Self::Element, class_name: &str);

    /// Appends a new text node after the element's existing children.
    fn append_text(&mut self, element: &Self::Element, text: &str);

    /// Creates an empty `tag_name` element and appends it as the last child.
    fn append_element(&mut self, element: &Self::Element, tag_name: &str);
}
