//! The chainable selection wrapper.

use tracing::trace;

use crate::document::Document;
use crate::operation::Operation;
use crate::selector::Selector;
use crate::{DISPLAY_HIDDEN, DISPLAY_SHOWN};

/// Resolves `selector` against `document`; shorthand for [`Selection::new`].
pub fn select<'doc, D: Document>(document: &'doc mut D, selector: &str) -> Selection<'doc, D> {
    Selection::new(document, selector)
}

/// Elements matched by a selector, plus chainable mutations over them.
///
/// Matches are collected once when the selection is built. Later changes to
/// the document do not add or remove elements from the selection.
///
/// Every mutating method applies to each matched element and returns the
/// same selection, so calls can be chained. On an empty selection they do
/// nothing.
pub struct Selection<'doc, D: Document> {
    document: &'doc mut D,
    selector: Selector,
    elements: Vec<D::Element>,
}

impl<'doc, D: Document> Selection<'doc, D> {
    /// Parses `selector` and collects the matching elements.
    pub fn new(document: &'doc mut D, selector: &str) -> Self {
        Self::from_selector(document, Selector::parse(selector))
    }

    pub fn from_selector(document: &'doc mut D, selector: Selector) -> Self {
        let elements = selector.resolve(&*document);
        Self {
            document,
            selector,
            elements,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Matched elements in document order.
    pub fn elements(&self) -> &[D::Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D::Element> {
        self.elements.iter()
    }

    /// Read access to the underlying document while the selection is alive.
    pub fn document(&self) -> &D {
        &*self.document
    }

    /// Ends the selection, releasing the document borrow.
    pub fn into_elements(self) -> Vec<D::Element> {
        self.elements
    }

    /// Sets `display: none` on every element.
    pub fn hide(&mut self) -> &mut Self {
        self.set_display(DISPLAY_HIDDEN)
    }

    /// Sets `display: inherit` on every element.
    pub fn show(&mut self) -> &mut Self {
        self.set_display(DISPLAY_SHOWN)
    }

    /// Adds `class_name` to every element's class set. Already-present
    /// classes are left alone.
    pub fn add_class_name(&mut self, class_name: &str) -> &mut Self {
        for element in &self.elements {
            self.document.add_class(element, class_name);
        }
        trace!(target = "dollar", selector = %self.selector, class_name, "add class");
        self
    }

    /// Removes `class_name` from every element's class set.
    pub fn remove_class_name(&mut self, class_name: &str) -> &mut Self {
        for element in &self.elements {
            self.document.remove_class(element, class_name);
        }
        trace!(target = "dollar", selector = %self.selector, class_name, "remove class");
        self
    }

    /// Appends a text node to every element. Existing children are kept.
    pub fn text(&mut self, text: &str) -> &mut Self {
        for element in &self.elements {
            self.document.append_text(element, text);
        }
        trace!(target = "dollar", selector = %self.selector, len = text.len(), "append text");
        self
    }

    /// Appends a new empty `tag_name` element as the last child of every
    /// element.
    pub fn add_child(&mut self, tag_name: &str) -> &mut Self {
        for element in &self.elements {
            self.document.append_element(element, tag_name);
        }
        trace!(target = "dollar", selector = %self.selector, tag_name, "add child");
        self
    }

    /// Applies one [`Operation`] through the matching method.
    pub fn apply(&mut self, operation: &Operation) -> &mut Self {
        match operation {
            Operation::Hide => self.hide(),
            Operation::Show => self.show(),
            Operation::AddClass(class_name) => self.add_class_name(class_name),
            Operation::RemoveClass(class_name) => self.remove_class_name(class_name),
            Operation::Text(text) => self.text(text),
            Operation::AddChild(tag_name) => self.add_child(tag_name),
        }
    }

    /// Applies `operations` in order.
    pub fn apply_all(&mut self, operations: &[Operation]) -> &mut Self {
        for operation in operations {
            self.apply(operation);
        }
        self
    }

    fn set_display(&mut self, value: &str) -> &mut Self {
        for element in &self.elements {
            self.document.set_style_property(element, "display", value);
        }
        trace!(target = "dollar", selector = %self.selector, display = value, "set display");
        self
    }
}

impl<D: Document> std::fmt::Debug for Selection<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("selector", &self.selector)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<'a, D: Document> IntoIterator for &'a Selection<'_, D> {
    type Item = &'a D::Element;
    type IntoIter = std::slice::Iter<'a, D::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
