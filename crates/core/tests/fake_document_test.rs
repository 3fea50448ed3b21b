// Selection against a recording Document implementation
//
// Verifies which lookup primitive each selector form dispatches to and which
// mutation primitives each operation invokes, without any tree behind them.

use std::cell::RefCell;

use dollar::{Document, Selection};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    ById(String),
    ByClass(String),
    ByTag(String),
    Style(u32, String, String),
    AddClass(u32, String),
    RemoveClass(u32, String),
    Text(u32, String),
    Element(u32, String),
}

/// Returns canned handles for lookups and records every call.
#[derive(Default)]
struct FakeDocument {
    by_id: Option<u32>,
    many: Vec<u32>,
    calls: RefCell<Vec<Call>>,
}

impl FakeDocument {
    fn with_matches(by_id: Option<u32>, many: Vec<u32>) -> Self {
        Self {
            by_id,
            many,
            calls: RefCell::default(),
        }
    }

    fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Document for FakeDocument {
    type Element = u32;

    fn element_by_id(&self, id: &str) -> Option<u32> {
        self.record(Call::ById(id.to_string()));
        self.by_id
    }

    fn elements_by_class_name(&self, class_names: &str) -> Vec<u32> {
        self.record(Call::ByClass(class_names.to_string()));
        self.many.clone()
    }

    fn elements_by_tag_name(&self, tag_name: &str) -> Vec<u32> {
        self.record(Call::ByTag(tag_name.to_string()));
        self.many.clone()
    }

    fn set_style_property(&mut self, element: &u32, property: &str, value: &str) {
        self.record(Call::Style(*element, property.to_string(), value.to_string()));
    }

    fn add_class(&mut self, element: &u32, class_name: &str) {
        self.record(Call::AddClass(*element, class_name.to_string()));
    }

    fn remove_class(&mut self, element: &u32, class_name: &str) {
        self.record(Call::RemoveClass(*element, class_name.to_string()));
    }

    fn append_text(&mut self, element: &u32, text: &str) {
        self.record(Call::Text(*element, text.to_string()));
    }

    fn append_element(&mut self, element: &u32, tag_name: &str) {
        self.record(Call::Element(*element, tag_name.to_string()));
    }
}

#[test]
fn test_hash_prefix_uses_id_lookup() {
    let mut doc = FakeDocument::with_matches(Some(7), vec![1, 2]);
    let elements = Selection::new(&mut doc, "#page").into_elements();

    assert_eq!(elements, vec![7]);
    assert_eq!(doc.take_calls(), vec![Call::ById("page".into())]);
}

#[test]
fn test_dot_prefix_uses_class_lookup() {
    let mut doc = FakeDocument::with_matches(None, vec![1, 2]);
    let elements = Selection::new(&mut doc, ".foobar").into_elements();

    assert_eq!(elements, vec![1, 2]);
    assert_eq!(doc.take_calls(), vec![Call::ByClass("foobar".into())]);
}

#[test]
fn test_anything_else_uses_tag_lookup_with_full_string() {
    for selector in ["div", "div.foo", "a > b", "", "*"] {
        let mut doc = FakeDocument::default();
        Selection::new(&mut doc, selector);
        assert_eq!(doc.take_calls(), vec![Call::ByTag(selector.into())]);
    }
}

#[test]
fn test_missing_id_is_empty_not_placeholder() {
    let mut doc = FakeDocument::with_matches(None, vec![1]);
    let selection = Selection::new(&mut doc, "#missing");

    assert!(selection.is_empty());
}

#[test]
fn test_operations_hit_every_element_in_order() {
    let mut doc = FakeDocument::with_matches(None, vec![1, 2]);
    Selection::new(&mut doc, ".x")
        .hide()
        .show()
        .add_class_name("bar")
        .remove_class_name("foobar")
        .text("Hello")
        .add_child("h1");

    let calls = doc.take_calls();
    assert_eq!(
        calls[1..],
        [
            Call::Style(1, "display".into(), "none".into()),
            Call::Style(2, "display".into(), "none".into()),
            Call::Style(1, "display".into(), "inherit".into()),
            Call::Style(2, "display".into(), "inherit".into()),
            Call::AddClass(1, "bar".into()),
            Call::AddClass(2, "bar".into()),
            Call::RemoveClass(1, "foobar".into()),
            Call::RemoveClass(2, "foobar".into()),
            Call::Text(1, "Hello".into()),
            Call::Text(2, "Hello".into()),
            Call::Element(1, "h1".into()),
            Call::Element(2, "h1".into()),
        ]
    );
}

#[test]
fn test_lookup_happens_once() {
    let mut doc = FakeDocument::with_matches(None, vec![3]);
    let mut selection = Selection::new(&mut doc, "p");
    selection.hide().hide().hide();
    drop(selection);

    let lookups = doc
        .take_calls()
        .into_iter()
        .filter(|c| matches!(c, Call::ByTag(_)))
        .count();
    assert_eq!(lookups, 1);
}

#[test]
fn test_empty_selection_never_touches_document() {
    let mut doc = FakeDocument::default();
    Selection::new(&mut doc, ".none")
        .hide()
        .add_class_name("a")
        .text("b")
        .add_child("c");

    assert_eq!(doc.take_calls(), vec![Call::ByClass("none".into())]);
}
