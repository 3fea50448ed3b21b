//! `dollar-rs` selections over the live browser DOM.
//!
//! [`WebDocument`] implements [`dollar::Document`] on top of `web-sys`, so a
//! [`Selection`] built from it mutates the page directly. DOM exceptions are
//! logged through `tracing` and otherwise ignored, which keeps the chaining
//! API infallible. Install `tracing-wasm` or a similar subscriber to see them.

use dollar::{Document, Operation, Selection};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCollection, HtmlElement};

/// A [`Document`] backed by a `web_sys::Document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the global window, if there is one.
    pub fn global() -> Option<Self> {
        web_sys::window().and_then(|window| window.document()).map(Self::new)
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

impl Document for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class_name(&self, class_names: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_class_name(class_names))
    }

    fn elements_by_tag_name(&self, tag_name: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_tag_name(tag_name))
    }

    fn set_style_property(&mut self, element: &Element, property: &str, value: &str) {
        // SVG and MathML elements have no inline style object here.
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            warn!(target = "dollar", tag = %element.tag_name(), property, "element has no style");
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            warn!(target = "dollar", property, value, error = ?err, "set_property failed");
        }
    }

    fn add_class(&mut self, element: &Element, class_name: &str) {
        if let Err(err) = element.class_list().add_1(class_name) {
            warn!(target = "dollar", class_name, error = ?err, "classList.add failed");
        }
    }

    fn remove_class(&mut self, element: &Element, class_name: &str) {
        if let Err(err) = element.class_list().remove_1(class_name) {
            warn!(target = "dollar", class_name, error = ?err, "classList.remove failed");
        }
    }

    fn append_text(&mut self, element: &Element, text: &str) {
        let node = self.document.create_text_node(text);
        if let Err(err) = element.append_child(&node) {
            warn!(target = "dollar", error = ?err, "appendChild failed for text node");
        }
    }

    fn append_element(&mut self, element: &Element, tag_name: &str) {
        let child = match self.document.create_element(tag_name) {
            Ok(child) => child,
            Err(err) => {
                warn!(target = "dollar", tag_name, error = ?err, "createElement failed");
                return;
            }
        };
        if let Err(err) = element.append_child(&child) {
            warn!(target = "dollar", tag_name, error = ?err, "appendChild failed");
        }
    }
}

/// Routes Rust panics to `console.error`.
#[wasm_bindgen(js_name = installPanicHook)]
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Applies textual operations (`hide`, `add-class=x`, ...) to every element
/// matching `selector` in the global document and returns the match count.
#[wasm_bindgen(js_name = dollar)]
pub fn apply_operations(selector: &str, operations: Vec<String>) -> Result<u32, JsError> {
    let operations = operations
        .iter()
        .map(|op| op.parse::<Operation>())
        .collect::<Result<Vec<_>, _>>()?;
    let mut document = WebDocument::global().ok_or_else(|| JsError::new("no global document"))?;

    let mut selection = Selection::new(&mut document, selector);
    selection.apply_all(&operations);
    Ok(selection.len() as u32)
}
