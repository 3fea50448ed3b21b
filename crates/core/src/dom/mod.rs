//! In-memory document tree.
//!
//! [`Dom`] is an arena of nodes addressed by [`NodeId`]. It implements
//! [`Document`], so it can back a [`Selection`](crate::Selection) in tests,
//! on the command line, or anywhere a browser is not available.
//!
//! Lookups walk the tree from the document node in pre-order. Nodes that have
//! been created but not attached, or that were removed, stay in the arena
//! but are not visible to lookups.

mod entities;
mod html;
mod snapshot;
mod style;

use tracing::warn;

use crate::document::Document;
use crate::error::{Error, Result};

pub use html::is_void_element;

/// Handle to a node in a [`Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node is.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Element name and the attributes selectors and mutations care about.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    local_name: String,
    id: Option<String>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
}

impl ElementData {
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn style(&self) -> &[(String, String)] {
        &self.style
    }

    /// Attributes other than `id`, `class` and `style`, in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }
}

/// Arena-backed document.
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Creates a document containing `<html><head></head><body></body></html>`.
    pub fn new() -> Self {
        let mut dom = Self::empty();
        let html = dom.push(NodeData::Element(ElementData::named("html")));
        let head = dom.push(NodeData::Element(ElementData::named("head")));
        let body = dom.push(NodeData::Element(ElementData::named("body")));
        dom.link(dom.root(), html);
        dom.link(html, head);
        dom.link(html, body);
        dom
    }

    /// Creates a document with no children at all.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// Reads an HTML string.
    ///
    /// Input containing an `<html>` tag is read as a whole document. Anything
    /// else is treated as a fragment and placed inside `<body>` of a fresh
    /// [`Dom::new`] skeleton.
    pub fn parse_html(input: &str) -> Self {
        if html::looks_like_document(input) {
            let mut dom = Self::empty();
            let root = dom.root();
            html::parse_into(&mut dom, root, input);
            dom
        } else {
            let mut dom = Self::new();
            let body = dom.body().unwrap_or(dom.root());
            html::parse_into(&mut dom, body, input);
            dom
        }
    }

    /// Parses `input` as a fragment and appends the result to `parent`.
    pub fn append_html(&mut self, parent: NodeId, input: &str) -> Result<()> {
        match self.node(parent)?.data {
            NodeData::Document | NodeData::Element(_) => {}
            _ => {
                return Err(Error::HierarchyRequest(format!(
                    "{parent:?} cannot have children"
                )));
            }
        }
        html::parse_into(self, parent, input);
        Ok(())
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The first element child of the document node, normally `<html>`.
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root())
            .iter()
            .copied()
            .find(|&child| self.is_element(child))
    }

    pub fn head(&self) -> Option<NodeId> {
        self.document_child_named("head")
    }

    pub fn body(&self) -> Option<NodeId> {
        self.document_child_named("body")
    }

    fn document_child_named(&self, name: &str) -> Option<NodeId> {
        let html = self.document_element()?;
        self.children(html)
            .iter()
            .copied()
            .find(|&child| self.local_name(child) == Some(name))
    }

    /// Creates a detached element. The name is lower-cased.
    pub fn create_element(&mut self, tag_name: &str) -> Result<NodeId> {
        if !is_valid_name(tag_name) {
            return Err(Error::InvalidToken(tag_name.to_string()));
        }
        Ok(self.push(NodeData::Element(ElementData::named(tag_name))))
    }

    /// Creates a detached text node.
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Creates a detached comment node.
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    /// Appends `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        match self.node(parent)?.data {
            NodeData::Document | NodeData::Element(_) => {}
            _ => {
                return Err(Error::HierarchyRequest(format!(
                    "{parent:?} cannot have children"
                )));
            }
        }
        if matches!(self.node(child)?.data, NodeData::Document) {
            return Err(Error::HierarchyRequest(
                "the document node cannot be inserted".to_string(),
            ));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(Error::HierarchyRequest(format!(
                "{child:?} is an ancestor of {parent:?}"
            )));
        }

        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    /// Removes `child` from `parent`. The node stays in the arena, detached.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(Error::HierarchyRequest(format!(
                "{child:?} is not a child of {parent:?}"
            )));
        }
        self.detach(child);
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0).map(|n| &n.data)
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.data(node), Some(NodeData::Element(_)))
    }

    /// Whether `node` is reachable from the document node.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_ancestor(self.root(), node)
    }

    /// Lower-case element name, e.g. `div`.
    pub fn local_name(&self, node: NodeId) -> Option<&str> {
        self.element_data(node).map(|e| e.local_name.as_str())
    }

    /// Upper-case element name, e.g. `DIV`, as reported by DOM `tagName`.
    pub fn tag_name(&self, node: NodeId) -> Option<String> {
        self.local_name(node).map(str::to_ascii_uppercase)
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.element_data(node).and_then(ElementData::id)
    }

    /// Sets the id; an empty string removes it.
    pub fn set_id(&mut self, node: NodeId, id: &str) -> Result<()> {
        let element = self.element_mut(node)?;
        element.id = (!id.is_empty()).then(|| id.to_string());
        Ok(())
    }

    /// Space-joined class list, as DOM `className` reports it.
    pub fn class_name(&self, node: NodeId) -> Option<String> {
        self.element_data(node).map(|e| e.classes.join(" "))
    }

    /// Replaces the class set with the whitespace-separated tokens in
    /// `class_name`, dropping duplicates.
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) -> Result<()> {
        let element = self.element_mut(node)?;
        element.classes.clear();
        for token in class_name.split_ascii_whitespace() {
            if !element.classes.iter().any(|c| c == token) {
                element.classes.push(token.to_string());
            }
        }
        Ok(())
    }

    pub fn class_list(&self, node: NodeId) -> &[String] {
        self.element_data(node)
            .map(|e| e.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.class_list(node).iter().any(|c| c == class_name)
    }

    /// Adds one class token. Returns whether the class set changed.
    pub fn add_class_token(&mut self, node: NodeId, token: &str) -> Result<bool> {
        validate_class_token(token)?;
        let element = self.element_mut(node)?;
        if element.classes.iter().any(|c| c == token) {
            return Ok(false);
        }
        element.classes.push(token.to_string());
        Ok(true)
    }

    /// Removes one class token. Returns whether the class set changed.
    pub fn remove_class_token(&mut self, node: NodeId, token: &str) -> Result<bool> {
        validate_class_token(token)?;
        let element = self.element_mut(node)?;
        let before = element.classes.len();
        element.classes.retain(|c| c != token);
        Ok(element.classes.len() != before)
    }

    /// Inline style value for `property`, if set.
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<&str> {
        let property = property.trim().to_ascii_lowercase();
        self.element_data(node)?
            .style
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Sets one inline style property. An empty value removes it.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        let property = property.trim().to_ascii_lowercase();
        if property.is_empty() {
            return Err(Error::InvalidToken(property));
        }
        let element = self.element_mut(node)?;
        style::set_declaration(&mut element.style, &property, value.trim());
        Ok(())
    }

    /// Attribute value, including `id`, `class` and `style`.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let element = self.element_data(node)?;
        match name.to_ascii_lowercase().as_str() {
            "id" => element.id.clone(),
            "class" => (!element.classes.is_empty()).then(|| element.classes.join(" ")),
            "style" => (!element.style.is_empty()).then(|| style::serialize(&element.style)),
            other => element
                .attributes
                .iter()
                .find(|(n, _)| n == other)
                .map(|(_, v)| v.clone()),
        }
    }

    /// Sets an attribute. `id`, `class` and `style` update the structured
    /// fields they map to.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        if !is_valid_name(&name) {
            return Err(Error::InvalidToken(name));
        }
        match name.as_str() {
            "id" => self.set_id(node, value),
            "class" => self.set_class_name(node, value),
            "style" => {
                let element = self.element_mut(node)?;
                element.style = style::parse(value);
                Ok(())
            }
            _ => {
                let element = self.element_mut(node)?;
                match element.attributes.iter_mut().find(|(n, _)| *n == name) {
                    Some((_, existing)) => *existing = value.to_string(),
                    None => element.attributes.push((name, value.to_string())),
                }
                Ok(())
            }
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in self.descendants(node) {
            if let Some(NodeData::Text(text)) = self.data(id) {
                out.push_str(text);
            }
        }
        out
    }

    /// Serialized children of `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(node) {
            html::serialize(self, child, &mut out);
        }
        out
    }

    /// Serialized `node` including itself.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        html::serialize(self, node, &mut out);
        out
    }

    /// The whole document as HTML.
    pub fn to_html(&self) -> String {
        self.inner_html(self.root())
    }

    /// Pre-order walk over `node` and everything below it.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let stack = if node.0 < self.nodes.len() {
            vec![node]
        } else {
            Vec::new()
        };
        Descendants { dom: self, stack }
    }

    /// Every connected element in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(self.root())
            .filter(move |&node| self.is_element(node))
    }

    pub fn element_data(&self, node: NodeId) -> Option<&ElementData> {
        match self.data(node) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData> {
        match self.nodes.get_mut(node.0) {
            Some(Node {
                data: NodeData::Element(element),
                ..
            }) => Ok(element),
            Some(_) => Err(Error::NotAnElement(node)),
            None => Err(Error::InvalidNode(node)),
        }
    }

    fn node(&self, node: NodeId) -> Result<&Node> {
        self.nodes.get(node.0).ok_or(Error::InvalidNode(node))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node::new(data));
        NodeId(self.nodes.len() - 1)
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != child);
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

impl ElementData {
    fn named(local_name: &str) -> Self {
        Self {
            local_name: local_name.to_ascii_lowercase(),
            ..Self::default()
        }
    }
}

/// Pre-order iterator returned by [`Dom::descendants`].
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.dom.children(node).iter().rev().copied());
        Some(node)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='))
}

fn validate_class_token(token: &str) -> Result<()> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(Error::InvalidToken(token.to_string()));
    }
    Ok(())
}

impl Document for Dom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements().find(|&node| self.id(node) == Some(id))
    }

    fn elements_by_class_name(&self, class_names: &str) -> Vec<NodeId> {
        let wanted: Vec<&str> = class_names.split_ascii_whitespace().collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.elements()
            .filter(|&node| wanted.iter().all(|class| self.has_class(node, class)))
            .collect()
    }

    fn elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        if tag_name == "*" {
            return self.elements().collect();
        }
        self.elements()
            .filter(|&node| {
                self.local_name(node)
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag_name))
            })
            .collect()
    }

    fn set_style_property(&mut self, element: &NodeId, property: &str, value: &str) {
        if let Err(err) = self.set_style(*element, property, value) {
            warn!(target = "dollar", error = %err, property, "set style failed");
        }
    }

    fn add_class(&mut self, element: &NodeId, class_name: &str) {
        if let Err(err) = self.add_class_token(*element, class_name) {
            warn!(target = "dollar", error = %err, class_name, "add class failed");
        }
    }

    fn remove_class(&mut self, element: &NodeId, class_name: &str) {
        if let Err(err) = self.remove_class_token(*element, class_name) {
            warn!(target = "dollar", error = %err, class_name, "remove class failed");
        }
    }

    fn append_text(&mut self, element: &NodeId, text: &str) {
        let node = self.create_text_node(text);
        if let Err(err) = self.append_child(*element, node) {
            warn!(target = "dollar", error = %err, "append text failed");
        }
    }

    fn append_element(&mut self, element: &NodeId, tag_name: &str) {
        let appended = self
            .create_element(tag_name)
            .and_then(|child| self.append_child(*element, child));
        if let Err(err) = appended {
            warn!(target = "dollar", error = %err, tag_name, "append element failed");
        }
    }
}
