//! Conversion between [`Dom`] and the `dollar-protocol` snapshot types.

use dollar_protocol::{Attribute, DocumentSnapshot, ElementSnapshot, NodeSnapshot, StyleDeclaration};

use super::{Dom, NodeData, NodeId};
use crate::error::{Error, Result};

impl Dom {
    /// Builds a document from a snapshot.
    ///
    /// Fails when an element has an empty or malformed tag, or a class entry
    /// containing whitespace.
    pub fn from_snapshot(snapshot: &DocumentSnapshot) -> Result<Self> {
        let mut dom = Self::empty();
        let root = dom.root();
        for child in &snapshot.children {
            dom.insert_snapshot(root, child)?;
        }
        Ok(dom)
    }

    /// The whole document as a snapshot.
    pub fn to_snapshot(&self) -> DocumentSnapshot {
        let children = self
            .children(self.root())
            .iter()
            .filter_map(|&child| self.node_snapshot(child))
            .collect();
        DocumentSnapshot::new(children)
    }

    /// Snapshot of one node and its subtree. `None` for the document node
    /// and unknown handles.
    pub fn node_snapshot(&self, node: NodeId) -> Option<NodeSnapshot> {
        match self.data(node)? {
            NodeData::Document => None,
            NodeData::Text(text) => Some(NodeSnapshot::text(text.clone())),
            NodeData::Comment(text) => Some(NodeSnapshot::comment(text.clone())),
            NodeData::Element(element) => Some(NodeSnapshot::Element(ElementSnapshot {
                tag: element.local_name.clone(),
                id: element.id.clone(),
                classes: element.classes.clone(),
                style: element
                    .style
                    .iter()
                    .map(|(property, value)| StyleDeclaration {
                        property: property.clone(),
                        value: value.clone(),
                    })
                    .collect(),
                attributes: element
                    .attributes
                    .iter()
                    .map(|(name, value)| Attribute {
                        name: name.clone(),
                        value: value.clone(),
                    })
                    .collect(),
                children: self
                    .children(node)
                    .iter()
                    .filter_map(|&child| self.node_snapshot(child))
                    .collect(),
            })),
        }
    }

    /// Appends a snapshot subtree under `parent` and returns the new node.
    pub fn insert_snapshot(&mut self, parent: NodeId, snapshot: &NodeSnapshot) -> Result<NodeId> {
        let node = match snapshot {
            NodeSnapshot::Text { text } => self.create_text_node(text),
            NodeSnapshot::Comment { text } => self.create_comment(text),
            NodeSnapshot::Element(element) => self.element_from_snapshot(element)?,
        };
        self.append_child(parent, node)?;

        if let NodeSnapshot::Element(element) = snapshot {
            for child in &element.children {
                self.insert_snapshot(node, child)?;
            }
        }
        Ok(node)
    }

    fn element_from_snapshot(&mut self, element: &ElementSnapshot) -> Result<NodeId> {
        let node = self
            .create_element(&element.tag)
            .map_err(|_| Error::InvalidSnapshot(format!("invalid tag '{}'", element.tag)))?;

        if let Some(id) = &element.id {
            self.set_id(node, id)?;
        }
        for class in &element.classes {
            self.add_class_token(node, class)
                .map_err(|_| Error::InvalidSnapshot(format!("invalid class '{class}'")))?;
        }
        for declaration in &element.style {
            self.set_style(node, &declaration.property, &declaration.value)
                .map_err(|_| {
                    Error::InvalidSnapshot(format!("invalid style property '{}'", declaration.property))
                })?;
        }
        for attribute in &element.attributes {
            self.set_attribute(node, &attribute.name, &attribute.value)
                .map_err(|_| Error::InvalidSnapshot(format!("invalid attribute '{}'", attribute.name)))?;
        }
        Ok(node)
    }
}
