//! Document snapshot types.

use serde::{Deserialize, Serialize};

/// Current schema version written into [`DocumentSnapshot`].
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// A whole document as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    #[serde(default = "default_schema")]
    pub schema: u32,
    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
}

fn default_schema() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

impl DocumentSnapshot {
    /// Creates a snapshot at the current schema version.
    pub fn new(children: Vec<NodeSnapshot>) -> Self {
        Self {
            schema: SNAPSHOT_SCHEMA_VERSION,
            children,
        }
    }
}

/// One node of a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeSnapshot {
    Element(ElementSnapshot),
    Text { text: String },
    Comment { text: String },
}

impl NodeSnapshot {
    pub fn text(text: impl Into<String>) -> Self {
        NodeSnapshot::Text { text: text.into() }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        NodeSnapshot::Comment { text: text.into() }
    }
}

impl From<ElementSnapshot> for NodeSnapshot {
    fn from(element: ElementSnapshot) -> Self {
        NodeSnapshot::Element(element)
    }
}

/// An element with its identity, class set, inline style and children.
///
/// `id`, `class` and `style` are lifted out of the generic attribute list
/// because they are what selectors and mutations operate on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<StyleDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl ElementSnapshot {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<NodeSnapshot>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A single inline style declaration, e.g. `display: none`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

/// A generic attribute other than `id`, `class` or `style`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_omits_empty_fields() {
        let json = serde_json::to_value(NodeSnapshot::from(ElementSnapshot::new("div"))).unwrap();
        assert_eq!(json, serde_json::json!({"type": "element", "tag": "div"}));
    }

    #[test]
    fn document_defaults_schema_when_missing() {
        let doc: DocumentSnapshot = serde_json::from_str(
            r#"{"children": [{"type": "element", "tag": "p", "children": [{"type": "text", "text": "hi"}]}]}"#,
        )
        .unwrap();

        assert_eq!(doc.schema, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(
            doc.children,
            vec![NodeSnapshot::from(
                ElementSnapshot::new("p").with_child(NodeSnapshot::text("hi"))
            )]
        );
    }
}
