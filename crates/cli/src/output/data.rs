use dollar::dom::{Dom, NodeId};
use dollar_protocol::DocumentSnapshot;
use serde::{Deserialize, Serialize};

use crate::output::Render;

/// Payload of `dollar query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
	pub selector: String,
	/// `id`, `class` or `tag`
	pub kind: String,
	pub count: usize,
	pub elements: Vec<MatchedElement>,
}

/// One matched element as reported by `query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedElement {
	pub tag: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub classes: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub display: Option<String>,
	pub text: String,
	pub html: String,
}

impl MatchedElement {
	pub fn describe(dom: &Dom, element: NodeId) -> Self {
		Self {
			tag: dom.local_name(element).unwrap_or_default().to_string(),
			id: dom.id(element).map(str::to_string),
			classes: dom.class_list(element).to_vec(),
			display: dom.style_property(element, "display").map(str::to_string),
			text: dom.text_content(element),
			html: dom.outer_html(element),
		}
	}

	/// `div#page.a.b`
	fn summary(&self) -> String {
		let mut out = self.tag.clone();
		if let Some(id) = &self.id {
			out.push('#');
			out.push_str(id);
		}
		for class in &self.classes {
			out.push('.');
			out.push_str(class);
		}
		out
	}
}

impl Render for QueryData {
	fn render_text(&self) -> String {
		let mut lines = vec![format!("{} match(es) for {} selector '{}'", self.count, self.kind, self.selector)];
		for element in &self.elements {
			let mut line = format!("  {}", element.summary());
			if let Some(display) = &element.display {
				line.push_str(&format!(" [display: {display}]"));
			}
			let text = element.text.trim();
			if !text.is_empty() {
				line.push_str(&format!(" {text:?}"));
			}
			lines.push(line);
		}
		lines.join("\n")
	}

	fn render_html(&self) -> String {
		self.elements.iter().map(|e| e.html.as_str()).collect::<Vec<_>>().join("\n")
	}
}

/// Payload of `dollar apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyData {
	pub selector: String,
	pub kind: String,
	pub count: usize,
	pub operations: Vec<String>,
	/// The whole document after the operations ran
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub snapshot: Option<DocumentSnapshot>,
}

impl Render for ApplyData {
	fn render_text(&self) -> String {
		match (&self.html, &self.snapshot) {
			(Some(html), _) => html.clone(),
			(None, Some(snapshot)) => serde_json::to_string_pretty(snapshot).unwrap_or_default(),
			(None, None) => String::new(),
		}
	}

	fn render_html(&self) -> String {
		self.html.clone().unwrap_or_default()
	}
}
