//! Lenient HTML reader and serializer for [`Dom`].
//!
//! The reader is a tag tokenizer, not an HTML5 tree builder. It knows void
//! elements, raw-text elements and a handful of implicitly closed tags, and
//! it never fails: text it cannot make sense of stays text.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::entities::{decode_html_entities, escape_attribute, escape_text};
use super::{Dom, NodeData, NodeId, style};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)<!--(.*?)-->",
        r"|<![^>]*>|<\?[^>]*>",
        r"|</\s*([A-Za-z][A-Za-z0-9:_-]*)\s*>",
        r#"|<([A-Za-z][A-Za-z0-9:_-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    ))
    .expect("TOKEN_RE should compile")
});

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("ATTR_RE should compile")
});

static DOCUMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html[\s>]").expect("DOCUMENT_RE should compile"));

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];
const ESCAPABLE_RAW_TEXT_ELEMENTS: &[&str] = &["textarea", "title"];

/// Opening one of these closes an open element of the same name on top of
/// the stack (`<li>a<li>b` yields two siblings).
const SELF_NESTING_CLOSERS: &[&str] = &["p", "li", "option", "dt", "dd", "tr", "td", "th"];

/// Elements serialized without children or a closing tag.
pub fn is_void_element(local_name: &str) -> bool {
    VOID_ELEMENTS.contains(&local_name)
}

pub(super) fn looks_like_document(input: &str) -> bool {
    DOCUMENT_RE.is_match(input)
}

/// Tokenizes `input` and appends the resulting nodes under `container`.
pub(super) fn parse_into(dom: &mut Dom, container: NodeId, input: &str) {
    let mut stack = vec![container];
    let mut pos = 0;

    while let Some(caps) = TOKEN_RE.captures_at(input, pos) {
        let Some(whole) = caps.get(0) else { break };
        let current = *stack.last().unwrap_or(&container);
        push_text(dom, current, &input[pos..whole.start()]);
        pos = whole.end();

        if let Some(comment) = caps.get(1) {
            let node = dom.create_comment(comment.as_str());
            attach(dom, current, node);
        } else if let Some(closing) = caps.get(2) {
            let name = closing.as_str().to_ascii_lowercase();
            // Index 0 is the container itself and is never closed here.
            if let Some(depth) = stack
                .iter()
                .skip(1)
                .rposition(|&open| dom.local_name(open) == Some(name.as_str()))
            {
                stack.truncate(depth + 1);
            }
        } else if let Some(opening) = caps.get(3) {
            let name = opening.as_str().to_ascii_lowercase();
            let self_closing = caps.get(5).is_some_and(|m| m.as_str() == "/");

            if SELF_NESTING_CLOSERS.contains(&name.as_str())
                && stack.len() > 1
                && dom.local_name(current) == Some(name.as_str())
            {
                stack.pop();
            }
            let parent = *stack.last().unwrap_or(&container);

            let Ok(element) = dom.create_element(&name) else {
                continue;
            };
            if let Some(attrs) = caps.get(4) {
                apply_attributes(dom, element, attrs.as_str());
            }
            attach(dom, parent, element);

            if is_void_element(&name) || self_closing {
                continue;
            }
            if RAW_TEXT_ELEMENTS.contains(&name.as_str())
                || ESCAPABLE_RAW_TEXT_ELEMENTS.contains(&name.as_str())
            {
                pos = read_raw_text(dom, element, &name, input, pos);
                continue;
            }
            stack.push(element);
        }
        // Doctype and processing instructions are dropped.
    }

    let current = *stack.last().unwrap_or(&container);
    push_text(dom, current, &input[pos..]);
}

/// Consumes everything up to `</name>` as a single text child of `element`
/// and returns the position after the closing tag.
fn read_raw_text(dom: &mut Dom, element: NodeId, name: &str, input: &str, pos: usize) -> usize {
    let rest = &input[pos..];
    let needle = format!("</{name}");
    let (text, next) = match rest.to_ascii_lowercase().find(&needle) {
        Some(end) => {
            let after = rest[end..].find('>').map_or(rest.len(), |gt| end + gt + 1);
            (&rest[..end], pos + after)
        }
        None => (rest, input.len()),
    };

    if !text.is_empty() {
        let text = if RAW_TEXT_ELEMENTS.contains(&name) {
            text.to_string()
        } else {
            decode_html_entities(text)
        };
        let node = dom.create_text_node(&text);
        attach(dom, element, node);
    }
    next
}

fn push_text(dom: &mut Dom, parent: NodeId, raw: &str) {
    if raw.is_empty() {
        return;
    }
    let node = dom.create_text_node(&decode_html_entities(raw));
    attach(dom, parent, node);
}

fn apply_attributes(dom: &mut Dom, element: NodeId, raw: &str) {
    for caps in ATTR_RE.captures_iter(raw) {
        let Some(name) = caps.get(1) else { continue };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| decode_html_entities(m.as_str()))
            .unwrap_or_default();
        // Invalid names are skipped; the rest of the tag still applies.
        let _ = dom.set_attribute(element, name.as_str(), &value);
    }
}

fn attach(dom: &mut Dom, parent: NodeId, child: NodeId) {
    if let Err(err) = dom.append_child(parent, child) {
        tracing::warn!(target = "dollar", error = %err, "dropping unparented node");
    }
}

/// Appends the HTML for `node` to `out`.
pub(super) fn serialize(dom: &Dom, node: NodeId, out: &mut String) {
    let Some(data) = dom.data(node) else { return };
    match data {
        NodeData::Document => {
            for &child in dom.children(node) {
                serialize(dom, child, out);
            }
        }
        NodeData::Text(text) => {
            let raw_parent = dom
                .parent(node)
                .and_then(|p| dom.local_name(p))
                .is_some_and(|name| RAW_TEXT_ELEMENTS.contains(&name));
            if raw_parent {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeData::Element(element) => {
            out.push('<');
            out.push_str(&element.local_name);
            if let Some(id) = &element.id {
                push_attribute(out, "id", id);
            }
            if !element.classes.is_empty() {
                push_attribute(out, "class", &element.classes.join(" "));
            }
            if !element.style.is_empty() {
                push_attribute(out, "style", &style::serialize(&element.style));
            }
            for (name, value) in &element.attributes {
                push_attribute(out, name, value);
            }
            out.push('>');

            if is_void_element(&element.local_name) {
                return;
            }
            for &child in dom.children(node) {
                serialize(dom, child, out);
            }
            out.push_str("</");
            out.push_str(&element.local_name);
            out.push('>');
        }
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attribute(value, out);
    out.push('"');
}
