//! HTML rendering for markup payloads.
//!
//! Serializes rcdom nodes back to HTML text. Used to capture the
//! `innerMarkup` payload of paragraph, list, quote, and generic blocks:
//! html5ever decodes entities on the way in, so text and attribute values
//! are re-escaped on the way out.
//!
//! A simple recursive traversal writing into a `String` buffer; no visitor
//! machinery.

use markup5ever_rcdom::{Handle, NodeData};

// =============================================================================
// Node rendering
// =============================================================================

/// Serialize a node including its own tags.
pub fn outer_html(node: &Handle) -> String {
    let mut output = String::new();
    render_node(node, &mut output);
    output
}

/// Serialize only the node's children.
pub fn inner_html(node: &Handle) -> String {
    let mut output = String::new();
    for child in node.children.borrow().iter() {
        render_node(child, &mut output);
    }
    output
}

fn render_node(node: &Handle, output: &mut String) {
    match &node.data {
        NodeData::Element { name, attrs, .. } => {
            let tag = &*name.local;
            output.push('<');
            output.push_str(tag);

            for a in attrs.borrow().iter() {
                output.push(' ');
                output.push_str(&a.name.local);
                output.push_str("=\"");
                output.push_str(&escape_attr(&a.value));
                output.push('"');
            }

            if is_void_element(tag) {
                output.push('>');
                return;
            }

            output.push('>');
            for child in node.children.borrow().iter() {
                render_node(child, output);
            }
            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
        NodeData::Text { contents } => {
            output.push_str(&escape_text(&contents.borrow()));
        }
        NodeData::Comment { contents } => {
            output.push_str("<!--");
            output.push_str(contents);
            output.push_str("-->");
        }
        // Document roots render as their children; doctypes and processing
        // instructions have no place inside a block payload.
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                render_node(child, output);
            }
        }
        NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}

// =============================================================================
// Escaping
// =============================================================================

/// Escape text content for HTML output.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an attribute value for HTML output.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if tag is a void element (no closing tag).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img"
            | "input" | "link" | "meta" | "param" | "source" | "track" | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
