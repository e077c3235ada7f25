//! DOM access helpers over `markup5ever_rcdom` handles.
//!
//! html5ever's rcdom exposes nodes as `Rc` handles with `RefCell` internals;
//! this module wraps the borrow-and-match noise behind the small query
//! surface the converters need: tag and attribute access, child iteration,
//! flattened text content, and predicate-based search.

use compact_str::CompactString;
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

// =============================================================================
// Parsing
// =============================================================================

/// Parse an HTML string into an rcdom tree.
///
/// html5ever is tag-soup tolerant: malformed input is recovered into a
/// well-formed tree rather than rejected, and entities are decoded during
/// tokenization.
pub fn parse(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts).one(html)
}

/// Locate the `<body>` element of a parsed tree.
pub fn body(dom: &RcDom) -> Option<Handle> {
    find_first(&dom.document, &|n| tag_name(n).as_deref() == Some("body"))
}

// =============================================================================
// Node access
// =============================================================================

/// Check if this is an element node.
#[inline]
pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Lowercase tag name, `None` for non-element nodes.
///
/// Tag names are short, so they come back as inline `CompactString`s.
pub fn tag_name(node: &Handle) -> Option<CompactString> {
    match &node.data {
        NodeData::Element { name, .. } => Some(CompactString::from(&*name.local)),
        _ => None,
    }
}

/// Attribute value by name, `None` if absent or not an element.
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Check whether the element's `class` list contains `class` (ASCII
/// case-insensitive, whitespace-separated tokens).
pub fn has_class(node: &Handle, class: &str) -> bool {
    attr(node, "class")
        .map(|c| c.split_whitespace().any(|t| t.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

/// Direct children of a node. Handles are `Rc`s, so cloning is cheap.
pub fn children(node: &Handle) -> Vec<Handle> {
    node.children.borrow().clone()
}

/// Direct children that are elements.
pub fn child_elements(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|n| is_element(n))
        .cloned()
        .collect()
}

/// Flattened text content: all descendant text nodes concatenated, tags
/// stripped.
pub fn text_content(node: &Handle) -> String {
    let mut buf = String::new();
    collect_text(node, &mut buf);
    buf
}

fn collect_text(node: &Handle, buf: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        buf.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, buf);
    }
}

// =============================================================================
// Search
// =============================================================================

/// Find the first element matching the predicate (depth-first).
pub fn find_first<F>(node: &Handle, predicate: &F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    if is_element(node) && predicate(node) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_first(child, predicate) {
            return Some(found);
        }
    }
    None
}

/// Collect every element matching the predicate, in document order.
/// Matched elements are still descended into.
pub fn collect_matching<F>(node: &Handle, predicate: &F, out: &mut Vec<Handle>)
where
    F: Fn(&Handle) -> bool,
{
    if is_element(node) && predicate(node) {
        out.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_matching(child, predicate, out);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_find_body() {
        let dom = parse("<p>hello</p>");
        let body = body(&dom).expect("body");
        assert_eq!(tag_name(&body).as_deref(), Some("body"));
        assert_eq!(child_elements(&body).len(), 1);
        assert_eq!(children(&body).len(), child_elements(&body).len());
    }

    #[test]
    fn test_tag_and_attr() {
        let dom = parse(r#"<div id="main" class="wrap outer">x</div>"#);
        let div = find_first(&dom.document, &|n| tag_name(n).as_deref() == Some("div"))
            .expect("div");
        assert_eq!(attr(&div, "id").as_deref(), Some("main"));
        assert!(has_class(&div, "outer"));
        assert!(has_class(&div, "WRAP"));
        assert!(!has_class(&div, "inner"));
    }

    #[test]
    fn test_text_content_flattens_markup() {
        let dom = parse("<h2>One <em>two</em> three</h2>");
        let h2 = find_first(&dom.document, &|n| tag_name(n).as_deref() == Some("h2"))
            .expect("h2");
        assert_eq!(text_content(&h2), "One two three");
    }

    #[test]
    fn test_entities_decoded_by_parser() {
        let dom = parse("<p>fish &amp; chips</p>");
        let p = find_first(&dom.document, &|n| tag_name(n).as_deref() == Some("p"))
            .expect("p");
        assert_eq!(text_content(&p), "fish & chips");
    }

    #[test]
    fn test_collect_matching_in_document_order() {
        let dom = parse("<ul><li>a</li><li>b</li></ul><li>c</li>");
        let mut items = Vec::new();
        collect_matching(
            &dom.document,
            &|n| tag_name(n).as_deref() == Some("li"),
            &mut items,
        );
        assert_eq!(items.len(), 3);
        assert_eq!(text_content(&items[0]), "a");
        assert_eq!(text_content(&items[2]), "c");
    }

    #[test]
    fn test_tolerates_tag_soup() {
        let dom = parse("<p>unclosed <b>bold<p>next");
        assert!(body(&dom).is_some());
    }
}
