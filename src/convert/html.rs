//! HTML fragment to blocks.
//!
//! Parses the fragment with html5ever and classifies only the direct
//! children of `<body>`: one block per top-level element, in source order.
//! Content generators like to wrap their output in a styled `<div>`; that
//! decorative wrapper is unwrapped before classification.
//!
//! Top-level text nodes and non-element nodes are dropped. Input that
//! yields no body, or a body with no element children at all, is handed to
//! the plain text parser instead.

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::block::{Block, Blocks};
use crate::convert::text::text_to_blocks;
use crate::dom;
use crate::render;

/// Convert an HTML fragment into blocks.
pub fn html_to_blocks(html: &str) -> Blocks {
    if html.trim().is_empty() {
        return Blocks::new();
    }

    let tree = dom::parse(html);
    let Some(body) = dom::body(&tree) else {
        debug!("no body recovered from input, using plain text parser");
        return text_to_blocks(html);
    };

    let root = unwrap_decorative(body);
    let elements = dom::child_elements(&root);
    if elements.is_empty() {
        debug!("no element children under root, using plain text parser");
        return text_to_blocks(html);
    }

    elements.iter().map(classify).collect()
}

/// Descend through decorative wrappers: a sole `<div>` child carrying
/// inline background styling is presentation, not content.
fn unwrap_decorative(root: Handle) -> Handle {
    let mut root = root;
    loop {
        let elements = dom::child_elements(&root);
        match elements.as_slice() {
            [only] if is_decorative_wrapper(only) => root = only.clone(),
            _ => return root,
        }
    }
}

fn is_decorative_wrapper(node: &Handle) -> bool {
    dom::tag_name(node).as_deref() == Some("div")
        && dom::attr(node, "style")
            .map(|s| s.contains("background"))
            .unwrap_or(false)
}

/// Map one top-level element to its block.
fn classify(elem: &Handle) -> Block {
    let tag = dom::tag_name(elem).unwrap_or_default();
    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Block::heading(
            Block::level_from_tag(&tag),
            dom::text_content(elem).trim(),
        ),
        "p" => Block::paragraph(render::outer_html(elem)),
        "ul" => Block::list(render::outer_html(elem), false),
        "ol" => Block::list(render::outer_html(elem), true),
        "blockquote" => Block::quote(render::outer_html(elem)),
        // Paragraph rule for everything else: keep the full markup
        _ => Block::generic(render::outer_html(elem)),
    }
}

// =============================================================================
// Tests
// =============================================================================
