//! FAQ-shaped HTML to blocks.
//!
//! FAQ content arrives as item containers marked by a known class, each
//! grouping one question element and zero or one answer elements. The
//! output is alternating heading/paragraph pairs in source order, with
//! questions pinned at heading level 3.
//!
//! When the markup carries no item containers at all, the input is treated
//! as plain `Q:`/`A:` prefixed lines instead.

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::block::{Block, Blocks};
use crate::dom;
use crate::render::{self, escape_text};

/// Class markers identifying a FAQ item container.
const FAQ_ITEM_CLASSES: &[&str] = &["faq-item", "faq-entry"];

/// Heading level for FAQ questions.
const FAQ_QUESTION_LEVEL: u8 = 3;

/// Plain substring probe for FAQ-shaped markup, for callers without an
/// upstream signal. Not fuzzy.
pub fn looks_like_faq(html: &str) -> bool {
    FAQ_ITEM_CLASSES.iter().any(|class| html.contains(class))
}

/// Convert FAQ-shaped HTML into alternating heading/paragraph pairs.
pub fn faq_to_blocks(html: &str) -> Blocks {
    if html.trim().is_empty() {
        return Blocks::new();
    }

    let tree = dom::parse(html);
    let mut items = Vec::new();
    if let Some(body) = dom::body(&tree) {
        dom::collect_matching(&body, &is_faq_item, &mut items);
    }

    if items.is_empty() {
        debug!("no FAQ item containers found, trying Q:/A: line format");
        return qa_lines_to_blocks(html);
    }

    let mut blocks = Blocks::new();
    for item in &items {
        if let Some(question) = dom::find_first(item, &is_heading) {
            blocks.push(Block::heading(
                FAQ_QUESTION_LEVEL,
                dom::text_content(&question).trim(),
            ));
        }
        // An unanswered question stays a lone heading; no synthetic empty
        // paragraph
        if let Some(answer) = dom::find_first(item, &is_paragraph) {
            blocks.push(Block::paragraph(render::outer_html(&answer)));
        }
    }
    blocks
}

fn is_faq_item(node: &Handle) -> bool {
    FAQ_ITEM_CLASSES.iter().any(|class| dom::has_class(node, class))
}

fn is_heading(node: &Handle) -> bool {
    matches!(
        dom::tag_name(node).as_deref(),
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    )
}

fn is_paragraph(node: &Handle) -> bool {
    dom::tag_name(node).as_deref() == Some("p")
}

// =============================================================================
// Q:/A: line fallback
// =============================================================================

/// Parse `Q:`/`A:` prefixed lines. The prefix match is ASCII
/// case-insensitive and strips a single leading prefix only; lines without
/// either prefix are dropped.
fn qa_lines_to_blocks(text: &str) -> Blocks {
    let mut blocks = Blocks::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(question) = strip_prefix_ci(line, "q:") {
            blocks.push(Block::heading(FAQ_QUESTION_LEVEL, question.trim()));
        } else if let Some(answer) = strip_prefix_ci(line, "a:") {
            blocks.push(Block::paragraph(format!(
                "<p>{}</p>",
                escape_text(answer.trim())
            )));
        }
    }
    blocks
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    if line.len() >= prefix.len() && line[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, kinds};

    #[test]
    fn test_two_items_make_four_blocks() {
        let html = r#"
            <div class="faq-item"><h3>What?</h3><p>This.</p></div>
            <div class="faq-item"><h3>Why?</h3><p>Because.</p></div>
        "#;
        let blocks = faq_to_blocks(html);
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::Heading,
                BlockKind::Paragraph,
            ]
        );
        assert_eq!(blocks[0], Block::heading(3, "What?"));
        assert_eq!(blocks[1], Block::paragraph("<p>This.</p>"));
        assert_eq!(blocks[2], Block::heading(3, "Why?"));
    }

    #[test]
    fn test_question_level_pinned_at_three() {
        let html = r#"<div class="faq-item"><h2>Q</h2><p>A</p></div>"#;
        let blocks = faq_to_blocks(html);
        assert_eq!(blocks[0].level(), Some(3));
    }

    #[test]
    fn test_unanswered_question_is_lone_heading() {
        let html = r#"
            <div class="faq-item"><h3>First?</h3><p>Answered.</p></div>
            <div class="faq-item"><h3>Last?</h3></div>
        "#;
        let blocks = faq_to_blocks(html);
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Heading, BlockKind::Paragraph, BlockKind::Heading]
        );
        assert_eq!(blocks[2], Block::heading(3, "Last?"));
    }

    #[test]
    fn test_empty_container_contributes_nothing() {
        let html = r#"<div class="faq-item"><span>noise</span></div>"#;
        assert!(faq_to_blocks(html).is_empty());
    }

    #[test]
    fn test_only_first_heading_and_paragraph_taken() {
        let html = r#"
            <div class="faq-entry">
                <h4>Q1</h4><h4>ignored</h4>
                <p>A1</p><p>ignored</p>
            </div>
        "#;
        let blocks = faq_to_blocks(html);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block::heading(3, "Q1"));
        assert_eq!(blocks[1], Block::paragraph("<p>A1</p>"));
    }

    #[test]
    fn test_qa_line_fallback() {
        let blocks = faq_to_blocks("Q: What?\nA: This.\n\nQ: Why?\nA: Because.");
        assert_eq!(
            blocks.to_vec(),
            vec![
                Block::heading(3, "What?"),
                Block::paragraph("<p>This.</p>"),
                Block::heading(3, "Why?"),
                Block::paragraph("<p>Because.</p>"),
            ]
        );
    }

    #[test]
    fn test_qa_prefix_case_insensitive() {
        let blocks = faq_to_blocks("q: lower?\nA: yes.");
        assert_eq!(blocks[0], Block::heading(3, "lower?"));
    }

    #[test]
    fn test_qa_strips_single_prefix_only() {
        let blocks = faq_to_blocks("Q: Q: nested");
        assert_eq!(blocks[0], Block::heading(3, "Q: nested"));
    }

    #[test]
    fn test_qa_fallback_drops_unprefixed_lines() {
        let blocks = faq_to_blocks("intro line\nQ: kept?\ncommentary\nA: kept.");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(faq_to_blocks("").is_empty());
        assert!(faq_to_blocks("  \n ").is_empty());
        assert!(faq_to_blocks("no markers, no prefixes").is_empty());
    }

    #[test]
    fn test_looks_like_faq() {
        assert!(looks_like_faq(r#"<div class="faq-item">x</div>"#));
        assert!(looks_like_faq(r#"<section class="faq-entry extra">x</section>"#));
        assert!(!looks_like_faq("<p>plain article</p>"));
    }
}
