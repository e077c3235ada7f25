//! Content block types.
//!
//! `Block` is the unit of a converted document: a closed set of typed
//! variants rather than tag-name strings inspected ad hoc at call sites.
//! Blocks never nest; a converted document is a flat ordered sequence.

use smallvec::SmallVec;

// =============================================================================
// Block
// =============================================================================

/// One block in a converted document.
///
/// Headings carry flattened text (tags stripped); every other variant carries
/// the full serialized markup of its source element, wrapper included, since
/// downstream consumers re-render that markup verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `<h1>`..`<h6>`, level 1..=6.
    Heading { level: u8, text: String },
    /// `<p>` with its serialized markup.
    Paragraph { markup: String },
    /// `<ul>` or `<ol>` with its serialized markup.
    List { markup: String, ordered: bool },
    /// `<blockquote>` with its serialized markup.
    Quote { markup: String },
    /// Any other top-level element, markup preserved as-is.
    Generic { markup: String },
}

impl Block {
    /// Create a heading block. Levels outside 1..=6 are clamped.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Create a paragraph block from serialized markup.
    pub fn paragraph(markup: impl Into<String>) -> Self {
        Block::Paragraph {
            markup: markup.into(),
        }
    }

    /// Create a list block from serialized markup.
    pub fn list(markup: impl Into<String>, ordered: bool) -> Self {
        Block::List {
            markup: markup.into(),
            ordered,
        }
    }

    /// Create a quote block from serialized markup.
    pub fn quote(markup: impl Into<String>) -> Self {
        Block::Quote {
            markup: markup.into(),
        }
    }

    /// Create a generic block from serialized markup.
    pub fn generic(markup: impl Into<String>) -> Self {
        Block::Generic {
            markup: markup.into(),
        }
    }

    /// Parse a heading level from a tag name: "h1" -> 1.
    pub fn level_from_tag(tag: &str) -> u8 {
        tag.chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(1) as u8
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The field-free discriminant of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::List { .. } => BlockKind::List,
            Block::Quote { .. } => BlockKind::Quote,
            Block::Generic { .. } => BlockKind::Generic,
        }
    }

    /// Heading level, `None` for non-heading blocks.
    pub fn level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// The textual payload: flattened text for headings, serialized markup
    /// for everything else.
    pub fn content(&self) -> &str {
        match self {
            Block::Heading { text, .. } => text,
            Block::Paragraph { markup }
            | Block::List { markup, .. }
            | Block::Quote { markup }
            | Block::Generic { markup } => markup,
        }
    }

    /// Check if this is a heading block.
    #[inline]
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this is a paragraph block.
    #[inline]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph { .. })
    }
}

// =============================================================================
// BlockKind
// =============================================================================

/// Block discriminant, for comparing kind sequences without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    Quote,
    Generic,
}

impl BlockKind {
    /// Stable lowercase name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List => "list",
            BlockKind::Quote => "quote",
            BlockKind::Generic => "generic",
        }
    }
}

/// Ordered block sequence produced by a conversion.
///
/// Inline capacity covers typical generated fragments without a heap
/// allocation.
pub type Blocks = SmallVec<[Block; 8]>;

/// Collect the kind of every block, in order.
pub fn kinds(blocks: &[Block]) -> Vec<BlockKind> {
    blocks.iter().map(Block::kind).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_clamps_level() {
        assert_eq!(Block::heading(0, "x").level(), Some(1));
        assert_eq!(Block::heading(3, "x").level(), Some(3));
        assert_eq!(Block::heading(9, "x").level(), Some(6));
    }

    #[test]
    fn test_level_from_tag() {
        assert_eq!(Block::level_from_tag("h1"), 1);
        assert_eq!(Block::level_from_tag("h6"), 6);
    }

    #[test]
    fn test_kind_and_content() {
        let b = Block::paragraph("<p>hi</p>");
        assert_eq!(b.kind(), BlockKind::Paragraph);
        assert_eq!(b.content(), "<p>hi</p>");
        assert!(b.is_paragraph());
        assert!(!b.is_heading());

        let h = Block::heading(2, "Title");
        assert_eq!(h.content(), "Title");
        assert_eq!(h.kind().name(), "heading");
    }

    #[test]
    fn test_kinds_sequence() {
        let blocks = vec![
            Block::heading(2, "t"),
            Block::list("<ul><li>a</li></ul>", false),
        ];
        assert_eq!(kinds(&blocks), vec![BlockKind::Heading, BlockKind::List]);
    }
}
