//! Conversion from source content to blocks.
//!
//! Three parsers form a fallback chain:
//! - `html`: classify the direct children of the parsed body
//! - `faq`: pair question/answer containers, or `Q:`/`A:` lines
//! - `text`: blank-line paragraph splitting with `#` headings
//!
//! Conversion never fails. Malformed input degrades down the chain and
//! empty input yields an empty sequence; the caller decides what an empty
//! result means.

mod faq;
mod html;
mod text;

pub use faq::{faq_to_blocks, looks_like_faq};
pub use html::html_to_blocks;
pub use text::text_to_blocks;

use tracing::debug;

use crate::block::Blocks;
use crate::serialize::to_markup;

// =============================================================================
// ContentShape
// =============================================================================

/// The shape of incoming content, selecting the parse strategy.
///
/// Mirrors the upstream generator's signal; use [`ContentShape::detect`]
/// when no signal is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentShape {
    /// General article content: headings, paragraphs, lists, quotes.
    #[default]
    Article,
    /// FAQ content: question/answer pairs.
    Faq,
}

impl ContentShape {
    /// Detect the shape from raw markup via the FAQ marker probe.
    pub fn detect(input: &str) -> Self {
        if looks_like_faq(input) {
            ContentShape::Faq
        } else {
            ContentShape::Article
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Convert source content into blocks using the strategy for `shape`.
pub fn convert(input: &str, shape: ContentShape) -> Blocks {
    debug!(?shape, len = input.len(), "converting content");
    match shape {
        ContentShape::Article => html_to_blocks(input),
        ContentShape::Faq => faq_to_blocks(input),
    }
}

/// Convert source content straight to block markup.
///
/// The one-call form for hosts that store the serialized document and never
/// touch the block sequence.
pub fn convert_to_markup(input: &str, shape: ContentShape) -> String {
    to_markup(&convert(input, shape))
}

// =============================================================================
// Tests
// =============================================================================
