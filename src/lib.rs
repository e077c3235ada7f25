//! blockmark - Structured content blocks from HTML
//!
//! Converts HTML fragments (typically produced by an AI content generator)
//! into an ordered sequence of typed content blocks, and serializes that
//! sequence as WordPress-style block markup.
//!
//! ## Core Concepts
//!
//! **Closed block model**: top-level elements classify into a fixed set of
//! variants (heading, paragraph, list, quote, generic) instead of tag-name
//! strings inspected at call sites.
//!
//! **Fallback chain**: input that is not recognizably HTML degrades to a
//! plain text parser; FAQ input with no item containers degrades to
//! `Q:`/`A:` line parsing. Conversion never fails and never panics on
//! malformed input.
//!
//! ## Modules
//! - `block`: `Block`, `BlockKind`, and the `Blocks` sequence
//! - `convert`: HTML, FAQ, and plain text parsers plus shape dispatch
//! - `dom`: query helpers over the parsed rcdom tree
//! - `render`: DOM nodes back to HTML text for markup payloads
//! - `serialize`: block markup document in and out
//!
//! ## Usage
//!
//! ```
//! use blockmark::{ContentShape, convert, convert_to_markup};
//!
//! let blocks = convert("<h2>Hello</h2><p>World.</p>", ContentShape::Article);
//! assert_eq!(blocks.len(), 2);
//!
//! let markup = convert_to_markup("<h2>Hello</h2><p>World.</p>", ContentShape::Article);
//! assert!(markup.starts_with("<!-- wp:heading -->"));
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Block types: Block, BlockKind, Blocks
pub mod block;

/// Conversion strategies: HTML, FAQ, plain text
pub mod convert;

/// DOM access helpers over rcdom handles
pub mod dom;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

/// HTML rendering for markup payloads
pub mod render;

/// Block markup serialization
pub mod serialize;

// =============================================================================
// Re-exports
// =============================================================================

// Block types
pub use block::{Block, BlockKind, Blocks};

// Conversion
pub use convert::{
    ContentShape, convert, convert_to_markup, faq_to_blocks, html_to_blocks, looks_like_faq,
    text_to_blocks,
};

// Block markup
pub use serialize::{from_markup, to_markup};

// Error types
pub use error::{MarkupError, MarkupResult};

// =============================================================================
// Tests
// =============================================================================
