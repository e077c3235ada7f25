//! Prelude module for common imports.
//!
//! ```
//! use blockmark::prelude::*;
//! ```

// Block types
pub use crate::block::{Block, BlockKind, Blocks, kinds};

// Conversion
pub use crate::convert::{
    ContentShape, convert, convert_to_markup, faq_to_blocks, html_to_blocks, looks_like_faq,
    text_to_blocks,
};

// Block markup
pub use crate::serialize::{DEFAULT_HEADING_LEVEL, from_markup, to_markup};

// Errors
pub use crate::error::{MarkupError, MarkupResult};
