//! Block markup serialization.
//!
//! Renders a block sequence into the `<!-- wp:... -->` delimited document
//! format and re-parses such documents back into blocks. Serialization is
//! pure and infallible; re-parsing validates the delimiter grammar and
//! attribute JSON and is the crate's only fallible surface.
//!
//! Grammar per block:
//!
//! ```text
//! <!-- wp:heading {"level":3} -->
//! <h3>Question text</h3>
//! <!-- /wp:heading -->
//! ```
//!
//! The attribute object is omitted when empty. Blocks are separated by a
//! blank line. No block is dropped or reordered in either direction; markup
//! safety is a caller concern and nothing here sanitizes payloads.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::block::{Block, Blocks};
use crate::error::{MarkupError, MarkupResult};
use crate::render::escape_text;

/// Heading level that serializes without an attribute object, and the level
/// assumed when a heading block carries none.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

// =============================================================================
// Block attributes
// =============================================================================

/// JSON attribute object carried by a block delimiter.
///
/// Unknown keys from foreign documents are ignored on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BlockAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordered: Option<bool>,
}

impl BlockAttrs {
    fn is_empty(&self) -> bool {
        self.level.is_none() && self.ordered.is_none()
    }

    fn to_json(&self) -> String {
        // Two optional scalars; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Render a block sequence as a block markup document.
pub fn to_markup(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(blocks.len() * 64);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        write_block(block, &mut out);
    }
    out
}

fn write_block(block: &Block, out: &mut String) {
    let (name, attrs, body) = match block {
        Block::Heading { level, text } => (
            "heading",
            BlockAttrs {
                level: (*level != DEFAULT_HEADING_LEVEL).then_some(*level),
                ordered: None,
            },
            format!("<h{level}>{}</h{level}>", escape_text(text)),
        ),
        Block::Paragraph { markup } => ("paragraph", BlockAttrs::default(), markup.clone()),
        Block::List { markup, ordered } => (
            "list",
            BlockAttrs {
                level: None,
                ordered: (*ordered).then_some(true),
            },
            markup.clone(),
        ),
        Block::Quote { markup } => ("quote", BlockAttrs::default(), markup.clone()),
        // The raw-HTML block keeps generic payloads byte-identical and the
        // kind recoverable on re-parse.
        Block::Generic { markup } => ("html", BlockAttrs::default(), markup.clone()),
    };

    out.push_str("<!-- wp:");
    out.push_str(name);
    if !attrs.is_empty() {
        out.push(' ');
        out.push_str(&attrs.to_json());
    }
    out.push_str(" -->\n");
    out.push_str(&body);
    out.push_str("\n<!-- /wp:");
    out.push_str(name);
    out.push_str(" -->");
}

// =============================================================================
// Deserialization
// =============================================================================

/// Re-parse a block markup document into a block sequence.
///
/// Unknown block names map to [`Block::Generic`] with their payload
/// preserved. Content outside delimiters and plain comments are skipped.
pub fn from_markup(input: &str) -> MarkupResult<Blocks> {
    let mut blocks = Blocks::new();
    let mut pos = 0;

    while let Some(off) = input[pos..].find("<!--") {
        let cstart = pos + off;
        let Some(cend_off) = input[cstart + 4..].find("-->") else {
            return Err(MarkupError::malformed(snippet(&input[cstart..])));
        };
        let cend = cstart + 4 + cend_off;
        let comment = input[cstart + 4..cend].trim();
        let after = cend + 3;

        if let Some(opener) = comment.strip_prefix("wp:") {
            let (name, attrs) = parse_delimiter(opener, comment)?;
            let (body_end, closer_end) = find_closer(input, after, &name)?;
            let body = input[after..body_end].trim();
            blocks.push(build_block(&name, &attrs, body));
            pos = closer_end;
        } else if comment.starts_with("/wp:") {
            // A closer with no open block
            return Err(MarkupError::malformed(comment));
        } else {
            pos = after;
        }
    }

    Ok(blocks)
}

/// Split an opening delimiter into block name and parsed attributes.
fn parse_delimiter(opener: &str, comment: &str) -> MarkupResult<(CompactString, BlockAttrs)> {
    let opener = opener.trim();
    let (name, attr_json) = match opener.find(char::is_whitespace) {
        Some(i) => (&opener[..i], opener[i..].trim()),
        None => (opener, ""),
    };
    if name.is_empty() {
        return Err(MarkupError::malformed(comment));
    }
    let name = CompactString::from(name);
    let attrs = if attr_json.is_empty() {
        BlockAttrs::default()
    } else {
        serde_json::from_str(attr_json).map_err(|e| MarkupError::attrs(name.as_str(), e))?
    };
    Ok((name, attrs))
}

/// Scan forward from `start` for the closer of `name`.
///
/// Returns (start of closer comment, end of closer comment). Comments inside
/// the body that are not closers are skipped.
fn find_closer(input: &str, start: usize, name: &str) -> MarkupResult<(usize, usize)> {
    let mut scan = start;
    loop {
        let Some(off) = input[scan..].find("<!--") else {
            return Err(MarkupError::Unterminated(name.to_string()));
        };
        let s = scan + off;
        let Some(e_off) = input[s + 4..].find("-->") else {
            return Err(MarkupError::Unterminated(name.to_string()));
        };
        let e = s + 4 + e_off;
        let comment = input[s + 4..e].trim();
        if let Some(closer) = comment.strip_prefix("/wp:") {
            let found = closer.trim();
            if found == name {
                return Ok((s, e + 3));
            }
            return Err(MarkupError::MismatchedCloser {
                expected: name.to_string(),
                found: found.to_string(),
            });
        }
        scan = e + 3;
    }
}

fn build_block(name: &str, attrs: &BlockAttrs, body: &str) -> Block {
    match name {
        "heading" => {
            let level = attrs.level.unwrap_or(DEFAULT_HEADING_LEVEL);
            Block::heading(level, heading_text(body))
        }
        "paragraph" => Block::paragraph(body),
        "list" => Block::list(body, attrs.ordered.unwrap_or(false)),
        "quote" => Block::quote(body),
        _ => Block::generic(body),
    }
}

/// Recover flattened heading text from a `<hN>...</hN>` payload.
fn heading_text(body: &str) -> String {
    unescape_entities(strip_tags(body).trim())
}

// =============================================================================
// Text helpers
// =============================================================================

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Inverse of the render-side escaping for the entities it emits, plus the
/// apostrophe forms common in foreign documents.
fn unescape_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let mut replaced = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#039;", '\''),
            ("&#39;", '\''),
        ] {
            if let Some(r) = rest.strip_prefix(entity) {
                out.push(ch);
                rest = r;
                replaced = true;
                break;
            }
        }
        if !replaced {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

fn snippet(s: &str) -> &str {
    let end = s
        .char_indices()
        .nth(40)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

// =============================================================================
// Tests
// =============================================================================
