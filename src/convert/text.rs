//! Plain text to blocks.
//!
//! Last resort in the parser fallback chain, for input that is not (or
//! cannot be parsed as) HTML. Candidates are split on blank lines; a
//! Markdown-style `#` run marks a heading, everything else becomes a
//! paragraph.

use crate::block::{Block, Blocks};
use crate::render::escape_text;

/// Convert plain text into blocks.
///
/// Paragraph candidates are separated by blank lines (two or more
/// consecutive newlines). Heading levels from `#` runs clamp to 6.
pub fn text_to_blocks(text: &str) -> Blocks {
    let mut blocks = Blocks::new();
    for candidate in split_candidates(text) {
        blocks.push(match heading_candidate(&candidate) {
            Some(heading) => heading,
            None => Block::paragraph(format!("<p>{}</p>", escape_text(candidate.trim()))),
        });
    }
    blocks
}

/// Split on blank-line boundaries; candidates are trimmed and never empty.
fn split_candidates(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// `## Title` -> Heading(2, "Title"). A `#` run must be followed by a space.
fn heading_candidate(candidate: &str) -> Option<Block> {
    let hashes = candidate.chars().take_while(|&c| c == '#').count();
    if hashes == 0 {
        return None;
    }
    let rest = candidate[hashes..].strip_prefix(' ')?;
    Some(Block::heading(hashes.min(6) as u8, rest.trim()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn test_blank_line_splitting() {
        let blocks = text_to_blocks("First para.\n\nSecond para.\n\n\n\nThird.");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::paragraph("<p>First para.</p>"));
        assert_eq!(blocks[2], Block::paragraph("<p>Third.</p>"));
    }

    #[test]
    fn test_single_newline_keeps_candidate_together() {
        let blocks = text_to_blocks("line one\nline two");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], Block::paragraph("<p>line one\nline two</p>"));
    }

    #[test]
    fn test_markdown_headings() {
        let blocks = text_to_blocks("## Section\n\nBody text.");
        assert_eq!(blocks[0], Block::heading(2, "Section"));
        assert_eq!(blocks[1].kind(), BlockKind::Paragraph);
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let blocks = text_to_blocks("#hashtag");
        assert_eq!(blocks[0], Block::paragraph("<p>#hashtag</p>"));
    }

    #[test]
    fn test_clamps_heading_runs_past_six() {
        let blocks = text_to_blocks("####### Deep");
        assert_eq!(blocks[0], Block::heading(6, "Deep"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(text_to_blocks("").is_empty());
        assert!(text_to_blocks("   \n\n  \t\n").is_empty());
    }

    #[test]
    fn test_text_is_escaped() {
        let blocks = text_to_blocks("1 < 2 & 3");
        assert_eq!(blocks[0], Block::paragraph("<p>1 &lt; 2 &amp; 3</p>"));
    }

    #[test]
    fn test_crlf_input() {
        let blocks = text_to_blocks("a\r\n\r\nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block::paragraph("<p>a</p>"));
    }
}
