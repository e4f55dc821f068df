//! Structural line predicates for model files.
//!
//! Keywords are case-sensitive and may be indented. Callers pass the line
//! without its terminator. Matching works on raw bytes, so lines that are
//! not valid UTF-8 are still classified.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

static BOX_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*box\s*:").unwrap());
static BLOCK_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*block\s*:").unwrap());
static MODELLIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*modellist\s*:").unwrap());
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#").unwrap());
static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());

pub const COMMENT_PREFIX: &[u8] = b"# ";

pub fn is_box_start(line: impl AsRef<[u8]>) -> bool {
    BOX_START_RE.is_match(line.as_ref())
}

pub fn is_block_start(line: impl AsRef<[u8]>) -> bool {
    BLOCK_START_RE.is_match(line.as_ref())
}

pub fn is_modellist_line(line: impl AsRef<[u8]>) -> bool {
    MODELLIST_RE.is_match(line.as_ref())
}

pub fn is_comment(line: impl AsRef<[u8]>) -> bool {
    COMMENT_RE.is_match(line.as_ref())
}

pub fn is_blank(line: impl AsRef<[u8]>) -> bool {
    BLANK_RE.is_match(line.as_ref())
}
