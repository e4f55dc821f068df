//! Block disabler: maps reported line numbers to whole definition units and
//! comments them out.
//!
//! Planning is read-only. `apply` runs only after the full plan exists, so
//! the boundary scans never see partially commented content.

use crate::domain::models::{CommentPlan, DisableOutcome};
use crate::services::markers::{
    is_blank, is_block_start, is_box_start, is_comment, is_modellist_line, COMMENT_PREFIX,
};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Result of rewriting one file on disk.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub planned: CommentPlan,
    pub commented: usize,
    pub bytes_written: Option<usize>,
    pub sha256_before: String,
    pub sha256_after: String,
}

/// Split file content into lines that keep their terminators, so joining
/// them back reproduces the input byte for byte.
pub fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    content
        .split_inclusive(|b| *b == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}

fn body(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !matches!(b, b'\n' | b'\r'))
        .map_or(0, |i| i + 1);
    &line[..end]
}

fn locate_box_start<L: AsRef<[u8]>>(lines: &[L], idx: usize) -> Option<usize> {
    if is_box_start(body(lines[idx].as_ref())) {
        return Some(idx);
    }
    for j in (0..=idx).rev() {
        let line = body(lines[j].as_ref());
        if is_blank(line) {
            return None;
        }
        if is_box_start(line) {
            return Some(j);
        }
    }
    None
}

fn collect_block<L: AsRef<[u8]>>(lines: &[L], start: usize, plan: &mut CommentPlan) {
    for (j, line) in lines.iter().enumerate().skip(start) {
        let line = body(line.as_ref());
        if j != start && (is_box_start(line) || is_block_start(line)) {
            break;
        }
        if is_blank(line) {
            break;
        }
        plan.insert(j);
    }
}

/// Compute the zero-based indices to disable. Box entries expand to their
/// enclosing `box:` block; modellist entries are taken only when the exact
/// line still starts with `modellist:`. Out-of-range and stale entries are
/// skipped.
pub fn plan<L: AsRef<[u8]>>(
    lines: &[L],
    box_lines: &BTreeSet<usize>,
    modellist_lines: &BTreeSet<usize>,
) -> CommentPlan {
    let mut to_comment = CommentPlan::new();

    for &ln in box_lines {
        let Some(idx) = ln.checked_sub(1).filter(|i| *i < lines.len()) else {
            tracing::debug!(line = ln, "box entry out of range");
            continue;
        };
        match locate_box_start(lines, idx) {
            Some(start) => collect_block(lines, start, &mut to_comment),
            None => tracing::debug!(line = ln, "no box start above entry"),
        }
    }

    for &ln in modellist_lines {
        match ln.checked_sub(1).filter(|i| *i < lines.len()) {
            Some(idx) if is_modellist_line(body(lines[idx].as_ref())) => {
                to_comment.insert(idx);
            }
            _ => tracing::debug!(line = ln, "stale modellist entry"),
        }
    }

    to_comment
}

/// Prefix every planned line that is not already a comment. Returns the
/// number of lines changed; all other bytes are left as they were.
pub fn apply(lines: &mut [Vec<u8>], plan: &CommentPlan) -> usize {
    let mut changed = 0;
    for &i in plan {
        let Some(line) = lines.get_mut(i) else {
            continue;
        };
        if is_comment(body(line)) {
            continue;
        }
        *line = [COMMENT_PREFIX, line.as_slice()].concat();
        changed += 1;
    }
    changed
}

pub fn disable(
    mut lines: Vec<Vec<u8>>,
    box_lines: &BTreeSet<usize>,
    modellist_lines: &BTreeSet<usize>,
) -> DisableOutcome {
    let planned = plan(&lines, box_lines, modellist_lines);
    let commented = apply(&mut lines, &planned);
    DisableOutcome {
        lines,
        planned,
        commented,
    }
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = std::fs::metadata(path)?.permissions();
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path)?;
    Ok(())
}

/// Read `path`, disable the reported entries, and rewrite it in one piece.
/// Nothing is written in dry-run mode or when no line actually changes.
pub fn disable_file(
    path: &Path,
    box_lines: &BTreeSet<usize>,
    modellist_lines: &BTreeSet<usize>,
    dry_run: bool,
) -> anyhow::Result<FileChange> {
    let raw = std::fs::read(path)?;
    let sha256_before = sha256_hex(&raw);
    let lines = split_lines(&raw);

    if dry_run {
        let planned = plan(&lines, box_lines, modellist_lines);
        return Ok(FileChange {
            planned,
            commented: 0,
            bytes_written: None,
            sha256_after: sha256_before.clone(),
            sha256_before,
        });
    }

    let outcome = disable(lines, box_lines, modellist_lines);
    if outcome.commented == 0 {
        return Ok(FileChange {
            planned: outcome.planned,
            commented: 0,
            bytes_written: None,
            sha256_after: sha256_before.clone(),
            sha256_before,
        });
    }

    let content = outcome.lines.concat();
    write_atomic(path, &content)?;
    tracing::info!(
        path = %path.display(),
        lines = outcome.commented,
        "disabled entries"
    );
    Ok(FileChange {
        planned: outcome.planned,
        commented: outcome.commented,
        bytes_written: Some(content.len()),
        sha256_before,
        sha256_after: sha256_hex(&content),
    })
}
