use crate::domain::models::{Category, EntryMap, Extraction, LogRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use std::path::Path;

static INVALID_PATCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Invalid modellist patch .* at line (\d+) of file: (\S+)").unwrap()
});
static INVALID_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Invalid modellist block name .* at line (\d+) of file: (\S+)").unwrap()
});

/// Reduce a logged path to its final component. Both `/` and `\` are
/// separators so logs written on either platform key the same file.
pub fn normalize_file_name(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw)
}

fn record_from(re: &Regex, line: &str, category: Category) -> Option<LogRecord> {
    let caps = re.captures(line)?;
    let line_number: usize = caps.get(1)?.as_str().parse().ok()?;
    if line_number == 0 {
        return None;
    }
    let file_name = normalize_file_name(caps.get(2)?.as_str());
    if file_name.is_empty() {
        return None;
    }
    Some(LogRecord {
        line_number,
        file_name: file_name.to_string(),
        category,
    })
}

/// Match one log line against the patch pattern, then the block-name pattern.
pub fn parse_record(line: &str) -> Option<LogRecord> {
    if INVALID_PATCH_RE.is_match(line) {
        return record_from(&INVALID_PATCH_RE, line, Category::Box);
    }
    record_from(&INVALID_BLOCK_RE, line, Category::Modellist)
}

/// Scan a log stream one line at a time and group invalid entries by target
/// file. Undecodable bytes are replaced, never fatal.
pub fn extract<R: BufRead>(mut reader: R) -> anyhow::Result<Extraction> {
    let mut entries = EntryMap::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\n', '\r']);
        if let Some(record) = parse_record(line) {
            tracing::debug!(
                file = %record.file_name,
                line = record.line_number,
                category = ?record.category,
                "invalid entry"
            );
            entries
                .entry(record.file_name)
                .or_default()
                .insert(record.category, record.line_number);
        }
    }
    if entries.is_empty() {
        return Ok(Extraction::NoEntries);
    }
    Ok(Extraction::Entries(entries))
}

pub fn extract_path(path: &Path) -> anyhow::Result<Extraction> {
    let file = std::fs::File::open(path)?;
    extract(std::io::BufReader::new(file))
}
