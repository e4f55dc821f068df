use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

fn default_audit() -> bool {
    true
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Renderdata directory used by `fix` when none is given on the command line.
    #[serde(default)]
    pub target_dir: Option<String>,
    #[serde(default = "default_audit")]
    pub audit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: None,
            audit: default_audit(),
        }
    }
}

/// Which log record shape produced a line number.
///
/// `Box` entries are expanded to their whole definition block. `Modellist`
/// entries come from "invalid block name" records and are disabled one line
/// at a time, and only when the line still carries a `modellist:` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Box,
    Modellist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub line_number: usize,
    pub file_name: String,
    pub category: Category,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvalidEntrySet {
    pub box_lines: BTreeSet<usize>,
    pub modellist_lines: BTreeSet<usize>,
}

impl InvalidEntrySet {
    pub fn insert(&mut self, category: Category, line_number: usize) {
        match category {
            Category::Box => self.box_lines.insert(line_number),
            Category::Modellist => self.modellist_lines.insert(line_number),
        };
    }
}

/// Target file name (base name only) to the entries reported against it.
pub type EntryMap = BTreeMap<String, InvalidEntrySet>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    NoEntries,
    Entries(EntryMap),
}

/// Zero-based indices into the target file's lines that should be disabled.
pub type CommentPlan = BTreeSet<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisableOutcome {
    /// Raw lines including terminators; only planned lines differ from the input.
    pub lines: Vec<Vec<u8>>,
    pub planned: CommentPlan,
    pub commented: usize,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Commented,
    Unchanged,
    NothingToComment,
    Planned,
    Missing,
    Failed,
}

#[derive(Serialize, Debug, Clone)]
pub struct FileReport {
    pub file_name: String,
    pub target_path: String,
    pub status: FileStatus,
    pub box_lines: Vec<usize>,
    pub modellist_lines: Vec<usize>,
    /// 1-based line numbers selected for disabling.
    pub planned_lines: Vec<usize>,
    pub commented: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_written: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    NoEntries,
    Processed,
}

#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub log: String,
    pub target_dir: String,
    pub dry_run: bool,
    pub status: RunStatus,
    pub files: Vec<FileReport>,
    pub files_touched: usize,
    pub lines_commented: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct ScanItem {
    pub file_name: String,
    pub box_lines: Vec<usize>,
    pub modellist_lines: Vec<usize>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ScanReport {
    pub log: String,
    pub status: RunStatus,
    pub files: Vec<ScanItem>,
}

#[derive(thiserror::Error, Debug)]
pub enum RepairError {
    #[error("log file not found: {0}")]
    LogNotFound(PathBuf),
    #[error("not a .log file: {0}")]
    NotALogFile(PathBuf),
    #[error("target directory not found: {0}")]
    TargetDirNotFound(PathBuf),
}
