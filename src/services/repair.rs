use crate::domain::models::{
    Config, Extraction, FileReport, FileStatus, InvalidEntrySet, RepairError, RunReport,
    RunStatus, ScanItem, ScanReport,
};
use crate::services::disable::disable_file;
use crate::services::extract::extract_path;
use crate::services::storage::audit;
use std::path::Path;

pub fn validate_log_path(path: &Path) -> Result<(), RepairError> {
    if !path.is_file() {
        return Err(RepairError::LogNotFound(path.to_path_buf()));
    }
    if path.extension().and_then(|e| e.to_str()) != Some("log") {
        return Err(RepairError::NotALogFile(path.to_path_buf()));
    }
    Ok(())
}

pub fn validate_target_dir(path: &Path) -> Result<(), RepairError> {
    if !path.is_dir() {
        return Err(RepairError::TargetDirNotFound(path.to_path_buf()));
    }
    Ok(())
}

fn base_report(file_name: &str, target: &Path, entries: &InvalidEntrySet) -> FileReport {
    FileReport {
        file_name: file_name.to_string(),
        target_path: target.to_string_lossy().to_string(),
        status: FileStatus::Missing,
        box_lines: entries.box_lines.iter().copied().collect(),
        modellist_lines: entries.modellist_lines.iter().copied().collect(),
        planned_lines: vec![],
        commented: 0,
        bytes_written: None,
        error: None,
    }
}

/// Disable the entries for one file. Every failure is folded into the
/// returned report so a batch never stops on a single file.
pub fn process_file(
    file_name: &str,
    target: &Path,
    entries: &InvalidEntrySet,
    dry_run: bool,
    config: &Config,
) -> FileReport {
    let mut report = base_report(file_name, target, entries);
    if !target.is_file() {
        tracing::warn!(path = %target.display(), "target file not found, skipped");
        return report;
    }

    let change = match disable_file(target, &entries.box_lines, &entries.modellist_lines, dry_run)
    {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "failed to process file");
            report.status = FileStatus::Failed;
            report.error = Some(e.to_string());
            return report;
        }
    };

    report.planned_lines = change.planned.iter().map(|i| i + 1).collect();
    report.commented = change.commented;
    report.bytes_written = change.bytes_written;
    report.status = if dry_run {
        FileStatus::Planned
    } else if change.planned.is_empty() {
        FileStatus::NothingToComment
    } else if change.commented == 0 {
        FileStatus::Unchanged
    } else {
        FileStatus::Commented
    };

    if config.audit && change.bytes_written.is_some() {
        audit(
            "disable",
            serde_json::json!({
                "path": report.target_path,
                "lines_commented": change.commented,
                "sha256_before": change.sha256_before,
                "sha256_after": change.sha256_after,
            }),
        );
    }
    report
}

/// Extract invalid entries from `log` and apply them to the files they name
/// inside `target_dir`.
pub fn run_fix(
    log: &Path,
    target_dir: &Path,
    dry_run: bool,
    config: &Config,
) -> anyhow::Result<RunReport> {
    let mut report = RunReport {
        log: log.to_string_lossy().to_string(),
        target_dir: target_dir.to_string_lossy().to_string(),
        dry_run,
        status: RunStatus::NoEntries,
        files: vec![],
        files_touched: 0,
        lines_commented: 0,
    };

    let entries = match extract_path(log)? {
        Extraction::NoEntries => return Ok(report),
        Extraction::Entries(map) => map,
    };

    report.status = RunStatus::Processed;
    for (file_name, set) in &entries {
        let target = target_dir.join(file_name);
        let file = process_file(file_name, &target, set, dry_run, config);
        if file.status == FileStatus::Commented {
            report.files_touched += 1;
            report.lines_commented += file.commented;
        }
        report.files.push(file);
    }
    Ok(report)
}

pub fn scan(log: &Path) -> anyhow::Result<ScanReport> {
    let mut report = ScanReport {
        log: log.to_string_lossy().to_string(),
        status: RunStatus::NoEntries,
        files: vec![],
    };
    if let Extraction::Entries(map) = extract_path(log)? {
        report.status = RunStatus::Processed;
        report.files = map
            .into_iter()
            .map(|(file_name, set)| ScanItem {
                file_name,
                box_lines: set.box_lines.into_iter().collect(),
                modellist_lines: set.modellist_lines.into_iter().collect(),
            })
            .collect();
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quiet() -> Config {
        Config {
            target_dir: None,
            audit: false,
        }
    }

    fn fixture(tmp: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
        let dir = tmp.path().join("renderdata");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("a-models.txt"),
            "box: one\n  side: 1\n\nmodellist: id=stone\nmodellist: id=dirt\n",
        )
        .unwrap();
        fs::write(dir.join("b-models.txt"), "# only a comment\n").unwrap();
        let log = tmp.path().join("latest.log");
        fs::write(
            &log,
            "[INFO] Loading\n\
Invalid modellist patch x at line 2 of file: renderdata/a-models.txt\n\
Invalid modellist block name y at line 5 of file: C:\\mc\\renderdata\\a-models.txt\n\
Invalid modellist block name y at line 5 of file: a-models.txt\n\
Invalid modellist block name z at line 1 of file: b-models.txt\n\
Invalid modellist patch x at line 3 of file: gone-models.txt\n",
        )
        .unwrap();
        (log, dir)
    }

    #[test]
    fn batch_continues_past_missing_files() {
        let tmp = TempDir::new().unwrap();
        let (log, dir) = fixture(&tmp);
        let report = run_fix(&log, &dir, false, &quiet()).unwrap();

        assert_eq!(report.status, RunStatus::Processed);
        let names: Vec<_> = report.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a-models.txt", "b-models.txt", "gone-models.txt"]);

        let a = &report.files[0];
        assert_eq!(a.status, FileStatus::Commented);
        assert_eq!(a.box_lines, vec![2]);
        assert_eq!(a.modellist_lines, vec![5]);
        assert_eq!(a.planned_lines, vec![1, 2, 5]);
        assert_eq!(a.commented, 3);

        assert_eq!(report.files[1].status, FileStatus::NothingToComment);
        assert_eq!(report.files[2].status, FileStatus::Missing);
        assert_eq!(report.files_touched, 1);
        assert_eq!(report.lines_commented, 3);

        assert_eq!(
            fs::read_to_string(dir.join("a-models.txt")).unwrap(),
            "# box: one\n#   side: 1\n\nmodellist: id=stone\n# modellist: id=dirt\n"
        );
    }

    #[test]
    fn dry_run_reports_plan_without_writing() {
        let tmp = TempDir::new().unwrap();
        let (log, dir) = fixture(&tmp);
        let before = fs::read_to_string(dir.join("a-models.txt")).unwrap();
        let report = run_fix(&log, &dir, true, &quiet()).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.files[0].status, FileStatus::Planned);
        assert_eq!(report.files[0].planned_lines, vec![1, 2, 5]);
        assert_eq!(report.lines_commented, 0);
        assert_eq!(fs::read_to_string(dir.join("a-models.txt")).unwrap(), before);
    }

    #[test]
    fn second_run_leaves_files_unchanged() {
        let tmp = TempDir::new().unwrap();
        let (log, dir) = fixture(&tmp);
        run_fix(&log, &dir, false, &quiet()).unwrap();
        let after_first = fs::read_to_string(dir.join("a-models.txt")).unwrap();
        let report = run_fix(&log, &dir, false, &quiet()).unwrap();
        assert_eq!(report.files_touched, 0);
        assert_eq!(
            fs::read_to_string(dir.join("a-models.txt")).unwrap(),
            after_first
        );
    }

    #[test]
    fn log_without_entries_reports_no_entries() {
        let tmp = TempDir::new().unwrap();
        let log = tmp.path().join("quiet.log");
        fs::write(&log, "[INFO] Done\n").unwrap();
        let report = run_fix(&log, tmp.path(), false, &quiet()).unwrap();
        assert_eq!(report.status, RunStatus::NoEntries);
        assert!(report.files.is_empty());
        assert_eq!(scan(&log).unwrap().status, RunStatus::NoEntries);
    }

    #[test]
    fn scan_groups_sorted_lines_per_file() {
        let tmp = TempDir::new().unwrap();
        let (log, _) = fixture(&tmp);
        let report = scan(&log).unwrap();
        assert_eq!(report.files.len(), 3);
        assert_eq!(report.files[0].file_name, "a-models.txt");
        assert_eq!(report.files[0].modellist_lines, vec![5]);
        assert_eq!(report.files[2].box_lines, vec![3]);
    }

    #[test]
    fn validators_reject_bad_paths() {
        let tmp = TempDir::new().unwrap();
        let txt = tmp.path().join("server.txt");
        fs::write(&txt, "").unwrap();
        assert!(matches!(
            validate_log_path(&tmp.path().join("x.log")),
            Err(RepairError::LogNotFound(_))
        ));
        assert!(matches!(
            validate_log_path(&txt),
            Err(RepairError::NotALogFile(_))
        ));
        assert!(matches!(
            validate_target_dir(&txt),
            Err(RepairError::TargetDirNotFound(_))
        ));
        assert!(validate_target_dir(tmp.path()).is_ok());
    }
}
