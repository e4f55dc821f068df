use crate::domain::models::{FileReport, FileStatus, JsonOut, RunReport, RunStatus, ScanReport};
use serde::Serialize;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

fn print_line_sets(box_lines: &[usize], modellist_lines: &[usize]) {
    if !box_lines.is_empty() {
        println!("  Invalid box lines       : {:?}", box_lines);
    }
    if !modellist_lines.is_empty() {
        println!("  Invalid modellist lines : {:?}", modellist_lines);
    }
}

fn print_file(f: &FileReport) {
    if f.status == FileStatus::Missing {
        println!("[WARN] {} not found, skipped.", f.target_path);
        return;
    }
    println!();
    println!("Processing {}", f.file_name);
    print_line_sets(&f.box_lines, &f.modellist_lines);
    match f.status {
        FileStatus::Commented => println!("  Commented {} lines.", f.commented),
        FileStatus::Unchanged => println!(
            "  All {} lines already commented.",
            f.planned_lines.len()
        ),
        FileStatus::NothingToComment => println!("  Nothing to comment."),
        FileStatus::Planned => {
            if f.planned_lines.is_empty() {
                println!("  Nothing to comment.");
            } else {
                println!("  Would comment lines : {:?}", f.planned_lines);
            }
        }
        FileStatus::Failed => println!(
            "  [ERROR] {}",
            f.error.as_deref().unwrap_or("unknown error")
        ),
        FileStatus::Missing => {}
    }
}

pub fn print_run(json: bool, report: RunReport) -> anyhow::Result<()> {
    if json {
        return print_json(report);
    }
    if report.status == RunStatus::NoEntries {
        println!("No invalid modellist entries found.");
        return Ok(());
    }
    for f in &report.files {
        print_file(f);
    }
    Ok(())
}

pub fn print_file_report(json: bool, report: FileReport) -> anyhow::Result<()> {
    if json {
        return print_json(report);
    }
    print_file(&report);
    Ok(())
}

pub fn print_scan(json: bool, report: ScanReport) -> anyhow::Result<()> {
    if json {
        return print_json(report);
    }
    if report.status == RunStatus::NoEntries {
        println!("No invalid modellist entries found.");
        return Ok(());
    }
    for item in &report.files {
        println!("{}", item.file_name);
        print_line_sets(&item.box_lines, &item.modellist_lines);
    }
    Ok(())
}
