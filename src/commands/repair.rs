use crate::cli::{Cli, Commands};
use crate::domain::models::{Category, Config, FileStatus, InvalidEntrySet};
use crate::services::output::{print_file_report, print_run, print_scan};
use crate::services::prompt::Prompter;
use crate::services::repair::{
    process_file, run_fix, scan, validate_log_path, validate_target_dir,
};
use std::path::PathBuf;

pub fn handle_commands(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Scan { log } => {
            validate_log_path(log)?;
            let report = scan(log)?;
            print_scan(cli.json, report)?;
        }
        Commands::Fix {
            log,
            target_dir,
            dry_run,
        } => {
            let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stderr());
            let mut interactive = false;

            let log = match log {
                Some(p) => {
                    validate_log_path(p)?;
                    p.clone()
                }
                None => {
                    interactive = true;
                    prompter.log_path()?
                }
            };
            let configured = config.target_dir.as_ref().map(PathBuf::from);
            let target_dir = match target_dir.clone().or(configured) {
                Some(p) => {
                    validate_target_dir(&p)?;
                    p
                }
                None => {
                    interactive = true;
                    prompter.target_dir()?
                }
            };
            let dry_run = *dry_run || (interactive && prompter.dry_run()?);

            let report = run_fix(&log, &target_dir, dry_run, config)?;
            print_run(cli.json, report)?;
        }
        Commands::Disable {
            file,
            box_lines,
            modellist_lines,
            dry_run,
        } => {
            if !file.is_file() {
                anyhow::bail!("target file not found: {}", file.display());
            }
            let mut entries = InvalidEntrySet::default();
            for &n in box_lines {
                entries.insert(Category::Box, n);
            }
            for &n in modellist_lines {
                entries.insert(Category::Modellist, n);
            }
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let report = process_file(&name, file, &entries, *dry_run, config);
            if report.status == FileStatus::Failed {
                anyhow::bail!(
                    "failed to process {}: {}",
                    report.target_path,
                    report.error.unwrap_or_default()
                );
            }
            print_file_report(cli.json, report)?;
        }
    }
    Ok(())
}
