use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "modelfix",
    version,
    about = "Comment out model file entries that a renderer log reports as invalid"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the invalid entries a log reports, grouped by target file.
    Scan {
        log: PathBuf,
    },
    /// Comment out every invalid entry a log reports.
    Fix {
        #[arg(help = "Renderer log file (prompted for when omitted)")]
        log: Option<PathBuf>,
        #[arg(help = "Directory holding the model files (config or prompt when omitted)")]
        target_dir: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Comment out the given lines of a single model file.
    Disable {
        file: PathBuf,
        #[arg(long = "box-line", value_name = "N")]
        box_lines: Vec<usize>,
        #[arg(long = "modellist-line", value_name = "N")]
        modellist_lines: Vec<usize>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}
