//! Interactive input collection for `fix` when paths are not given.
//!
//! Questions go to the writer (stderr in the binary) so `--json` output on
//! stdout stays parseable.

use crate::services::repair::{validate_log_path, validate_target_dir};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            anyhow::bail!("input closed while waiting for an answer");
        }
        Ok(answer.trim().to_string())
    }

    pub fn log_path(&mut self) -> anyhow::Result<PathBuf> {
        loop {
            let path = PathBuf::from(self.ask("Enter the path to the Dynmap log file: ")?);
            if validate_log_path(&path).is_ok() {
                return Ok(path);
            }
            writeln!(self.output, "Invalid log file.")?;
        }
    }

    pub fn target_dir(&mut self) -> anyhow::Result<PathBuf> {
        loop {
            let path = PathBuf::from(self.ask("Enter the path to dynmap/renderdata directory: ")?);
            if validate_target_dir(&path).is_ok() {
                return Ok(path);
            }
            writeln!(self.output, "Invalid directory.")?;
        }
    }

    pub fn dry_run(&mut self) -> anyhow::Result<bool> {
        Ok(self.ask("Dry run? (y/N): ")?.eq_ignore_ascii_case("y"))
    }
}
