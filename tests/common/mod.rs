#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MODELS_A: &str = "\
# terrain models
box: stone
  from: 0,0,0
  to: 16,16,16

box: slab
  from: 0,0,0
  to: 16,8,16
block: id=slab
modellist: id=stone,data=*
modellist: id=dirt,data=*
";

pub const MODELS_B: &str = "modellist: id=glass\r\nbox: pane\r\n  to: 16,16,2\r\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub renderdata: PathBuf,
    pub log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let renderdata = tmp.path().join("renderdata");
        fs::create_dir_all(&renderdata).expect("create renderdata dir");
        fs::write(renderdata.join("terrain-models.txt"), MODELS_A).expect("write models a");
        fs::write(renderdata.join("glass-models.txt"), MODELS_B).expect("write models b");

        let log = tmp.path().join("latest.log");
        fs::write(&log, fixture_log()).expect("write log");

        Self {
            _tmp: tmp,
            home,
            renderdata,
            log,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("modelfix");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn model(&self, name: &str) -> String {
        fs::read_to_string(self.renderdata.join(name)).expect("read model file")
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/modelfix");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }

    pub fn audit_lines(&self) -> Vec<Value> {
        let path = self.home.join(".config/modelfix/audit.jsonl");
        if !path.exists() {
            return vec![];
        }
        fs::read_to_string(path)
            .expect("read audit log")
            .lines()
            .map(|l| serde_json::from_str(l).expect("audit line is json"))
            .collect()
    }
}

pub fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf8 path")
}

fn fixture_log() -> String {
    [
        "[12:00:00] [Server thread/INFO]: [Dynmap] Loading models",
        "[12:00:01] [Server thread/ERROR]: [Dynmap] Invalid modellist patch box:stone at line 3 of file: plugins/dynmap/renderdata/terrain-models.txt",
        "[12:00:01] [Server thread/ERROR]: [Dynmap] Invalid modellist patch box:stone at line 3 of file: plugins/dynmap/renderdata/terrain-models.txt",
        "[12:00:01] [Server thread/ERROR]: [Dynmap] Invalid modellist block name id=dirt at line 11 of file: C:\\srv\\dynmap\\renderdata\\terrain-models.txt",
        "[12:00:01] [Server thread/ERROR]: [Dynmap] Invalid modellist block name id=glass at line 1 of file: glass-models.txt",
        "[12:00:01] [Server thread/ERROR]: [Dynmap] Invalid modellist patch box:gone at line 4 of file: removed-models.txt",
        "[12:00:02] [Server thread/INFO]: [Dynmap] Done",
    ]
    .join("\n")
}
