mod common;

use common::{path_str, TestEnv};
use predicates::str::contains;

#[test]
fn scan_lists_lines_per_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["scan", path_str(&env.log)])
        .assert()
        .success()
        .stdout(contains("terrain-models.txt"))
        .stdout(contains("Invalid box lines       : [3]"))
        .stdout(contains("Invalid modellist lines : [11]"))
        .stdout(contains("removed-models.txt"));
}

#[test]
fn scan_json_deduplicates_records() {
    let env = TestEnv::new();
    let out = env.run_json(&["scan", path_str(&env.log)]);
    assert_eq!(out["data"]["status"], "processed");
    let files = out["data"]["files"].as_array().expect("files array");
    assert_eq!(files.len(), 3);
    assert_eq!(files[2]["file_name"], "terrain-models.txt");
    assert_eq!(files[2]["box_lines"], serde_json::json!([3]));
}

#[test]
fn scan_never_touches_model_files() {
    let env = TestEnv::new();
    env.cmd().args(["scan", path_str(&env.log)]).assert().success();
    assert_eq!(env.model("terrain-models.txt"), common::MODELS_A);
}
