use std::path::PathBuf;

use modpath_cli::commands::{config, plan};
use modpath_planner::PlannerError;
use tempfile::tempdir;

fn fixture_compile_commands() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../planner/tests/fixtures/sample_project/compile_commands.json")
}

#[test]
fn test_plan_json_output() {
    let output = plan::render(&fixture_compile_commands(), true, 5).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(payload["summary"]["translation_units"], 2);
    assert!(payload["candidates"].as_array().unwrap().len() >= 3);
    assert!(payload["phases"].get("p1_header_units").is_some());
    assert!(payload["phases"].get("p3_import_std_readiness").is_some());
}

#[test]
fn test_plan_text_output() {
    let output = plan::render(&fixture_compile_commands(), false, 10).unwrap();
    assert!(output.starts_with("modpath-cpp migration plan"));
    assert!(output.contains("Top migration candidates"));
    assert!(output.contains("P3) import std readiness"));

    assert!(plan::run(&fixture_compile_commands(), false, 10).is_ok());
}

#[test]
fn test_plan_missing_file_is_planner_error() {
    let dir = tempdir().unwrap();
    let err = plan::render(&dir.path().join("compile_commands.json"), false, 10).unwrap_err();
    assert!(err.downcast_ref::<PlannerError>().is_some());
}

#[test]
fn test_config_output() {
    let table = config::render(false).unwrap();
    assert!(table.contains("MAX_BATCH"));
    assert!(table.contains("64"));
    assert!(table.contains("RETRY_COUNT"));

    let json: serde_json::Value = serde_json::from_str(&config::render(true).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["max_batch"], 64);
    assert_eq!(json["min_batch"], 4);
    assert_eq!(json["log_enabled"], true);
    assert_eq!(json["timeout_ms"], 200);

    assert!(config::run(false).is_ok());
}
