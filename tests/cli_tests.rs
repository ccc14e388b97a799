mod common;

use calorielog::store::Cell;
use calorielog::utils::date::today_stamp;
use calorielog::utils::formatting::display_stamp;
use common::{cl, fruit_workbook, read_sheet, temp_out, temp_workbook};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_starter_workbook() {
    let wb = temp_workbook("cli_init");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Workbook:"));

    assert!(wb.exists());
    assert_eq!(read_sheet(&wb, 0).name, "Catalog");
    assert_eq!(read_sheet(&wb, 1).name, "Log");
}

#[test]
fn test_init_refuses_existing_workbook_without_force() {
    let wb = fruit_workbook("cli_init_existing");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "--test", "init"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    // untouched: still the two-entry fruit catalog
    assert_eq!(read_sheet(&wb, 0).rows.len(), 2);

    cl().args(["--workbook", &wb_str, "--test", "init", "--force"])
        .assert()
        .success();
    assert!(read_sheet(&wb, 0).rows.len() > 2);
}

#[test]
fn test_catalog_lists_labels() {
    let wb = fruit_workbook("cli_catalog");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "catalog"])
        .assert()
        .success()
        .stdout(contains("Apple (1 medium)"))
        .stdout(contains("Banana (1 medium)").and(contains("105")));
}

#[test]
fn test_tally_without_save_leaves_log_alone() {
    let wb = fruit_workbook("cli_tally_nosave");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "0", "0", "1"])
        .assert()
        .success()
        .stdout(contains("Total: 295.0"));

    assert_eq!(read_sheet(&wb, 1).last_row(), Some(0));
}

#[test]
fn test_tally_save_then_history() {
    let wb = fruit_workbook("cli_tally_save");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "1", "--save"])
        .assert()
        .success()
        .stdout(contains("appended"));

    cl().args(["--workbook", &wb_str, "tally", "0", "--save"])
        .assert()
        .success();

    let today = display_stamp(today_stamp());
    cl().args(["--workbook", &wb_str, "history"])
        .assert()
        .success()
        .stdout(contains(today.as_str()))
        .stdout(contains("105.0").and(contains("95.0")));

    let log = read_sheet(&wb, 1);
    assert_eq!(log.last_row(), Some(2));
}

#[test]
fn test_tally_overwrite_updates_last_row() {
    let wb = fruit_workbook("cli_tally_overwrite");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "0", "--save"])
        .assert()
        .success();

    cl().args(["--workbook", &wb_str, "tally", "0", "1", "--save", "--overwrite"])
        .assert()
        .success()
        .stdout(contains("updated"));

    let log = read_sheet(&wb, 1);
    assert_eq!(log.last_row(), Some(1));
    assert_eq!(log.get(1, 1).as_number(), Some(200.0));
}

#[test]
fn test_tally_overwrite_requires_save() {
    let wb = fruit_workbook("cli_tally_overwrite_nosave");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "0", "--overwrite"])
        .assert()
        .failure();
}

#[test]
fn test_tally_rejects_unknown_index() {
    let wb = fruit_workbook("cli_tally_bad_index");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "0", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid selection 5"));
}

#[test]
fn test_missing_workbook_is_fatal() {
    let wb = temp_workbook("cli_missing");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "catalog"])
        .assert()
        .failure()
        .stderr(contains("Workbook not found"));
}

#[test]
fn test_history_on_empty_log() {
    let wb = fruit_workbook("cli_history_empty");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "history", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(contains("No daily records found"));
}

#[test]
fn test_history_rejects_bad_period() {
    let wb = fruit_workbook("cli_history_bad_period");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "history", "--period", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_export_csv_and_json() {
    let wb = fruit_workbook("cli_export");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "0", "1", "--save"])
        .assert()
        .success();

    let stamp = today_stamp().to_string();

    let csv_out = temp_out("cli_export", "csv");
    let csv_str = csv_out.to_string_lossy().to_string();
    cl().args([
        "--workbook",
        &wb_str,
        "export",
        "--format",
        "csv",
        "--file",
        &csv_str,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("date,stamp,calories"));
    assert!(content.contains(&stamp));
    assert!(content.contains("200"));

    let json_out = temp_out("cli_export", "json");
    let json_str = json_out.to_string_lossy().to_string();
    cl().args([
        "--workbook",
        &wb_str,
        "export",
        "--format",
        "json",
        "--file",
        &json_str,
        "--period",
        "all",
    ])
    .assert()
    .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).expect("json");
    assert_eq!(json["period"], "all");
    assert_eq!(json["days"].as_u64(), Some(1));
    assert_eq!(json["total_calories"].as_f64(), Some(200.0));
    assert_eq!(json["records"][0]["stamp"].as_u64(), Some(today_stamp() as u64));
    assert_eq!(json["records"][0]["calories"].as_f64(), Some(200.0));
}

#[test]
fn test_export_xlsx() {
    let wb = fruit_workbook("cli_export_xlsx");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "1", "--save"])
        .assert()
        .success();

    let out = temp_out("cli_export_xlsx", "xlsx");
    let out_str = out.to_string_lossy().to_string();
    cl().args([
        "--workbook",
        &wb_str,
        "export",
        "--format",
        "xlsx",
        "--file",
        &out_str,
    ])
    .assert()
    .success();

    let sheet = read_sheet(&out, 0);
    assert_eq!(sheet.name, "Daily totals");
    assert_eq!(sheet.get(1, 1).as_number(), Some(today_stamp() as f64));
    assert_eq!(sheet.get(1, 2).as_number(), Some(105.0));

    // total row under the days
    assert_eq!(sheet.get(2, 0).to_text(), "Total");
    match sheet.get(2, 2) {
        Cell::Formula { formula, cached } => {
            assert_eq!(formula, "SUM(C2:C2)");
            assert_eq!(cached.to_text(), "105");
        }
        other => panic!("expected a SUM formula, got {other:?}"),
    }
}

#[test]
fn test_export_period_without_records_writes_nothing() {
    let wb = fruit_workbook("cli_export_empty_period");
    let wb_str = wb.to_string_lossy().to_string();

    let out = temp_out("cli_export_empty_period", "json");
    let out_str = out.to_string_lossy().to_string();
    cl().args([
        "--workbook",
        &wb_str,
        "export",
        "--format",
        "json",
        "--file",
        &out_str,
        "--period",
        "1999-01",
    ])
    .assert()
    .success()
    .stdout(contains("period '1999-01'"));

    assert!(!out.exists());
}

#[test]
fn test_history_prints_period_summary() {
    let wb = fruit_workbook("cli_history_summary");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args(["--workbook", &wb_str, "tally", "0", "1", "--save"])
        .assert()
        .success();

    cl().args(["--workbook", &wb_str, "history"])
        .assert()
        .success()
        .stdout(contains("1 day(s), total 200 kcal, average 200 kcal"));
}

#[test]
fn test_export_requires_absolute_path() {
    let wb = fruit_workbook("cli_export_relative");
    let wb_str = wb.to_string_lossy().to_string();

    cl().args([
        "--workbook",
        &wb_str,
        "export",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("absolute"));
}
