mod common;

use std::fs;

use assert_cmd::Command;
use common::TestWorkspace;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const MAIN_CSV: &str = "\
Period Date,Bill of Lading,Ft Shipment Error,Destination Country,Attr1 Name,Attr1 Value,Shipment Tracking Type
2024-03-14,bol-9,Not Identified,DE,PO,\"123,123;456\",ELD
2024-03-18,bol-10,Driver Issue,XX,Region,North,
not a date,,not identified,FR,,,
";

const LOOKUP_CSV: &str = "\
BOL #,Err Reason
BOL-9,Carrier Delay
bol-10,Should not apply
";

fn read_output(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("open output");
    reader
        .records()
        .map(|record| record.expect("output record"))
        .collect()
}

fn header_index(path: &std::path::Path, name: &str) -> usize {
    let mut reader = csv::Reader::from_path(path).expect("open output");
    reader
        .headers()
        .expect("headers")
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("missing header {name}"))
}

#[test]
fn clean_writes_template_output_and_statistics() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", MAIN_CSV);
    let lookup = workspace.write("dq.csv", LOOKUP_CSV);
    let output = workspace.path().join("clean.csv");
    let stats = workspace.path().join("stats.json");

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args([
            "clean",
            "-i",
            main.to_str().unwrap(),
            "-l",
            lookup.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--stats-json",
            stats.to_str().unwrap(),
        ])
        .assert()
        .success();

    let rows = read_output(&output);
    assert_eq!(rows.len(), 3);
    let agg = header_index(&output, "Agg Date");
    let error = header_index(&output, "Ft Shipment Error");
    let country = header_index(&output, "Destination Country");
    let tracking_type = header_index(&output, "Tracking Type");
    let attr2_name = header_index(&output, "Attr2 Name");
    let attr2_value = header_index(&output, "Attr2 Value");
    let attr1_name = header_index(&output, "Attr1 Name");

    assert_eq!(&rows[0][agg], "2024-03-11");
    assert_eq!(&rows[0][error], "Carrier Delay");
    assert_eq!(&rows[0][country], "Germany");
    assert_eq!(&rows[0][tracking_type], "ELD");
    assert_eq!(&rows[0][attr2_name], "PO");
    assert_eq!(&rows[0][attr2_value], "123;456");
    assert_eq!(&rows[0][attr1_name], "");

    assert_eq!(&rows[1][agg], "2024-03-18");
    assert_eq!(&rows[1][error], "Driver Issue");
    assert_eq!(&rows[1][country], "XX");
    assert_eq!(&rows[1][attr1_name], "");

    assert_eq!(&rows[2][agg], "");
    assert_eq!(&rows[2][error], "not identified");
    assert_eq!(&rows[2][country], "France");

    let stats: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&stats).expect("read stats")).expect("json");
    assert_eq!(stats["unparseable_date_count"], 1);
    assert_eq!(stats["updated_error_count"], 1);
}

#[test]
fn clean_streams_to_stdout_with_audit_column() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", MAIN_CSV);
    let lookup = workspace.write("dq.csv", LOOKUP_CSV);

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args([
            "clean",
            "-i",
            main.to_str().unwrap(),
            "--lookup",
            lookup.to_str().unwrap(),
            "--keep-audit-column",
        ])
        .assert()
        .success()
        .stdout(
            contains("Tenant Name,Shipment Mode,Agg Date")
                .and(contains("Tracking Error (from DQ)"))
                .and(contains("Should not apply")),
        );
}

#[test]
fn clean_reads_audit_flag_from_config_file() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", MAIN_CSV);
    let lookup = workspace.write("dq.csv", LOOKUP_CSV);
    let config = workspace.write("cleaner.yaml", "keep_audit_column: true\n");

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args([
            "clean",
            "-i",
            main.to_str().unwrap(),
            "-l",
            lookup.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Tracking Error (from DQ)"));
}

#[test]
fn clean_fails_when_lookup_lacks_required_columns() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", MAIN_CSV);
    let lookup = workspace.write("dq.csv", "Shipment,Reason\nBOL-9,Late\n");
    let output = workspace.path().join("clean.csv");

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args([
            "clean",
            "-i",
            main.to_str().unwrap(),
            "-l",
            lookup.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("Have: [Shipment, Reason]"));
    assert!(!output.exists());
}

#[test]
fn clean_fails_when_main_lacks_bill_of_lading() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", "Ft Shipment Error\nnot identified\n");
    let lookup = workspace.write("dq.csv", LOOKUP_CSV);

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args([
            "clean",
            "-i",
            main.to_str().unwrap(),
            "-l",
            lookup.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("Missing required column 'Bill of Lading'"));
}

#[test]
fn clean_reports_the_full_cause_chain_for_a_missing_main_file() {
    let workspace = TestWorkspace::new();
    let missing = workspace.path().join("absent.csv");

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args(["clean", "-i", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            contains("error: Failed to read main file")
                .and(contains("Opening input file"))
                .and(contains("absent.csv")),
        );
}

#[test]
fn clean_continues_when_lookup_file_is_unreadable() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", MAIN_CSV);
    let missing = workspace.path().join("absent.csv");

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args([
            "clean",
            "-i",
            main.to_str().unwrap(),
            "-l",
            missing.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Not Identified"))
        .stderr(contains("continuing without it"));
}

#[test]
fn clean_reads_tab_delimited_input_from_stdin() {
    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args(["clean", "-i", "-", "--delimiter", "tab", "--output-delimiter", ","])
        .write_stdin("Pickup Country\tPeriod Date\nUS\t2024-01-07\n")
        .assert()
        .success()
        .stdout(contains("2024-01-01").and(contains("United States of America")));
}

#[test]
fn clean_preview_renders_rows_on_stderr() {
    let workspace = TestWorkspace::new();
    let main = workspace.write("main.csv", MAIN_CSV);

    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args(["clean", "-i", main.to_str().unwrap(), "--preview", "1"])
        .assert()
        .success()
        .stderr(contains("Tenant Name | Shipment Mode").and(contains("2024-03-11")));
}

#[test]
fn template_lists_columns_and_mappings() {
    Command::cargo_bin("shipment-cleaner")
        .expect("binary exists")
        .args(["template", "--mappings"])
        .assert()
        .success()
        .stdout(
            contains("Ft Shipment Error")
                .and(contains("Bosnia and Herzegovina"))
                .and(contains("TMSTOPID")),
        );
}
