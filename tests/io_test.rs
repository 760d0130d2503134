mod common;

use std::fs;

use common::{approx_eq, csv_text, TestWorkspace};
use framestat::column::ColumnTrait;
use framestat::io::{
    load_table, read_csv, write_group_csv, write_summary_csv, write_summary_json, TableSource,
};
use framestat::{describe_frame, groupby::group_stats, ColumnType};

#[test]
fn test_read_csv_infers_types() {
    let ws = TestWorkspace::new();
    let path = ws.write_file(
        "typed.csv",
        &csv_text(
            &["value", "category", "date", "note"],
            &[
                &["1.5", "A", "2024-01-01", "x"],
                &["", "B", "2024-01-02", "7"],
                &["3", "A", "NA", "y"],
            ],
        ),
    );

    let df = read_csv(&path, true).unwrap();
    assert_eq!(df.row_count(), 3);
    assert_eq!(
        df.dtypes(),
        vec![
            ("value".to_string(), ColumnType::Float64),
            ("category".to_string(), ColumnType::String),
            ("date".to_string(), ColumnType::DateTime),
            ("note".to_string(), ColumnType::String),
        ]
    );

    let value = df.float64_column("value").unwrap();
    assert_eq!(value.get(0).unwrap(), Some(1.5));
    assert_eq!(value.get(1).unwrap(), None);
    assert_eq!(df.column("date").unwrap().null_count(), 1);
}

#[test]
fn test_read_csv_ragged_rows_are_missing() {
    let ws = TestWorkspace::new();
    let path = ws.write_file("ragged.csv", "a,b\n1,2\n3\n");

    let df = read_csv(&path, true).unwrap();
    assert_eq!(df.row_count(), 2);
    assert_eq!(df.float64_column("b").unwrap().null_count(), 1);
}

#[test]
fn test_read_csv_without_header() {
    let ws = TestWorkspace::new();
    let path = ws.write_file("noheader.csv", "1,x\n2,y\n");

    let df = read_csv(&path, false).unwrap();
    assert_eq!(df.column_names(), vec!["column_0", "column_1"]);
    assert_eq!(df.row_count(), 2);
}

#[test]
fn test_load_table_reads_existing_file() {
    let ws = TestWorkspace::new();
    let path = ws.write_file("in.csv", &csv_text(&["v"], &[&["1"], &["2"]]));

    let loaded = load_table(&path, ws.output_dir()).unwrap();
    assert_eq!(loaded.source, TableSource::File(path));
    assert_eq!(loaded.frame.row_count(), 2);
    assert!(ws.output_dir().is_dir());
}

#[test]
fn test_load_table_fallback_sample() {
    let ws = TestWorkspace::new();

    let loaded = load_table(ws.path().join("does_not_exist.csv"), ws.output_dir()).unwrap();
    assert_eq!(loaded.source, TableSource::Sample);
    assert_eq!(loaded.frame.column_names(), vec!["value", "category", "date"]);
    assert_eq!(loaded.frame.row_count(), 3);
    assert_eq!(
        loaded.frame.float64_column("value").unwrap().valid_values(),
        vec![1.0, 2.0, 3.0]
    );
}

#[test]
fn test_load_table_fails_when_output_dir_cannot_be_created() {
    let ws = TestWorkspace::new();
    // 通常ファイルの下にディレクトリは作れない
    let blocker = ws.write_file("blocker", "");

    let result = load_table(ws.path().join("in.csv"), blocker.join("out"));
    assert!(result.is_err());
}

#[test]
fn test_write_summary_files() {
    let ws = TestWorkspace::new();
    let path = ws.write_file(
        "in.csv",
        &csv_text(&["v", "category"], &[&["1", "A"], &["2", "B"], &["3", "A"]]),
    );
    let df = read_csv(&path, true).unwrap();
    let summary = describe_frame(&df).unwrap();

    let csv_path = ws.path().join("summary.csv");
    write_summary_csv(&summary, &csv_path).unwrap();
    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], ",v");
    assert_eq!(lines[1], "count,3");
    assert_eq!(lines[2], "mean,2");
    assert_eq!(lines[4], "min,1");
    assert_eq!(lines[8], "max,3");
    assert_eq!(lines.len(), 9);

    let json_path = ws.path().join("summary.json");
    write_summary_json(&summary, &json_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["v"]["count"], 3);
    assert!(approx_eq(json["v"]["mean"].as_f64().unwrap(), 2.0));
    assert!(approx_eq(json["v"]["50%"].as_f64().unwrap(), 2.0));
}

#[test]
fn test_write_group_csv_layout() {
    let ws = TestWorkspace::new();
    let path = ws.write_file(
        "in.csv",
        &csv_text(
            &["v", "w", "category"],
            &[&["1", "10", "A"], &["2", "20", "B"], &["3", "30", "A"]],
        ),
    );
    let df = read_csv(&path, true).unwrap();
    let groups = group_stats(&df, "category").unwrap().unwrap();

    let out = ws.path().join("group_summary.csv");
    write_group_csv(&groups, &out).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "category,v.mean,v.median,v.std,w.mean,w.median,w.std"
    );
    assert!(lines[1].starts_with("A,2,2,"));
    // 1件だけのグループの標準偏差は空セル
    assert_eq!(lines[2], "B,2,2,,20,20,");
}
