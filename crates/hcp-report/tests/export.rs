use std::fs;

use hcp_ingest::{DataSource, generate_hcp_data};
use hcp_model::{HcpRecord, PipelineOptions, SyntheticOptions, WritingBehavior};
use hcp_report::{
    ExportError, ExportFormat, export_affinity, export_ranked, export_source, write_frame_csv,
};
use hcp_transform::{affinity_frame, run_pipeline};
use tempfile::TempDir;

fn sample_records() -> Vec<HcpRecord> {
    vec![
        HcpRecord::new("1000000001", "Dermatology", 500.0, "TX", WritingBehavior::Low),
        HcpRecord::new("1000000002", "Family Medicine", 1000.0, "CA", WritingBehavior::High),
        HcpRecord::new("1000000003", "Oncology", 700.0, "NY", WritingBehavior::Medium),
    ]
}

#[test]
fn affinity_csv_text() {
    let output = run_pipeline(sample_records());
    let mut df = affinity_frame(&output.affinity).expect("affinity frame");
    let mut bytes = Vec::new();
    write_frame_csv(&mut bytes, &mut df).expect("write csv");
    let text = String::from_utf8(bytes).expect("utf8");
    insta::assert_snapshot!(text, @r"
    NPI Id,channel_affinity
    1000000002,In-person
    1000000003,In-person
    1000000001,Email
    ");
}

#[test]
fn source_export_round_trips_through_ingest() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("hcp_data.csv");
    let records = generate_hcp_data(&SyntheticOptions::new(7, 25)).expect("generate");

    export_source(&path, &records, None).expect("export source");
    let loaded = DataSource::Csv(path)
        .load(&PipelineOptions::default())
        .expect("reload export");
    assert_eq!(loaded, records);
}

#[test]
fn same_seed_same_bytes() {
    let dir = TempDir::new().expect("temp dir");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let options = SyntheticOptions::default();

    export_source(&first, &generate_hcp_data(&options).unwrap(), None).unwrap();
    export_source(&second, &generate_hcp_data(&options).unwrap(), None).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn ranked_json_rows() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ranked.json");
    let output = run_pipeline(sample_records());

    export_ranked(&path, &output.ranked, None).expect("export json");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = value.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["NPI Id"], "1000000002");
    assert_eq!(rows[0]["score"], 3000.0);
    assert_eq!(rows[0]["priority_rank"], 1);
    assert_eq!(rows[0]["segment"], "Top 20%");
    assert_eq!(rows[2]["segment"], "Bottom 50%");
}

#[test]
fn ranked_csv_header_and_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ranked.out");
    let output = run_pipeline(sample_records());

    export_ranked(&path, &output.ranked, Some(ExportFormat::Csv)).expect("export csv");
    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("NPI Id,speciality,rx value,state_code,writing_behavior,score,priority_rank,segment")
    );
    let ids: Vec<&str> = lines.filter_map(|line| line.split(',').next()).collect();
    assert_eq!(ids, vec!["1000000002", "1000000003", "1000000001"]);
}

#[test]
fn whole_numbers_export_without_decimal_point() {
    let dir = TempDir::new().expect("temp dir");
    let source = dir.path().join("source.csv");
    let ranked = dir.path().join("ranked.csv");
    let records = vec![HcpRecord::new(
        "1000000000",
        "Oncology",
        9281.0,
        "CA",
        WritingBehavior::High,
    )];

    export_source(&source, &records, None).expect("export source");
    let text = fs::read_to_string(&source).unwrap();
    assert_eq!(text.lines().nth(1), Some("1000000000,Oncology,9281,CA,High"));

    let output = run_pipeline(records);
    export_ranked(&ranked, &output.ranked, None).expect("export ranked");
    let text = fs::read_to_string(&ranked).unwrap();
    assert_eq!(
        text.lines().nth(1),
        Some("1000000000,Oncology,9281,CA,High,27843,1,Top 20%")
    );
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("affinity.xlsx");
    let output = run_pipeline(sample_records());

    let err = export_affinity(&path, &output.affinity, None).unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
    assert!(!path.exists());
    assert_eq!(output.affinity.len(), 3);
}
