use super::*;

fn record(value: serde_json::Value) -> ClaimRecord {
    ClaimRecord::from_value(value).expect("object")
}

#[test]
fn empty_view_exports_nothing() {
    assert_eq!(export_csv(&[]), None);
}

#[test]
fn header_follows_first_record_key_order() {
    let a = record(serde_json::json!({ "Timestamp": "t1", "Customer_ID": "C1", "Amount": 10 }));
    let csv = export_csv(&[&a]).expect("csv");
    assert_eq!(csv, "Timestamp,Customer_ID,Amount\nt1,C1,10");
}

#[test]
fn null_and_missing_fields_export_empty() {
    let a = record(serde_json::json!({ "Customer_ID": "C1", "rank_score": null, "Fraud_Risk": "Low" }));
    let b = record(serde_json::json!({ "Customer_ID": "C2" }));
    let csv = export_csv(&[&a, &b]).expect("csv");
    assert_eq!(csv, "Customer_ID,rank_score,Fraud_Risk\nC1,,Low\nC2,,");
}

#[test]
fn fields_outside_first_record_header_are_dropped() {
    let a = record(serde_json::json!({ "Customer_ID": "C1" }));
    let b = record(serde_json::json!({ "Customer_ID": "C2", "Extra": "x" }));
    let csv = export_csv(&[&a, &b]).expect("csv");
    assert_eq!(csv, "Customer_ID\nC1\nC2");
}

#[test]
fn cells_with_delimiters_are_quoted() {
    let a = record(serde_json::json!({
        "Description": "rear-ended, then \"hit\" again",
        "Notes": "line1\nline2",
    }));
    let csv = export_csv(&[&a]).expect("csv");
    assert_eq!(
        csv,
        "Description,Notes\n\"rear-ended, then \"\"hit\"\" again\",\"line1\nline2\""
    );
}

#[test]
fn numbers_and_booleans_export_plain() {
    let a = record(serde_json::json!({ "Amount": 2500.0, "Anomaly_Score": -0.0123, "flag": true }));
    let csv = export_csv(&[&a]).expect("csv");
    assert_eq!(csv, "Amount,Anomaly_Score,flag\n2500,-0.0123,true");
}

#[test]
fn escape_cell_leaves_plain_text_alone() {
    assert_eq!(escape_cell("Pending Review"), "Pending Review");
    assert_eq!(escape_cell(""), "");
}

#[test]
fn export_filename_strips_colons_and_sub_seconds() {
    assert_eq!(
        export_filename("2026-10-16T09:05:00.000Z"),
        "claims_export_2026-10-16T090500.csv"
    );
}

#[test]
fn export_filename_tolerates_short_input() {
    assert_eq!(export_filename("2026-10-16"), "claims_export_2026-10-16.csv");
}
