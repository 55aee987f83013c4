use super::*;

fn record(value: serde_json::Value) -> ClaimRecord {
    ClaimRecord::from_value(value).expect("object")
}

#[test]
fn detail_lines_cover_core_fields_in_order() {
    let claim = record(serde_json::json!({
        "Customer_ID": "POL-9",
        "Category": "Theft",
        "Amount": 480,
        "Tenure": 3,
        "Timestamp": "2026-10-01 12:00:00",
    }));
    let lines = detail_lines(&claim);
    assert_eq!(
        lines,
        vec![
            ("Customer ID", "POL-9".to_owned()),
            ("Category", "Theft".to_owned()),
            ("Amount", "$480".to_owned()),
            ("Tenure", "3 Years".to_owned()),
            ("Date", "2026-10-01 12:00:00".to_owned()),
        ]
    );
}

#[test]
fn detail_lines_include_urgency_and_status_when_present() {
    let claim = record(serde_json::json!({ "Urgency": "High", "Status": "Pending" }));
    let labels: Vec<&str> = detail_lines(&claim).iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Customer ID", "Category", "Amount", "Tenure", "Date", "Urgency", "Status"]);
}

#[test]
fn detail_lines_skip_null_status() {
    let claim = record(serde_json::json!({ "Status": null }));
    assert!(detail_lines(&claim).iter().all(|(label, _)| *label != "Status"));
}
