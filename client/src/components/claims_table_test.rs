use super::*;

fn record(value: serde_json::Value) -> ClaimRecord {
    ClaimRecord::from_value(value).expect("object")
}

#[test]
fn amount_label_prefixes_dollar_sign() {
    let claim = record(serde_json::json!({ "Amount": 1250.5 }));
    assert_eq!(amount_label(&claim), "$1250.5");
}

#[test]
fn amount_label_keeps_sign_when_amount_missing() {
    let claim = record(serde_json::json!({}));
    assert_eq!(amount_label(&claim), "$");
}

#[test]
fn risk_class_highlights_high_risk_only() {
    let high = record(serde_json::json!({ "Fraud_Risk": "High" }));
    let low = record(serde_json::json!({ "Fraud_Risk": "Low" }));
    assert_eq!(risk_class(&high), "risk-flag risk-flag--high");
    assert_eq!(risk_class(&low), "risk-flag risk-flag--low");
}

#[test]
fn table_has_one_header_per_cell() {
    assert_eq!(COLUMNS.len(), 8);
    assert_eq!(COLUMNS[0], "ID");
    assert_eq!(COLUMNS[7], "Action");
}
