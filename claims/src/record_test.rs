use super::*;

fn record(value: Value) -> ClaimRecord {
    ClaimRecord::from_value(value).expect("object")
}

#[test]
fn from_value_rejects_non_objects() {
    assert!(ClaimRecord::from_value(serde_json::json!([1, 2])).is_none());
    assert!(ClaimRecord::from_value(Value::Null).is_none());
}

#[test]
fn number_treats_empty_and_null_as_absent() {
    let r = record(serde_json::json!({
        "authenticity_score": "",
        "priority_score": null,
    }));
    assert_eq!(r.authenticity_score(), None);
    assert_eq!(r.priority_score(), None);
}

#[test]
fn number_parses_numeric_strings() {
    let r = record(serde_json::json!({ "authenticity_score": " 6.5 " }));
    assert_eq!(r.authenticity_score(), Some(6.5));
}

#[test]
fn number_rejects_non_numeric_text() {
    let r = record(serde_json::json!({ "authenticity_score": "n/a", "rank_score": "NaN" }));
    assert_eq!(r.authenticity_score(), None);
    assert!((r.rank_score() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn rank_score_defaults_to_zero() {
    let r = record(serde_json::json!({}));
    assert!((r.rank_score() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn high_fraud_risk_matches_exact_label() {
    assert!(record(serde_json::json!({ "Fraud_Risk": "High" })).is_high_fraud_risk());
    assert!(!record(serde_json::json!({ "Fraud_Risk": "Low" })).is_high_fraud_risk());
    assert!(!record(serde_json::json!({ "Fraud_Risk": "high" })).is_high_fraud_risk());
    assert!(!record(serde_json::json!({})).is_high_fraud_risk());
}

#[test]
fn customer_id_renders_numeric_ids() {
    let r = record(serde_json::json!({ "Customer_ID": 123_456 }));
    assert_eq!(r.customer_id(), "123456");
}

#[test]
fn delete_key_requires_id_and_timestamp() {
    let full = record(serde_json::json!({
        "Customer_ID": "POL-1",
        "Timestamp": "2026-01-02 03:04:05",
    }));
    assert_eq!(full.delete_key(), Some(("POL-1".to_owned(), "2026-01-02 03:04:05".to_owned())));

    let partial = record(serde_json::json!({ "Customer_ID": "POL-1", "Timestamp": "" }));
    assert_eq!(partial.delete_key(), None);
}

#[test]
fn records_preserve_backend_key_order() {
    let raw = r#"{"Timestamp":"t","Customer_ID":"c","Amount":1}"#;
    let r: ClaimRecord = serde_json::from_str(raw).expect("record");
    let keys: Vec<&str> = r.fields().keys().map(String::as_str).collect();
    assert_eq!(keys, ["Timestamp", "Customer_ID", "Amount"]);
}

#[test]
fn submission_serializes_nan_amount_as_null() {
    let submission = ClaimSubmission {
        customer_id: "POL-9".to_owned(),
        amount: f64::NAN,
        tenure: None,
        description: "hail".to_owned(),
        date_of_incident: "2026-05-01".to_owned(),
    };
    let json = serde_json::to_value(&submission).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "customer_id": "POL-9",
            "amount": null,
            "tenure": null,
            "description": "hail",
            "date_of_incident": "2026-05-01",
        })
    );
}

#[test]
fn model_status_tolerates_null_meta() {
    let status: ModelStatus = serde_json::from_str(r#"{"active":false,"meta":null}"#).expect("status");
    assert_eq!(status, ModelStatus { active: false, meta: None });
}

#[test]
fn model_status_reads_training_meta() {
    let status: ModelStatus = serde_json::from_str(
        r#"{"active":true,"meta":{"timestamp":"2026-03-04 10:00:00","training_count":250,"extra":1}}"#,
    )
    .expect("status");
    assert!(status.active);
    let meta = status.meta.expect("meta");
    assert_eq!(meta.timestamp.as_deref(), Some("2026-03-04 10:00:00"));
    assert_eq!(meta.training_count, Some(250));
}

#[test]
fn trained_status_is_active() {
    let meta = ModelMeta { timestamp: Some("t".to_owned()), training_count: Some(3) };
    let status = ModelStatus::trained(Some(meta.clone()));
    assert!(status.active);
    assert_eq!(status.meta, Some(meta));
}
