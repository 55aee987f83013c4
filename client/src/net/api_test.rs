use super::*;

#[test]
fn api_config_defaults_to_local_backend() {
    assert_eq!(ApiConfig::default().base, "http://localhost:8000");
}

#[test]
fn api_config_trims_trailing_slash_and_whitespace() {
    assert_eq!(ApiConfig::new(" https://claims.test/ ").base, "https://claims.test");
}

#[test]
fn api_config_blank_base_falls_back_to_default() {
    assert_eq!(ApiConfig::new(""), ApiConfig::default());
}

#[test]
fn api_config_builds_endpoint_urls() {
    let config = ApiConfig::new("http://10.0.0.5:8000");
    assert_eq!(config.url(claims::CLAIMS_PATH), "http://10.0.0.5:8000/api/claims");
    assert_eq!(config.url(claims::TRAIN_PATH), "http://10.0.0.5:8000/api/train");
    assert_eq!(config.url(claims::MODEL_STATUS_PATH), "http://10.0.0.5:8000/api/model/status");
}

#[test]
fn from_document_uses_default_outside_browser() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}

#[test]
fn records_from_body_keeps_object_rows_in_order() {
    let body = serde_json::json!([
        { "Customer_ID": "A" },
        "junk",
        { "Customer_ID": "B" },
    ]);
    let records = records_from_body(body).expect("records");
    let ids: Vec<String> = records.iter().map(ClaimRecord::customer_id).collect();
    assert_eq!(ids, ["A", "B"]);
}

#[test]
fn records_from_body_rejects_non_arrays() {
    let err = records_from_body(serde_json::json!({ "detail": "oops" })).expect_err("should fail");
    assert_eq!(err, ApiError::Decode("expected a JSON array of claims, got object".to_owned()));
}

#[test]
fn not_an_array_message_names_json_kind() {
    assert_eq!(not_an_array_message(&Value::Null), "expected a JSON array of claims, got null");
}
