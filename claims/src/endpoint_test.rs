use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("http://api.test", CLAIMS_PATH), "http://api.test/api/claims");
}

#[test]
fn endpoint_url_trims_trailing_slashes() {
    assert_eq!(endpoint_url("http://api.test//", TRAIN_PATH), "http://api.test/api/train");
}

#[test]
fn endpoint_url_falls_back_to_default_base() {
    assert_eq!(endpoint_url("  ", MODEL_STATUS_PATH), "http://localhost:8000/api/model/status");
}
