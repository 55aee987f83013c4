use super::*;

fn filled() -> ClaimDraft {
    ClaimDraft {
        insurance_type: InsuranceType::Accident,
        policy_number: "POL-123456".to_owned(),
        email: "jo@example.com".to_owned(),
        date_of_incident: "2026-09-30".to_owned(),
        claim_amount: "1250.50".to_owned(),
        tenure: "4".to_owned(),
        location: "Springfield".to_owned(),
        description: "Rear-ended at a stop light".to_owned(),
        attachment_name: None,
    }
}

#[test]
fn default_draft_starts_with_health_and_one_year_tenure() {
    let draft = ClaimDraft::default();
    assert_eq!(draft.insurance_type, InsuranceType::Health);
    assert_eq!(draft.tenure, "1");
    assert!(draft.policy_number.is_empty());
}

#[test]
fn default_draft_reports_every_required_field() {
    assert_eq!(
        ClaimDraft::default().missing_required(),
        ["Policy Number", "Your Email", "Date of Incident", "Claim Amount", "Location", "Claim Description"]
    );
}

#[test]
fn tenure_is_optional() {
    let mut draft = filled();
    draft.tenure = String::new();
    assert!(draft.missing_required().is_empty());
    assert!(draft.problems().is_empty());
}

#[test]
fn problems_flag_malformed_email() {
    let mut draft = filled();
    draft.email = "not-an-email".to_owned();
    assert_eq!(draft.problems(), ["Your Email must be a valid email address"]);
}

#[test]
fn to_submission_maps_policy_number_to_customer_id() {
    let submission = filled().to_submission();
    assert_eq!(submission.customer_id, "POL-123456");
    assert!((submission.amount - 1250.5).abs() < f64::EPSILON);
    assert_eq!(submission.tenure, Some(4));
    assert_eq!(submission.description, "Rear-ended at a stop light");
    assert_eq!(submission.date_of_incident, "2026-09-30");
}

#[test]
fn to_submission_payload_has_exactly_five_fields() {
    let json = serde_json::to_value(filled().to_submission()).expect("json");
    let keys: Vec<&str> = json.as_object().expect("object").keys().map(String::as_str).collect();
    assert_eq!(keys, ["customer_id", "amount", "tenure", "description", "date_of_incident"]);
}

#[test]
fn malformed_amount_becomes_nan() {
    let mut draft = filled();
    draft.claim_amount = "abc".to_owned();
    assert!(draft.to_submission().amount.is_nan());
}

#[test]
fn parse_float_prefix_follows_lenient_rules() {
    assert!((parse_float_prefix("  42") - 42.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("12.5kg") - 12.5).abs() < f64::EPSILON);
    assert!((parse_float_prefix(".5") - 0.5).abs() < f64::EPSILON);
    assert!((parse_float_prefix("-3") + 3.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("1e3") - 1000.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("2e") - 2.0).abs() < f64::EPSILON);
    assert!((parse_float_prefix("1,000") - 1.0).abs() < f64::EPSILON);
    assert!(parse_float_prefix("").is_nan());
    assert!(parse_float_prefix(".").is_nan());
    assert!(parse_float_prefix("-").is_nan());
    assert!(parse_float_prefix("Infinity").is_infinite());
}

#[test]
fn parse_int_prefix_truncates_at_first_non_digit() {
    assert_eq!(parse_int_prefix("7"), Some(7));
    assert_eq!(parse_int_prefix(" 12 years"), Some(12));
    assert_eq!(parse_int_prefix("1.9"), Some(1));
    assert_eq!(parse_int_prefix("-2"), Some(-2));
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("x1"), None);
}

#[test]
fn parse_int_prefix_saturates_out_of_range_digits() {
    assert_eq!(parse_int_prefix("99999999999999999999 years"), Some(i64::MAX));
    assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
}

#[test]
fn insurance_type_parse_is_case_insensitive() {
    assert_eq!(InsuranceType::parse("theft"), Some(InsuranceType::Theft));
    assert_eq!(InsuranceType::parse("Health"), Some(InsuranceType::Health));
    assert_eq!(InsuranceType::parse("Life"), None);
}

#[test]
fn looks_like_email_requires_both_parts() {
    assert!(looks_like_email("a@b"));
    assert!(!looks_like_email("@b"));
    assert!(!looks_like_email("a@"));
    assert!(!looks_like_email("a b@c"));
    assert!(!looks_like_email("a@b@c"));
}
