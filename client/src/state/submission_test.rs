use super::*;

fn filled_state() -> SubmissionState {
    let mut state = SubmissionState::default();
    state.draft.policy_number = "POL-77".to_owned();
    state.draft.email = "a@b.test".to_owned();
    state.draft.date_of_incident = "2026-08-01".to_owned();
    state.draft.claim_amount = "300".to_owned();
    state.draft.tenure = "3".to_owned();
    state.draft.location = "Dock 4".to_owned();
    state.draft.description = "Forklift hit the door".to_owned();
    state
}

#[test]
fn begin_builds_payload_with_numeric_fields() {
    let mut state = filled_state();
    let submission = state.begin().expect("payload");
    assert_eq!(submission.customer_id, "POL-77");
    assert!((submission.amount - 300.0).abs() < f64::EPSILON);
    assert_eq!(submission.tenure, Some(3));
    assert!(state.submitting);
}

#[test]
fn repeated_begin_yields_a_single_submission() {
    let mut state = filled_state();
    let attempts: Vec<_> = (0..3).filter_map(|_| state.begin()).collect();
    assert_eq!(attempts.len(), 1);
}

#[test]
fn finish_re_enables_submit() {
    let mut state = filled_state();
    let _ = state.begin();
    state.finish();
    assert!(!state.submitting);
    assert!(state.begin().is_some());
}

#[test]
fn button_label_reflects_in_flight_state() {
    let mut state = SubmissionState::default();
    assert_eq!(state.button_label(), "Submit Claim");
    state.submitting = true;
    assert_eq!(state.button_label(), "Processing...");
}

#[test]
fn accepted_submission_navigates() {
    let mut state = filled_state();
    let _ = state.begin();
    let outcome = state.settle(&Ok(serde_json::json!({ "message": "ok" })));
    assert_eq!(outcome, SubmitOutcome::Navigate);
    assert!(!state.submitting);
}

#[test]
fn rejected_submission_alerts_backend_detail() {
    let mut state = filled_state();
    let _ = state.begin();
    let err = ApiError::rejected(422, Some(&serde_json::json!({ "detail": "Amount must be positive" })));
    let outcome = state.settle(&Err(err));
    assert_eq!(outcome, SubmitOutcome::Alert("Error submitting claim: Amount must be positive".to_owned()));
    assert!(!state.submitting);
}

#[test]
fn transport_and_decode_failures_alert_without_navigating() {
    for err in [ApiError::Transport("connection refused".to_owned()), ApiError::Decode("eof".to_owned())] {
        let mut state = filled_state();
        let _ = state.begin();
        assert_eq!(state.settle(&Err(err)), SubmitOutcome::Alert("Failed to connect to server.".to_owned()));
        assert!(!state.submitting);
    }
}
