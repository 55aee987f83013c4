//! Claim-form state: the draft and the in-flight flag.
//!
//! The in-flight flag is independent of the dashboard's training flag; each
//! action guards only its own button.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use claims::{ApiError, ClaimDraft, ClaimSubmission};
use serde_json::Value;

/// Alert prefix for a rejected submission; the backend detail follows.
pub const SUBMIT_REJECTED_PREFIX: &str = "Error submitting claim: ";
/// Alert shown when the backend could not be reached.
pub const SUBMIT_UNREACHABLE: &str = "Failed to connect to server.";

/// What the form does once the backend has answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted: go to the status page.
    Navigate,
    /// Rejected or unreachable: stay on the form and show this alert.
    Alert(String),
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionState {
    pub draft: ClaimDraft,
    pub submitting: bool,
}

impl SubmissionState {
    /// Mark the submission in flight and build its payload.
    ///
    /// Returns `None` while a previous submit is still running.
    pub fn begin(&mut self) -> Option<ClaimSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.draft.to_submission())
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }

    /// Clear the in-flight flag and decide the follow-up for `result`.
    ///
    /// Only a 2xx response navigates; every error keeps the user on the form.
    pub fn settle(&mut self, result: &Result<Value, ApiError>) -> SubmitOutcome {
        self.finish();
        match result {
            Ok(_) => SubmitOutcome::Navigate,
            Err(err) => SubmitOutcome::Alert(err.alert_text(SUBMIT_REJECTED_PREFIX, SUBMIT_UNREACHABLE)),
        }
    }

    /// Label for the submit button.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.submitting { "Processing..." } else { "Submit Claim" }
    }
}
