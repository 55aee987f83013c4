//! Claim-form draft state and its conversion to the submission payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser form binds each input to a `ClaimDraft` field and the CLI
//! fills one from flags. Both build the same `ClaimSubmission`, so numeric
//! coercion and required-field rules live here once.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::record::ClaimSubmission;

/// Policy line selected on the form. Not sent to the backend, which infers
/// the category from the description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceType {
    #[default]
    Health,
    Accident,
    Theft,
}

impl InsuranceType {
    pub const ALL: [Self; 3] = [Self::Health, Self::Accident, Self::Theft];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Accident => "Accident",
            Self::Theft => "Theft",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Current contents of the claim form, all as entered text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimDraft {
    pub insurance_type: InsuranceType,
    pub policy_number: String,
    pub email: String,
    pub date_of_incident: String,
    pub claim_amount: String,
    pub tenure: String,
    pub location: String,
    pub description: String,
    pub attachment_name: Option<String>,
}

impl Default for ClaimDraft {
    fn default() -> Self {
        Self {
            insurance_type: InsuranceType::Health,
            policy_number: String::new(),
            email: String::new(),
            date_of_incident: String::new(),
            claim_amount: String::new(),
            tenure: "1".to_owned(),
            location: String::new(),
            description: String::new(),
            attachment_name: None,
        }
    }
}

impl ClaimDraft {
    /// Labels of required fields that are still blank, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Policy Number", &self.policy_number),
            ("Your Email", &self.email),
            ("Date of Incident", &self.date_of_incident),
            ("Claim Amount", &self.claim_amount),
            ("Location", &self.location),
            ("Claim Description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Human-readable validation problems; empty when the draft can be sent.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .missing_required()
            .into_iter()
            .map(|label| format!("{label} is required"))
            .collect();
        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            problems.push("Your Email must be a valid email address".to_owned());
        }
        problems
    }

    /// Build the `POST /api/claims` payload from the entered text.
    #[must_use]
    pub fn to_submission(&self) -> ClaimSubmission {
        ClaimSubmission {
            customer_id: self.policy_number.clone(),
            amount: parse_float_prefix(&self.claim_amount),
            tenure: parse_int_prefix(&self.tenure),
            description: self.description.clone(),
            date_of_incident: self.date_of_incident.clone(),
        }
    }
}

/// `local@domain` with non-empty parts and no whitespace.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !raw.contains(char::is_whitespace)
}

/// Parse the longest leading decimal number, ignoring trailing garbage.
///
/// Locale-naive: only `.` is a decimal separator. Returns NaN when the text
/// has no numeric prefix.
#[must_use]
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading base-10 integer, ignoring trailing garbage.
///
/// Digit runs beyond the `i64` range saturate at `i64::MAX` / `i64::MIN`.
#[must_use]
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    let saturated = if s.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(s[..end].parse::<i64>().unwrap_or(saturated))
}
