//! Wire records exchanged with the scoring backend.
//!
//! DESIGN
//! ======
//! The backend owns the list-view schema, so `ClaimRecord` keeps the raw
//! ordered JSON object and exposes typed accessors only for the fields the UI
//! reads. Unknown columns survive untouched and key order is preserved for
//! CSV export headers.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::display_value;

pub const CUSTOMER_ID: &str = "Customer_ID";
pub const CATEGORY: &str = "Category";
pub const AMOUNT: &str = "Amount";
pub const TENURE: &str = "Tenure";
pub const TIMESTAMP: &str = "Timestamp";
pub const DESCRIPTION: &str = "Description";
pub const URGENCY: &str = "Urgency";
pub const STATUS: &str = "Status";
pub const FRAUD_RISK: &str = "Fraud_Risk";
pub const ANOMALY_SCORE: &str = "Anomaly_Score";
pub const AUTHENTICITY_SCORE: &str = "authenticity_score";
pub const PRIORITY_SCORE: &str = "priority_score";
pub const RANK_SCORE: &str = "rank_score";

/// Fraud-risk label the backend uses for isolation-forest outliers.
pub const HIGH_FRAUD_RISK: &str = "High";

/// JSON body for `POST /api/claims`.
///
/// `amount` may be NaN when the input text had no numeric prefix and `tenure`
/// may be `None`; both serialize as JSON `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClaimSubmission {
    pub customer_id: String,
    pub amount: f64,
    pub tenure: Option<i64>,
    pub description: String,
    pub date_of_incident: String,
}

/// One row of `GET /api/claims`, kept as the backend sent it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimRecord(Map<String, Value>);

impl ClaimRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from a JSON value; non-objects yield `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Display text for `key`; missing and `null` fields render empty.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }

    /// Numeric value for `key` when present.
    ///
    /// Present means the key exists, is not `null` or `""`, and holds a finite
    /// number or a string that parses as one.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        let parsed = match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn customer_id(&self) -> String {
        self.text(CUSTOMER_ID)
    }

    #[must_use]
    pub fn timestamp(&self) -> String {
        self.text(TIMESTAMP)
    }

    #[must_use]
    pub fn authenticity_score(&self) -> Option<f64> {
        self.number(AUTHENTICITY_SCORE)
    }

    #[must_use]
    pub fn priority_score(&self) -> Option<f64> {
        self.number(PRIORITY_SCORE)
    }

    /// Primary sort key; a missing rank counts as zero.
    #[must_use]
    pub fn rank_score(&self) -> f64 {
        self.number(RANK_SCORE).unwrap_or(0.0)
    }

    #[must_use]
    pub fn anomaly_score(&self) -> Option<f64> {
        self.number(ANOMALY_SCORE)
    }

    #[must_use]
    pub fn is_high_fraud_risk(&self) -> bool {
        self.get(FRAUD_RISK).and_then(Value::as_str) == Some(HIGH_FRAUD_RISK)
    }

    /// `(customer_id, timestamp)` pair the backend uses to address a claim
    /// for deletion. `None` when either part is blank.
    #[must_use]
    pub fn delete_key(&self) -> Option<(String, String)> {
        let customer_id = self.customer_id();
        let timestamp = self.timestamp();
        if customer_id.is_empty() || timestamp.is_empty() {
            return None;
        }
        Some((customer_id, timestamp))
    }
}

impl From<Map<String, Value>> for ClaimRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Metadata of the currently trained model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMeta {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub training_count: Option<u64>,
}

/// Body of `GET /api/model/status`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub meta: Option<ModelMeta>,
}

impl ModelStatus {
    /// Status shown right after a successful training upload.
    #[must_use]
    pub fn trained(meta: Option<ModelMeta>) -> Self {
        Self { active: true, meta }
    }
}

/// Success body of `POST /api/train`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub meta: Option<ModelMeta>,
}
