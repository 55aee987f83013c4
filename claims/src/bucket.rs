//! Review-queue classification and rank ordering.
//!
//! Every record lands in exactly one bucket. Fraud wins over authentic so a
//! high-risk outlier with a good authenticity score still surfaces for
//! investigation; anything without a usable score defaults to manual review.

#[cfg(test)]
#[path = "bucket_test.rs"]
mod bucket_test;

use serde::{Deserialize, Serialize};

use crate::record::ClaimRecord;

/// Scores at or below this value are treated as likely fraud.
pub const FRAUD_MAX_SCORE: f64 = 3.0;
/// Scores at or above this value are treated as authentic.
pub const AUTHENTIC_MIN_SCORE: f64 = 7.0;

/// Review queue a claim is routed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    #[default]
    Manual,
    Authentic,
    Fraud,
}

impl Bucket {
    /// Tab order used by the dashboard.
    pub const ALL: [Self; 3] = [Self::Manual, Self::Authentic, Self::Fraud];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Authentic => "authentic",
            Self::Fraud => "fraud",
        }
    }

    /// Parse a bucket name as used in URLs and CLI flags.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "authentic" => Some(Self::Authentic),
            "fraud" => Some(Self::Fraud),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "✋ Manual Check Needed",
            Self::Authentic => "✅ Authentic",
            Self::Fraud => "🚨 Fraud",
        }
    }
}

/// Route a record to its review bucket.
#[must_use]
pub fn classify(record: &ClaimRecord) -> Bucket {
    let score = record.authenticity_score();
    if record.is_high_fraud_risk() || score.is_some_and(|s| s <= FRAUD_MAX_SCORE) {
        return Bucket::Fraud;
    }
    if score.is_some_and(|s| s >= AUTHENTIC_MIN_SCORE) {
        return Bucket::Authentic;
    }
    Bucket::Manual
}

/// Records in `bucket`, highest rank first.
///
/// The sort is stable, so equal ranks keep the order the backend delivered.
#[must_use]
pub fn filter_ranked(records: &[ClaimRecord], bucket: Bucket) -> Vec<&ClaimRecord> {
    let mut selected: Vec<&ClaimRecord> = records.iter().filter(|r| classify(r) == bucket).collect();
    selected.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
    selected
}

/// Per-bucket record totals for tab badges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub manual: usize,
    pub authentic: usize,
    pub fraud: usize,
}

impl BucketCounts {
    #[must_use]
    pub fn tally(records: &[ClaimRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            match classify(record) {
                Bucket::Manual => counts.manual += 1,
                Bucket::Authentic => counts.authentic += 1,
                Bucket::Fraud => counts.fraud += 1,
            }
            counts
        })
    }

    #[must_use]
    pub fn get(self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Manual => self.manual,
            Bucket::Authentic => self.authentic,
            Bucket::Fraud => self.fraud,
        }
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.manual + self.authentic + self.fraud
    }
}

/// Badge color class for an authenticity score cell.
///
/// Independent of [`classify`]: a missing score renders in the neutral
/// amber tone even though the fraud flag may route the row elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTone {
    Good,
    Bad,
    Neutral,
}

impl ScoreTone {
    #[must_use]
    pub fn of(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= AUTHENTIC_MIN_SCORE => Self::Good,
            Some(s) if s <= FRAUD_MAX_SCORE => Self::Bad,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "score-badge score-badge--good",
            Self::Bad => "score-badge score-badge--bad",
            Self::Neutral => "score-badge score-badge--neutral",
        }
    }
}
