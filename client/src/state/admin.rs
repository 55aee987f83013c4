//! Admin dashboard state: tabs, fetched claims, model status, training.
//!
//! DESIGN
//! ======
//! The fetched claim list is the only source; the visible view, bucket
//! counts, and export are derived from it on demand so nothing can go stale
//! relative to the selected bucket.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use claims::{Bucket, BucketCounts, ClaimRecord, ModelMeta, ModelStatus, TrainingFileError, TrainingPreview};

/// Top-level dashboard view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Train,
    Claims,
}

/// A training CSV picked by the operator and read into memory.
///
/// The raw bytes are what gets uploaded; the preview is built from a lossy
/// UTF-8 decode and never feeds back into the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingSelection {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub preview: Result<TrainingPreview, TrainingFileError>,
}

impl TrainingSelection {
    /// Validate the name and parse a preview of `bytes`.
    #[must_use]
    pub fn new(file_name: String, bytes: Vec<u8>) -> Self {
        let preview = claims::training::check_file_name(&file_name)
            .and_then(|()| TrainingPreview::parse(&String::from_utf8_lossy(&bytes)));
        Self { file_name, bytes, preview }
    }

    /// Whether the file decodes as UTF-8 without replacement characters.
    #[must_use]
    pub fn is_utf8(&self) -> bool {
        std::str::from_utf8(&self.bytes).is_ok()
    }

    #[must_use]
    pub fn is_uploadable(&self) -> bool {
        self.preview.is_ok()
    }
}

/// Dashboard state shared by the admin page and its panels.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub bucket: Bucket,
    pub claims: Vec<ClaimRecord>,
    pub claims_loading: bool,
    pub claims_error: Option<String>,
    pub model_status: Option<ModelStatus>,
    pub training: bool,
    pub training_file: Option<TrainingSelection>,
    pub selected: Option<ClaimRecord>,
    pub deleting: bool,
}

impl AdminState {
    /// Claims in the selected bucket, highest rank first.
    #[must_use]
    pub fn visible_claims(&self) -> Vec<&ClaimRecord> {
        claims::filter_ranked(&self.claims, self.bucket)
    }

    #[must_use]
    pub fn counts(&self) -> BucketCounts {
        BucketCounts::tally(&self.claims)
    }

    /// Replace the claim list with a fresh fetch result.
    pub fn set_claims(&mut self, claims: Vec<ClaimRecord>) {
        self.claims = claims;
        self.claims_loading = false;
        self.claims_error = None;
    }

    pub fn set_claims_error(&mut self, message: String) {
        self.claims_loading = false;
        self.claims_error = Some(message);
    }

    /// Whether the train trigger is enabled.
    #[must_use]
    pub fn can_train(&self) -> bool {
        !self.training && self.training_file.as_ref().is_some_and(TrainingSelection::is_uploadable)
    }

    /// Mark training in flight and hand out the upload payload.
    ///
    /// Returns `None` while another upload is running or no valid file is
    /// selected, so repeated clicks send at most one request.
    pub fn begin_training(&mut self) -> Option<(String, Vec<u8>)> {
        if !self.can_train() {
            return None;
        }
        let file = self.training_file.as_ref()?;
        let payload = (file.file_name.clone(), file.bytes.clone());
        self.training = true;
        Some(payload)
    }

    /// Record a successful training run.
    pub fn finish_training(&mut self, meta: Option<ModelMeta>) {
        self.training = false;
        self.model_status = Some(ModelStatus::trained(meta));
    }

    pub fn fail_training(&mut self) {
        self.training = false;
    }

    /// CSV filename and text for the visible view, or `None` when empty.
    #[must_use]
    pub fn export(&self, iso_now: &str) -> Option<(String, String)> {
        let csv = claims::export_csv(&self.visible_claims())?;
        Some((claims::export_filename(iso_now), csv))
    }
}
