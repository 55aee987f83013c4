//! Shared claim model for the intake form, admin dashboard, and CLI.
//!
//! This crate owns the wire representation exchanged with the scoring
//! backend plus the pure review logic layered on top of it: bucket
//! classification, rank ordering, CSV export, and training-file preview.
//! It performs no I/O so both the WASM client and native tools can use it.

pub mod bucket;
pub mod draft;
pub mod endpoint;
pub mod error;
pub mod export;
pub mod format;
pub mod record;
pub mod training;

pub use bucket::{Bucket, BucketCounts, ScoreTone, classify, filter_ranked};
pub use draft::{ClaimDraft, InsuranceType};
pub use endpoint::{CLAIMS_PATH, DEFAULT_API_BASE, MODEL_STATUS_PATH, TRAIN_PATH, endpoint_url};
pub use error::{ApiError, detail_message};
pub use export::{export_csv, export_filename};
pub use record::{ClaimRecord, ClaimSubmission, ModelMeta, ModelStatus, TrainResponse};
pub use training::{TrainingFileError, TrainingPreview};
