//! Networking modules for the scoring backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls; the request/response schema lives in the
//! shared `claims` crate so the CLI speaks the same contract.

pub mod api;
