//! Mounted-component guard for async continuations.
//!
//! Fetches are never cancelled, so a response can arrive after the page that
//! issued it is gone. Pages create one `Liveness` per mount; continuations
//! check it before touching signals.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness flag cleared when the current reactive owner is cleaned up.
pub fn use_liveness() -> Liveness {
    let liveness = Liveness::new();
    let on_drop = liveness.clone();
    leptos::prelude::on_cleanup(move || on_drop.kill());
    liveness
}
