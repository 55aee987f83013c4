//! Local UI chrome state shared across routes.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme) out of the claim and dashboard state
//! so the navigation bar can render on every route.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for app-wide chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
