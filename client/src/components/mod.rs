//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, dashboard panels, and dialogs while
//! reading/writing shared state from Leptos context providers.

pub mod claim_detail_modal;
pub mod claim_form;
pub mod claims_table;
pub mod navbar;
pub mod train_panel;
