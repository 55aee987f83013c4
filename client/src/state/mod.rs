//! Application state modules provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each struct is held in an `RwSignal` created by `App` or by the page that
//! owns it. Methods are plain Rust so state transitions are testable without
//! a reactive runtime.

pub mod admin;
pub mod submission;
pub mod ui;
