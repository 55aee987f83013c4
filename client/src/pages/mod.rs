//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, tab state) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod status;
pub mod submit;
