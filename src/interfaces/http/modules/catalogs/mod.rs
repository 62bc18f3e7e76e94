//! Catalogs module — the four flat reference catalogs
//!
//! One handler set serves `/domains`, `/organizations`, `/academic_levels`
//! and `/academic_fields`; the mounted state decides which catalog a router
//! instance works on.

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
