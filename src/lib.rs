#![forbid(unsafe_code)]

//! Core domain model and business logic for the caffeine-medication
//! compatibility screener.
//!
//! This crate provides:
//! - Domain types (profiles, medications, symptoms, result bundles)
//! - Medication catalog with interaction messages
//! - Deterministic analysis engine (dosage, sensitivity, timing, advice)
//! - Per-session result state
//! - PDF report generation

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod dosage;
pub mod sensitivity;
pub mod interactions;
pub mod timing;
pub mod recommend;
pub mod engine;
pub mod session;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_catalog, get_catalog};
pub use config::Config;
pub use engine::analyze;
pub use session::{Analysis, SessionSlot};
pub use report::render_report;
