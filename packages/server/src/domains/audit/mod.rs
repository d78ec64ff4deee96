//! Audit domain - PageSpeed-backed website audits
//!
//! Pipeline: AuditRequest -> two concurrent fetches (mobile, desktop) ->
//! normalizer -> scoring -> report_builder -> AuditReport.

pub mod diagnostics;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod report_builder;
pub mod scoring;

pub use diagnostics::{inspect_url, probe_api_key, ApiKeyProbe, RawInspection};
pub use error::{AuditError, Result};
pub use models::*;
pub use orchestrator::AuditService;
pub use scoring::{grade_for, ScoreBreakdown, ScoreComponents};
