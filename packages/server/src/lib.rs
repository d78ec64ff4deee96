// SiteLaunch Audit API - Core
//
// Audits a website through Google PageSpeed Insights: two Lighthouse runs
// (mobile + desktop) are normalized into a fixed report shape and scored.
//
// Audit logic lives in domains/audit; infrastructure seams live in kernel.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
