//! Kernel module - server infrastructure and dependencies.

pub mod pagespeed;
pub mod test_dependencies;
pub mod traits;

pub use pagespeed_client::{PageSpeedClient, PageSpeedError, RawAnalysis, Strategy};
pub use test_dependencies::{MockAnalysisClient, MockOutcome};
pub use traits::*;
