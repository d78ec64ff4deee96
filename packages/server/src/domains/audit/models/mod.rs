pub mod analysis;
pub mod report;
pub mod request;

pub use analysis::*;
pub use report::*;
pub use request::*;
