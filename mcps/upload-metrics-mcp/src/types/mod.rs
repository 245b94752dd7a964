//! Value records returned by the estimators

mod disk;
mod host;
mod metrics;

pub use disk::*;
pub use host::*;
pub use metrics::*;
