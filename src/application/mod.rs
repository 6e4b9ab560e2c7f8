//! Application layer - use cases that coordinate the download and counting
//! pipeline.

mod top_packages;

pub use top_packages::{PackageStatistics, TopPackagesOptions, top_packages};
