pub mod fit_summary;
pub mod stats;
