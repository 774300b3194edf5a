//! Correction Service Provider Interface
//!
//! Defines the data model, traits and error types shared by the download
//! series correction crates.
//!
//! - [`EvolutionPoint`]: One observation of a download series
//! - [`Granularity`]: Time-bucketing resolution of a series
//! - [`DownloadAnomaly`]: A curated, known-bad date range for a package
//! - [`SeriesPoint`]: Anything carrying a numeric `value` a filter can rewrite
//! - [`SeriesFilter`]: Contract implemented by every smoothing stage
//! - [`CorrectionError`]: Standardized error type for the configuration surface

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{with_values, SeriesFilter, SeriesPoint};
pub use error::{CorrectionError, Result};
pub use model::{AnomalyBound, AnomalySpan, DownloadAnomaly, EvolutionPoint, Granularity, Period};
