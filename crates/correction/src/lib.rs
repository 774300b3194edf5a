//! # correction
//!
//! Post-processing for package download series before charting.
//!
//! Two independent stages:
//!
//! - a smoothing pipeline (bidirectional moving average, then
//!   forward-backward exponential smoothing) that keeps both endpoints fixed
//! - a known-anomaly corrector that redraws curated contaminated ranges by
//!   linear interpolation
//!
//! ## Example
//!
//! ```rust
//! use correction::prelude::*;
//!
//! let series = vec![
//!     EvolutionPoint::weekly("2025-08-04", 33_913_132.0),
//!     EvolutionPoint::weekly("2025-08-11", 95_000_000.0),
//!     EvolutionPoint::weekly("2025-08-18", 36_000_000.0),
//! ];
//!
//! let table = AnomalyTable::builtin();
//! let fixed = apply_blocklist_correction(&table, &series, "vite", Granularity::Weekly);
//! assert!(fixed[1].value < 40_000_000.0);
//!
//! let smoothed = apply_data_correction(&fixed, &FilterSettings::new(1, 2.0));
//! assert_eq!(smoothed[0].value, series[0].value);
//! ```

pub use correction_facade::*;
