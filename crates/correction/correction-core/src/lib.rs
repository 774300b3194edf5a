//! Correction Core
//!
//! Implementations for download series correction:
//!
//! - Bidirectional moving average and forward-backward exponential smoothing
//! - The fixed-order smoothing pipeline driven by [`FilterSettings`]
//! - Granularity-aware date matching and weekly value scaling
//! - Known-anomaly replacement by linear interpolation
//!
//! [`FilterSettings`]: correction_api::FilterSettings

mod blocklist;
mod filters;
mod pipeline;
mod resolver;

pub use blocklist::{anomalies_for_packages, apply_blocklist_correction, AnomalyCorrector};
pub use filters::{moving_average, smoothing, ExponentialSmoothing, MovingAverage};
pub use pipeline::{apply_data_correction, CorrectionPipeline};
pub use resolver::{date_key, is_affected, scale_weekly};
