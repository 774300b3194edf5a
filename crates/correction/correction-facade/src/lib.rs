//! Correction Facade
//!
//! Unified re-exports for the correction module.
//!
//! This facade provides a single entry point to all correction functionality:
//! - Point, granularity and anomaly model, `SeriesFilter` contract and errors from SPI
//! - `FilterSettings` and `AnomalyTable` from API
//! - Filters, the smoothing pipeline and the anomaly corrector from Core

// Re-export everything from SPI
pub use correction_spi::*;

// Re-export everything from API
pub use correction_api::*;

// Re-export everything from Core
pub use correction_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use correction_api::{AnomalyTable, FilterSettings};
    pub use correction_core::{
        apply_blocklist_correction, apply_data_correction, moving_average, smoothing,
        AnomalyCorrector, CorrectionPipeline, ExponentialSmoothing, MovingAverage,
    };
    pub use correction_spi::{
        EvolutionPoint, Granularity, Period, Result, SeriesFilter, SeriesPoint,
    };
}
