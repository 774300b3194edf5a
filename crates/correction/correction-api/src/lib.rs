//! Correction API
//!
//! Configuration types for download series correction.
//!
//! - [`FilterSettings`]: Parameters of the smoothing pipeline
//! - [`AnomalyTable`]: The curated, read-only list of known download anomalies

mod settings;
mod table;

// Re-export SPI types
pub use correction_spi::{
    AnomalyBound, AnomalySpan, CorrectionError, DownloadAnomaly, EvolutionPoint, Granularity,
    Period, Result,
};

pub use settings::FilterSettings;
pub use table::AnomalyTable;
