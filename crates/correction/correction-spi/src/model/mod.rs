//! Data models for series correction.

mod anomaly;
mod granularity;
mod point;

pub use anomaly::{AnomalyBound, AnomalySpan, DownloadAnomaly};
pub use granularity::Granularity;
pub use point::{EvolutionPoint, Period};
