//! Contract definitions for series correction.
//!
//! This module contains trait definitions that filters and point types implement.

mod series_filter;
mod series_point;

pub use series_filter::SeriesFilter;
pub use series_point::{with_values, SeriesPoint};
