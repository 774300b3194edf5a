//! Error types for series correction.
//!
//! This module contains error types and the Result alias.

mod correction_error;

pub use correction_error::{CorrectionError, Result};
