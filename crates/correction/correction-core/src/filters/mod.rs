//! Zero-lag smoothing filters.
//!
//! Both filters compute an early-anchored and a late-anchored estimate and
//! blend them by position, so index 0 and index n-1 keep their input values.

mod exponential;
mod moving_average;

pub use exponential::{smoothing, ExponentialSmoothing};
pub use moving_average::{moving_average, MovingAverage};

/// Shortest series either filter will touch.
pub(crate) const MIN_FILTER_LEN: usize = 3;

/// Blend `early` into `late` with weight `t = i / (n - 1)` on interior points.
///
/// Endpoints are copied from `values`.
pub(crate) fn blend_interior(values: &[f64], early: &[f64], late: &[f64]) -> Vec<f64> {
    let n = values.len();
    let last = (n - 1) as f64;
    let mut result = values.to_vec();
    for (i, value) in result.iter_mut().enumerate().take(n - 1).skip(1) {
        let t = i as f64 / last;
        *value = (1.0 - t) * early[i] + t * late[i];
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_pins_endpoints() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let blended = blend_interior(&values, &[9.0; 4], &[-9.0; 4]);
        assert_eq!(blended[0], 1.0);
        assert_eq!(blended[3], 4.0);
    }

    #[test]
    fn test_blend_weights_by_position() {
        let values = [0.0, 0.0, 0.0, 0.0, 0.0];
        let blended = blend_interior(&values, &[0.0; 5], &[4.0; 5]);
        assert!((blended[1] - 1.0).abs() < 1e-12);
        assert!((blended[2] - 2.0).abs() < 1e-12);
        assert!((blended[3] - 3.0).abs() < 1e-12);
    }
}
