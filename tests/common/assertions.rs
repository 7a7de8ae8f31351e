//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point and color comparisons.

use cmapio::Rgba;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Tolerance for values that went through an 8-bit quantization
pub const QUANTIZED_EPSILON: f64 = 0.5 / 255.0 + 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two colors are approximately equal channel by channel.
pub fn assert_color_approx_eq(actual: Rgba, expected: Rgba, epsilon: Option<f64>) {
    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (channel, (a, e)) in ["r", "g", "b", "a"]
        .iter()
        .zip(actual.to_array().iter().zip(expected.to_array().iter()))
    {
        assert!(
            (a - e).abs() <= eps,
            "Colors differ in {}: actual = {:?}, expected = {:?}, epsilon = {}",
            channel,
            actual,
            expected,
            eps
        );
    }
}

/// Assert that a color is a shade of grey.
pub fn assert_grey(color: Rgba) {
    assert!(
        color.r == color.g && color.g == color.b,
        "Color is not grey: {:?}",
        color
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_color_approx_eq() {
        assert_color_approx_eq(
            Rgba::rgb(0.5, 0.5, 0.5),
            Rgba::rgb(0.501, 0.5, 0.499),
            Some(QUANTIZED_EPSILON),
        );
    }
}
