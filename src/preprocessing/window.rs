// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Hamming taper applied to a field before spectral estimation

use ndarray::{Array1, Array2};

/// Compute a symmetric Hamming window of the given length.
///
/// Uses `w(n) = 0.54 - 0.46 * cos(2πn / (M - 1))`. A window of length one is
/// `[1.0]` and a window of length zero is empty.
pub fn hamming(length: usize) -> Array1<f64> {
    match length {
        0 => return Array1::zeros(0),
        1 => return Array1::ones(1),
        _ => {}
    }

    let denominator = (length - 1) as f64;
    Array1::from_shape_fn(length, |n| {
        0.54 - 0.46 * (2.0 * std::f64::consts::PI * n as f64 / denominator).cos()
    })
}

/// Separable 2D taper built from one Hamming window per axis
#[derive(Debug, Clone)]
pub struct Window2D {
    weights: Array2<f64>,
}

impl Window2D {
    /// Build the `(ny, nx)` window `sqrt(w_y ⊗ w_x)`
    pub fn hamming(ny: usize, nx: usize) -> Self {
        let w_y = hamming(ny);
        let w_x = hamming(nx);

        let weights = Array2::from_shape_fn((ny, nx), |(y, x)| (w_y[y] * w_x[x]).sqrt());

        Self { weights }
    }

    /// Window weights, indexed `[y, x]`
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Multiply the field element-wise by the window.
    ///
    /// The field must have the same shape as the window.
    pub fn apply(&self, field: &mut Array2<f64>) {
        debug_assert_eq!(field.dim(), self.weights.dim());
        *field *= &self.weights;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_matches_reference_values() {
        // numpy.hamming(5)
        let expected = [0.08, 0.54, 1.0, 0.54, 0.08];
        let window = hamming(5);

        for (i, (&w, &e)) in window.iter().zip(expected.iter()).enumerate() {
            assert!((w - e).abs() < 1e-12, "index {}: {} vs {}", i, w, e);
        }
    }

    #[test]
    fn test_hamming_is_symmetric_and_peaks_in_the_middle() {
        for length in [2usize, 7, 8, 33] {
            let window = hamming(length);
            for n in 0..length {
                assert!((window[n] - window[length - 1 - n]).abs() < 1e-12);
                assert!(window[n] <= 1.0 + 1e-12);
            }
            assert!((window[0] - 0.08).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        assert_eq!(hamming(0).len(), 0);
        assert_eq!(hamming(1).to_vec(), vec![1.0]);
    }

    #[test]
    fn test_window_2d_is_separable() {
        let window = Window2D::hamming(6, 9);
        let w_y = hamming(6);
        let w_x = hamming(9);

        for ((y, x), &w) in window.weights().indexed_iter() {
            let separable = w_y[y].sqrt() * w_x[x].sqrt();
            assert!((w - separable).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apply_scales_field() {
        let window = Window2D::hamming(3, 3);
        let mut field = Array2::from_elem((3, 3), 2.0);
        window.apply(&mut field);

        // Center weight is 1.0, corner is sqrt(0.08 * 0.08)
        assert!((field[[1, 1]] - 2.0).abs() < 1e-12);
        assert!((field[[0, 0]] - 0.16).abs() < 1e-12);
    }
}
