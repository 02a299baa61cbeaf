// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! 2D FFT implementation for spectral analysis
//!
//! Conventions follow numpy's `fft2` / `ifft2`: the forward transform is
//! unnormalized, the inverse is scaled by `1 / (ny * nx)`, and the zero
//! frequency sits at index `(0, 0)` (no shifting).

use ndarray::{Array2, Axis};
use rustfft::{num_complex::Complex64, FftDirection, FftPlanner};

/// Trait for implementing 2D spectral transforms
pub trait SpectralTransform {
    /// Forward transform of a real field
    fn forward(&mut self, field: &Array2<f64>) -> Array2<Complex64>;

    /// Inverse transform of a complex spectrum, normalized
    fn inverse(&mut self, spectrum: &Array2<Complex64>) -> Array2<Complex64>;
}

/// FFT-based 2D transform.
///
/// Holds a planner so that repeated transforms of the same shape reuse
/// their plans.
pub struct FFT2D {
    planner: FftPlanner<f64>,
    buffer: Vec<Complex64>,
}

impl FFT2D {
    /// Create a new 2D FFT
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            buffer: Vec::new(),
        }
    }

    /// Transform rows then columns in place
    fn process(&mut self, data: &mut Array2<Complex64>, direction: FftDirection) {
        let (ny, nx) = data.dim();
        if ny == 0 || nx == 0 {
            return;
        }

        let row_fft = self.planner.plan_fft(nx, direction);
        let col_fft = self.planner.plan_fft(ny, direction);

        // Gather each lane into a contiguous buffer, transform, scatter back
        for mut row in data.axis_iter_mut(Axis(0)) {
            self.buffer.clear();
            self.buffer.extend(row.iter().copied());
            row_fft.process(&mut self.buffer);
            for (dst, src) in row.iter_mut().zip(self.buffer.iter()) {
                *dst = *src;
            }
        }

        for mut column in data.axis_iter_mut(Axis(1)) {
            self.buffer.clear();
            self.buffer.extend(column.iter().copied());
            col_fft.process(&mut self.buffer);
            for (dst, src) in column.iter_mut().zip(self.buffer.iter()) {
                *dst = *src;
            }
        }
    }
}

impl Default for FFT2D {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTransform for FFT2D {
    fn forward(&mut self, field: &Array2<f64>) -> Array2<Complex64> {
        let mut data = field.mapv(|v| Complex64::new(v, 0.0));
        self.process(&mut data, FftDirection::Forward);
        data
    }

    fn inverse(&mut self, spectrum: &Array2<Complex64>) -> Array2<Complex64> {
        let mut data = spectrum.clone();
        self.process(&mut data, FftDirection::Inverse);

        let (ny, nx) = data.dim();
        if ny > 0 && nx > 0 {
            let norm = 1.0 / (ny * nx) as f64;
            data.mapv_inplace(|c| c * norm);
        }
        data
    }
}

/// Element-wise modulus of a spectrum
pub fn amplitude(spectrum: &Array2<Complex64>) -> Array2<f64> {
    spectrum.mapv(|c| c.norm())
}
