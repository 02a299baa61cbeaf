// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Field statistics used for mean and variance restoration

use ndarray::Array2;

/// Rounding headroom, in units of `f64::EPSILON * sqrt(len)`, below which a
/// standard deviation is indistinguishable from summation error.
pub const DEGENERATE_STD_ULPS: f64 = 4.0;

/// Population mean and standard deviation (ddof = 0) of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStatistics {
    pub mean: f64,
    pub std: f64,
}

impl FieldStatistics {
    /// Compute the statistics of a field, `None` if it is empty
    pub fn of(field: &Array2<f64>) -> Option<Self> {
        let mean = field.mean()?;
        let std = field.std(0.0);
        Some(Self { mean, std })
    }

    /// Whether the standard deviation is too small to divide by.
    ///
    /// A field is degenerate when all its values are equal, or when its
    /// standard deviation is below the rounding error of the mean, i.e.
    /// `DEGENERATE_STD_ULPS * EPSILON * sqrt(len) * max|v|`. A large offset
    /// with a resolvable variation on top is not degenerate.
    pub fn is_degenerate(&self, field: &Array2<f64>) -> bool {
        let mut values = field.iter();
        let constant = match values.next() {
            Some(first) => values.all(|v| v == first),
            None => true,
        };
        if constant {
            return true;
        }

        let scale = field.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let floor = DEGENERATE_STD_ULPS * f64::EPSILON * (field.len() as f64).sqrt() * scale;
        !(self.std > floor)
    }
}
