// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Synthetic Test Fields
//!
//! This module provides seeded generators for simple 2D fields, which are
//! useful for:
//!
//! - Testing the surrogate generator against fields with known spectra
//! - Benchmarking on realistic grid sizes
//! - Producing example inputs for the command line tool
//!
//! ## Examples
//!
//! ```rust
//! use rust_surrogate::utility::test_fields::FieldGenerator;
//!
//! // Plane wave with one cycle along x, plus Gaussian noise
//! let mut generator = FieldGenerator::new(12345);
//! let wave = FieldGenerator::sinusoid_field(32, 64, 0.0, 1.0, 1.0);
//! let noise = generator.gaussian_field(32, 64, 0.1);
//! let field = wave + noise;
//!
//! assert_eq!(field.dim(), (32, 64));
//! ```

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of synthetic 2D fields.
///
/// Two generators created with the same seed produce the same sequence of
/// fields.
pub struct FieldGenerator {
    rng: StdRng,
}

impl FieldGenerator {
    /// Creates a new field generator with a given seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed of the underlying random number generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a new field generator seeded from operating system entropy.
    pub fn new_from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generates a random value from a standard Gaussian (normal) distribution.
    ///
    /// Uses the Box-Muller transform:
    /// ```text
    /// z = sqrt(-2 * ln(u1)) * cos(2 * π * u2)
    /// ```
    /// where u1 and u2 are uniform random variables, u1 in (0, 1].
    pub fn random_gaussian(&mut self) -> f64 {
        // random() is in [0, 1), so 1 - u avoids ln(0)
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2 = self.rng.random::<f64>();

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Generates a field of independent Gaussian values.
    ///
    /// # Arguments
    ///
    /// * `ny`, `nx` - Field dimensions
    /// * `amplitude` - Standard deviation of each value
    pub fn gaussian_field(&mut self, ny: usize, nx: usize, amplitude: f64) -> Array2<f64> {
        let mut field = Array2::zeros((ny, nx));
        for value in field.iter_mut() {
            *value = self.random_gaussian() * amplitude;
        }
        field
    }

    /// Generates a plane wave `amplitude * sin(2π (ky·y/ny + kx·x/nx))`.
    ///
    /// `ky` and `kx` are expressed in cycles across the field, so integer
    /// values are periodic on the grid.
    pub fn sinusoid_field(ny: usize, nx: usize, ky: f64, kx: f64, amplitude: f64) -> Array2<f64> {
        Array2::from_shape_fn((ny, nx), |(y, x)| {
            let phase = ky * y as f64 / ny as f64 + kx * x as f64 / nx as f64;
            amplitude * (2.0 * std::f64::consts::PI * phase).sin()
        })
    }
}
