// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Surrogate Field Generator
//!
//! Produces random fields sharing the amplitude spectrum, mean and standard
//! deviation of an input field. The procedure is:
//!
//! 1. Optionally taper a copy of the field with a separable Hamming window
//! 2. Record mean and standard deviation, then remove the mean
//! 3. Take the 2D FFT and keep its modulus
//! 4. For each sample, combine the modulus with a Hermitian random phase,
//!    inverse-transform, keep the real part, restore mean and rescale to the
//!    original standard deviation
//!
//! The caller's field is never modified.
//!
//! ## Examples
//!
//! ```rust
//! use ndarray::Array2;
//! use rust_surrogate::surrogate::SurrogateGenerator;
//!
//! let field = Array2::from_shape_fn((16, 16), |(y, x)| ((x * y) as f64).sin());
//!
//! // Fixed seed for reproducible samples
//! let mut generator = SurrogateGenerator::from_seed(42);
//! let batch = generator.generate(&field, 4, true).unwrap();
//!
//! assert_eq!(batch.samples.dim(), (4, 16, 16));
//! ```

use log::{debug, info, warn};
use ndarray::{Array2, Array3, Axis, Zip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex64;

use super::phase::random_phase_grid;
use crate::error::{DegenerateStage, Result, SurrogateError};
use crate::preprocessing::{FieldStatistics, Window2D};
use crate::spectral::{amplitude, SpectralTransform, FFT2D};

/// Imaginary residual (relative to the largest real magnitude) above which a
/// reconstruction is reported as not numerically real.
pub const IMAGINARY_TOLERANCE: f64 = 1e-6;

/// One synthesized field and the spectrum it was built from
#[derive(Debug, Clone)]
pub struct SynthesizedSample {
    /// Mean- and variance-matched sample, indexed `[y, x]`
    pub field: Array2<f64>,
    /// Amplitude of the input spectrum combined with this sample's random phase
    pub spectrum: Array2<Complex64>,
    /// Largest discarded imaginary part, relative to the largest real magnitude
    pub imaginary_residual: f64,
}

/// Batch of samples produced by [`generate`]
#[derive(Debug, Clone)]
pub struct SampleBatch {
    /// Samples, shape `(n, ny, nx)`
    pub samples: Array3<f64>,
    /// Spectra used for each sample, shape `(n, ny, nx)`
    pub used_spectra: Array3<Complex64>,
    /// Spectrum of the (windowed, mean-removed) input field
    pub original_spectrum: Array2<Complex64>,
    /// Mean and standard deviation of the windowed input field
    pub statistics: FieldStatistics,
    /// Imaginary residual of each sample's reconstruction
    pub imaginary_residuals: Vec<f64>,
}

impl SampleBatch {
    /// Number of samples in the batch
    pub fn len(&self) -> usize {
        self.samples.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Spectrum and statistics of a prepared input field.
///
/// This is everything the per-sample synthesis needs, so one estimate can
/// feed any number of samples.
#[derive(Debug, Clone)]
pub struct FieldSpectrum {
    statistics: FieldStatistics,
    spectrum: Array2<Complex64>,
    amplitude: Array2<f64>,
}

impl FieldSpectrum {
    /// Validate, window and mean-remove a copy of `field`, then transform it
    pub fn estimate(
        field: &Array2<f64>,
        apply_window: bool,
        transform: &mut dyn SpectralTransform,
    ) -> Result<Self> {
        let (ny, nx) = field.dim();
        if ny == 0 || nx == 0 {
            return Err(SurrogateError::domain(format!(
                "field must have non-zero dimensions, got {}x{}",
                ny, nx
            )));
        }

        if let Some(((row, col), &value)) = field.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SurrogateError::NonFiniteInput { row, col, value });
        }

        let mut working = field.to_owned();
        if apply_window {
            Window2D::hamming(ny, nx).apply(&mut working);
        }

        let statistics = FieldStatistics::of(&working)
            .ok_or_else(|| SurrogateError::domain("field is empty"))?;
        if !statistics.std.is_finite() {
            return Err(SurrogateError::domain(
                "field magnitude is too large to compute its variance",
            ));
        }
        if statistics.is_degenerate(&working) {
            return Err(SurrogateError::DegenerateField {
                stage: DegenerateStage::Original,
                std: statistics.std,
            });
        }
        debug!(
            "Field {}x{} (window: {}): mean = {}, std = {}",
            ny, nx, apply_window, statistics.mean, statistics.std
        );

        let mean = statistics.mean;
        working.mapv_inplace(|v| v - mean);

        let spectrum = transform.forward(&working);
        let amplitude = amplitude(&spectrum);

        Ok(Self {
            statistics,
            spectrum,
            amplitude,
        })
    }

    /// Statistics of the windowed input field
    pub fn statistics(&self) -> FieldStatistics {
        self.statistics
    }

    /// Complex spectrum of the windowed, mean-removed field
    pub fn spectrum(&self) -> &Array2<Complex64> {
        &self.spectrum
    }

    /// Modulus of [`FieldSpectrum::spectrum`], shared by every sample
    pub fn amplitude(&self) -> &Array2<f64> {
        &self.amplitude
    }

    /// Synthesize one sample. `index` is only used for error reporting.
    pub fn synthesize<R: Rng>(
        &self,
        index: usize,
        rng: &mut R,
        transform: &mut dyn SpectralTransform,
    ) -> Result<SynthesizedSample> {
        let (ny, nx) = self.amplitude.dim();
        let phase = random_phase_grid(ny, nx, rng);

        let spectrum = Zip::from(&self.amplitude)
            .and(&phase)
            .map_collect(|&a, &p| Complex64::from_polar(a, p));

        let reconstructed = transform.inverse(&spectrum);
        let mut field = reconstructed.mapv(|c| c.re);

        let max_imaginary = reconstructed.iter().fold(0.0_f64, |acc, c| acc.max(c.im.abs()));
        let max_real = field.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let imaginary_residual = if max_real > 0.0 {
            max_imaginary / max_real
        } else {
            max_imaginary
        };
        if imaginary_residual > IMAGINARY_TOLERANCE {
            warn!(
                "Sample {} reconstruction is not real: imaginary residual {}",
                index, imaginary_residual
            );
        }

        field += self.statistics.mean;

        let sample_statistics = FieldStatistics::of(&field)
            .ok_or_else(|| SurrogateError::domain("sample is empty"))?;
        // The amplitude is preserved, so a sample only loses its variance if
        // the original spectrum was already degenerate; kept as a guard on
        // the division below.
        if sample_statistics.is_degenerate(&field) {
            return Err(SurrogateError::DegenerateField {
                stage: DegenerateStage::Sample(index),
                std: sample_statistics.std,
            });
        }

        let scale = self.statistics.std / sample_statistics.std;
        field.mapv_inplace(|v| v * scale);

        Ok(SynthesizedSample {
            field,
            spectrum,
            imaginary_residual,
        })
    }

    /// Synthesize `n_samples` samples into a batch
    pub fn sample_batch<R: Rng>(
        &self,
        n_samples: usize,
        rng: &mut R,
        transform: &mut dyn SpectralTransform,
    ) -> Result<SampleBatch> {
        let (ny, nx) = self.amplitude.dim();
        let mut samples = Array3::<f64>::zeros((n_samples, ny, nx));
        let mut used_spectra = Array3::<Complex64>::zeros((n_samples, ny, nx));
        let mut imaginary_residuals = Vec::with_capacity(n_samples);

        for i in 0..n_samples {
            let sample = self.synthesize(i, rng, transform)?;
            samples.index_axis_mut(Axis(0), i).assign(&sample.field);
            used_spectra.index_axis_mut(Axis(0), i).assign(&sample.spectrum);
            imaginary_residuals.push(sample.imaginary_residual);
        }

        Ok(SampleBatch {
            samples,
            used_spectra,
            original_spectrum: self.spectrum.clone(),
            statistics: self.statistics,
            imaginary_residuals,
        })
    }
}

/// Generate `n_samples` surrogates of `field` drawing phases from `rng`
pub fn generate<R: Rng>(
    field: &Array2<f64>,
    n_samples: usize,
    apply_window: bool,
    rng: &mut R,
) -> Result<SampleBatch> {
    let mut transform = FFT2D::new();
    let spectrum = FieldSpectrum::estimate(field, apply_window, &mut transform)?;
    spectrum.sample_batch(n_samples, rng, &mut transform)
}

/// Surrogate generator owning its random source and FFT plans
pub struct SurrogateGenerator<R: Rng> {
    rng: R,
    transform: FFT2D,
}

impl SurrogateGenerator<StdRng> {
    /// Creates a generator with a reproducible seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SurrogateGenerator<R> {
    /// Creates a generator drawing phases from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            transform: FFT2D::new(),
        }
    }

    /// Generate an eager batch of `n_samples` surrogates of `field`
    pub fn generate(
        &mut self,
        field: &Array2<f64>,
        n_samples: usize,
        apply_window: bool,
    ) -> Result<SampleBatch> {
        let (ny, nx) = field.dim();
        info!(
            "Generating {} surrogate samples of a {}x{} field",
            n_samples, ny, nx
        );

        let spectrum = FieldSpectrum::estimate(field, apply_window, &mut self.transform)?;
        spectrum.sample_batch(n_samples, &mut self.rng, &mut self.transform)
    }

    /// Prepare `field` and return an endless iterator of samples.
    ///
    /// Samples come out in the same order, and from the same random draws,
    /// as [`SurrogateGenerator::generate`] would produce them.
    pub fn stream(
        &mut self,
        field: &Array2<f64>,
        apply_window: bool,
    ) -> Result<SampleStream<'_, R>> {
        let spectrum = FieldSpectrum::estimate(field, apply_window, &mut self.transform)?;
        Ok(SampleStream {
            spectrum,
            generator: self,
            next_index: 0,
        })
    }
}

/// Lazily synthesized samples of one prepared field
pub struct SampleStream<'a, R: Rng> {
    spectrum: FieldSpectrum,
    generator: &'a mut SurrogateGenerator<R>,
    next_index: usize,
}

impl<R: Rng> SampleStream<'_, R> {
    /// The prepared spectrum shared by every sample
    pub fn field_spectrum(&self) -> &FieldSpectrum {
        &self.spectrum
    }
}

impl<R: Rng> Iterator for SampleStream<'_, R> {
    type Item = Result<SynthesizedSample>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        self.next_index += 1;

        let generator = &mut *self.generator;
        Some(
            self.spectrum
                .synthesize(index, &mut generator.rng, &mut generator.transform),
        )
    }
}
