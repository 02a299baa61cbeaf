// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! Spectral analysis module
//!
//! This module handles spectral analysis of 2D fields,
//! particularly Fast Fourier Transform (FFT) processing.

mod fft;

pub use fft::{amplitude, SpectralTransform, FFT2D};

/// Create a new 2D spectral transform
pub fn create_spectral_transform() -> Box<dyn SpectralTransform> {
    Box::new(FFT2D::new())
}
