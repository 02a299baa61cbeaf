// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//! Surrogate generation module
//!
//! This module synthesizes random fields that share the amplitude spectrum,
//! mean and variance of an input field.

mod generator;
pub mod phase;
#[cfg(test)]
mod generator_test;

pub use generator::{
    generate, FieldSpectrum, SampleBatch, SampleStream, SurrogateGenerator, SynthesizedSample,
    IMAGINARY_TOLERANCE,
};

use rand::rngs::StdRng;

/// Create a generator, reproducible when a seed is given
pub fn create_generator(seed: Option<u64>) -> SurrogateGenerator<StdRng> {
    match seed {
        Some(seed) => SurrogateGenerator::from_seed(seed),
        None => SurrogateGenerator::from_entropy(),
    }
}
