// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration for surrogate generation and its output

use serde::{Deserialize, Serialize};

/// Configuration for the surrogate generator.
///
/// # Example
///
/// ```
/// use rust_surrogate::config::GeneratorConfig;
///
/// let generator_config = GeneratorConfig {
///     n_samples: 100,
///     apply_window: false,
///     seed: Some(42),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of surrogate samples to generate. Default is 10.
    pub n_samples: usize,

    /// Apply the Hamming taper before estimating the spectrum.
    ///
    /// Default is `true`.
    pub apply_window: bool,

    /// Seed for the random phases.
    ///
    /// When absent, phases are drawn from a generator seeded with operating
    /// system entropy and runs are not reproducible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_samples: 10,
            apply_window: true,
            seed: None,
        }
    }
}

/// Configuration for the JSON batch written by the command line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Also write the per-sample and original spectra. Default is `false`.
    pub include_spectra: bool,
    /// Pretty-print the JSON. Default is `false`.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_spectra: false,
            pretty: false,
        }
    }
}
