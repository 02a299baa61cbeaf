// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management for the surrogate generator
//!
//! This module provides functionality for loading, validating, and applying
//! configuration settings. The configuration is backed by a YAML file and
//! validated against a JSON schema for robustness.
//!
//! ## Configuration Structure
//!
//! - `generator`: Sample count, windowing and random seed
//! - `output`: Content and formatting of the JSON batch
//!
//! ## Usage
//!
//! ```no_run
//! use rust_surrogate::config::Config;
//! use std::path::Path;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file(Path::new("config.yaml")).unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(100),   // Number of samples
//!     Some(false), // Apply window
//!     Some(42),    // Seed
//!     None,        // Include spectra
//! );
//!
//! println!("Samples: {}", config.generator.n_samples);
//! ```

pub mod generator;
pub mod utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

// Re-export all types for public API
pub use generator::{GeneratorConfig, OutputConfig};
pub use utils::{output_config_schema, validate_against_schema};

/// Root configuration structure.
///
/// The configuration is deserialized from and serialized to YAML using serde.
/// It is validated against a JSON schema before deserialization. Each
/// section uses default values when not explicitly specified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Surrogate generation settings.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Output settings for the command line tool.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Helper method to create a sample config file when validation fails
    fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let sample_path = path.with_extension("sample.yaml");
        debug!("Original path: {:?}, Sample path: {:?}", path, sample_path);

        if let Some(parent) = sample_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create parent directory for sample config at {:?}",
                        parent
                    )
                })?;
            }
        }

        Self::default()
            .save_to_file(&sample_path)
            .with_context(|| format!("Failed to save sample config to {:?}", sample_path))?;

        error!(
            "Sample configuration file created at {:?}\nPlease edit and rename it",
            sample_path
        );
        Ok(())
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        // First step: convert YAML to a generic Value
        let yaml_value: serde_yml::Value = serde_yml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML configuration from {:?}", path))?;

        // Convert to JSON Value for validation
        let json_value = serde_json::to_value(&yaml_value).with_context(|| {
            format!("Failed to convert YAML to JSON for validation: {:?}", path)
        })?;

        debug!("Validating {} configuration against schema", path.display());
        if let Err(err) = validate_against_schema(&json_value) {
            error!("Configuration validation error before deserialization");
            Self::create_sample_config(path)?;
            return Err(err);
        }

        debug!("Schema validation passed, deserializing into Config structure");
        let config: Config = match serde_yml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                error!("Configuration deserialization error: {}", err);
                if let Err(e) = Self::create_sample_config(path) {
                    error!("Failed to create sample config: {}", e);
                }
                return Err(anyhow::anyhow!(
                    "Failed to deserialize configuration from {}: {}",
                    path.display(),
                    err
                ));
            }
        };

        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create config file at {:?}", path.as_ref()))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate this configuration against the embedded schema
    pub fn validate(&self) -> Result<()> {
        let value = serde_json::to_value(self).context("Failed to convert configuration to JSON")?;
        validate_against_schema(&value)
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only arguments that are provided override the existing configuration.
    ///
    /// # Parameters
    ///
    /// * `n_samples` - Optional number of samples
    /// * `apply_window` - Optional windowing flag
    /// * `seed` - Optional random seed
    /// * `include_spectra` - Optional flag to write spectra in the output
    pub fn apply_args(
        &mut self,
        n_samples: Option<usize>,
        apply_window: Option<bool>,
        seed: Option<u64>,
        include_spectra: Option<bool>,
    ) {
        if let Some(n_samples) = n_samples {
            debug!("Overriding sample count from command line: {}", n_samples);
            self.generator.n_samples = n_samples;
        }
        if let Some(apply_window) = apply_window {
            debug!("Overriding windowing from command line: {}", apply_window);
            self.generator.apply_window = apply_window;
        }
        if let Some(seed) = seed {
            debug!("Overriding seed from command line: {}", seed);
            self.generator.seed = Some(seed);
        }
        if let Some(include_spectra) = include_spectra {
            debug!(
                "Overriding spectra output from command line: {}",
                include_spectra
            );
            self.output.include_spectra = include_spectra;
        }
    }
}
