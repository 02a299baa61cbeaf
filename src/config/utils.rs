// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides utility functions for working with configuration
//! settings, including schema management and validation.

use anyhow::{Context, Result};
use log::debug;

/// JSON schema of the configuration file, embedded at build time
pub const CONFIG_SCHEMA: &str = include_str!("../../resources/config.schema.json");

/// Output the embedded JSON schema to the console.
///
/// This function is called when the `--show-config-schema` flag is provided
/// on the command line. It outputs the full JSON schema for the configuration
/// to stdout, formatted for readability.
///
/// # Example
///
/// ```bash
/// ./rust_surrogate --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    let schema: serde_json::Value =
        serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;

    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;

    println!("{}", formatted_schema);

    Ok(())
}

/// Validate a JSON value against the embedded configuration schema.
///
/// # Returns
///
/// * `Ok(())` if the value conforms to the schema
/// * `Err(anyhow::Error)` describing the first violation otherwise
pub fn validate_against_schema(value: &serde_json::Value) -> Result<()> {
    let schema: serde_json::Value = serde_json::from_str(CONFIG_SCHEMA).with_context(|| {
        debug!("JSON schema string: {}", CONFIG_SCHEMA);
        "Failed to parse JSON schema"
    })?;

    let validator = jsonschema::draft202012::options()
        .should_validate_formats(true)
        .build(&schema)?;

    if let Err(error) = validator.validate(value) {
        anyhow::bail!("Configuration validation failed: {}", error);
    }

    Ok(())
}
