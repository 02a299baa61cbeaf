// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! JSON reading and writing of fields and sample batches
//!
//! A field is a JSON array of rows, `[[f64; nx]; ny]`. A batch is written as
//! a [`BatchOutput`] object; complex values are `[re, im]` pairs.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use ndarray::{Array2, ArrayView2, Axis};
use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::SurrogateError;
use crate::surrogate::SampleBatch;

/// Serialized form of a [`SampleBatch`]
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchOutput {
    /// `[n, ny, nx]`
    pub shape: [usize; 3],
    /// Mean of the windowed input field
    pub mean: f64,
    /// Standard deviation of the windowed input field
    pub std: f64,
    pub samples: Vec<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub used_spectra: Option<Vec<Vec<Vec<[f64; 2]>>>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_spectrum: Option<Vec<Vec<[f64; 2]>>>,
}

impl BatchOutput {
    /// Convert a batch, optionally including its spectra
    pub fn from_batch(batch: &SampleBatch, include_spectra: bool) -> Self {
        let (n, ny, nx) = batch.samples.dim();

        let samples = batch
            .samples
            .axis_iter(Axis(0))
            .map(field_to_rows)
            .collect();

        let (used_spectra, original_spectrum) = if include_spectra {
            let used = batch
                .used_spectra
                .axis_iter(Axis(0))
                .map(spectrum_to_rows)
                .collect();
            (
                Some(used),
                Some(spectrum_to_rows(batch.original_spectrum.view())),
            )
        } else {
            (None, None)
        };

        Self {
            shape: [n, ny, nx],
            mean: batch.statistics.mean,
            std: batch.statistics.std,
            samples,
            used_spectra,
            original_spectrum,
        }
    }
}

/// Build a field from rows, rejecting empty and ragged input
pub fn field_from_rows(rows: Vec<Vec<f64>>) -> std::result::Result<Array2<f64>, SurrogateError> {
    let ny = rows.len();
    let nx = rows.first().map(Vec::len).unwrap_or(0);
    if ny == 0 || nx == 0 {
        return Err(SurrogateError::Domain {
            reason: "field has no rows or no columns".to_string(),
        });
    }

    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nx) {
        return Err(SurrogateError::Domain {
            reason: format!(
                "row {} has {} values, expected {}",
                index,
                row.len(),
                nx
            ),
        });
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((ny, nx), flat).map_err(|e| SurrogateError::Domain {
        reason: e.to_string(),
    })
}

/// Rows of a field, for serialization
pub fn field_to_rows(field: ArrayView2<f64>) -> Vec<Vec<f64>> {
    field.axis_iter(Axis(0)).map(|row| row.to_vec()).collect()
}

fn spectrum_to_rows(spectrum: ArrayView2<Complex64>) -> Vec<Vec<[f64; 2]>> {
    spectrum
        .axis_iter(Axis(0))
        .map(|row| row.iter().map(|c| [c.re, c.im]).collect())
        .collect()
}

/// Parse a field from its JSON text
pub fn parse_field(contents: &str) -> Result<Array2<f64>> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(contents).context("Failed to parse field as a JSON array of rows")?;
    Ok(field_from_rows(rows)?)
}

/// Read a field from a JSON file
pub fn read_field<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let path = path.as_ref();
    debug!("Reading field from {:?}", path);
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read field file at {:?}", path))?;
    parse_field(&contents).with_context(|| format!("Invalid field in {:?}", path))
}

/// Write a field to a JSON file
pub fn write_field<P: AsRef<Path>>(field: &Array2<f64>, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(&field_to_rows(field.view()))
        .context("Failed to serialize field to JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write field to {:?}", path))?;
    Ok(())
}

/// Write a batch as JSON to `writer`
pub fn write_batch<W: Write>(
    batch: &SampleBatch,
    include_spectra: bool,
    pretty: bool,
    writer: W,
) -> Result<()> {
    let output = BatchOutput::from_batch(batch, include_spectra);
    let written = if pretty {
        serde_json::to_writer_pretty(writer, &output)
    } else {
        serde_json::to_writer(writer, &output)
    };
    written.context("Failed to write sample batch as JSON")?;
    Ok(())
}
