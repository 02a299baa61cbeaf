// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error types for surrogate generation

use std::fmt;

use thiserror::Error;

/// Where a zero variance was encountered during generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateStage {
    /// The (windowed) input field itself has no variance
    Original,
    /// The sample at the given batch index collapsed to a constant
    Sample(usize),
}

impl fmt::Display for DegenerateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateStage::Original => write!(f, "input field"),
            DegenerateStage::Sample(index) => write!(f, "sample {}", index),
        }
    }
}

/// Errors reported by the surrogate generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurrogateError {
    #[error("Invalid input domain: {reason}")]
    Domain { reason: String },

    #[error("Non-finite value {value} in field at row {row}, column {col}")]
    NonFiniteInput { row: usize, col: usize, value: f64 },

    #[error("Degenerate {stage}: standard deviation {std} cannot be used for rescaling")]
    DegenerateField { stage: DegenerateStage, std: f64 },
}

impl SurrogateError {
    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        SurrogateError::Domain {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, SurrogateError>;
