// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//! Field preprocessing module
//!
//! This module handles preparation of the input field before spectral
//! estimation, including tapering and statistics capture.

pub mod statistics;
pub mod window;

pub use statistics::FieldStatistics;
pub use window::{hamming, Window2D};
