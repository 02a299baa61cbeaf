// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Utility module for common utilities used throughout the project

pub mod field_io;
pub mod test_fields;

// Re-exports for use in other modules
pub use field_io::{read_field, write_batch, write_field, BatchOutput};
pub use test_fields::FieldGenerator;
