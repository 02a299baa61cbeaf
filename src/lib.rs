//! Rust Surrogate library
//!
//! This library estimates the 2D spatial power spectrum of a field and
//! synthesizes random fields that share it, by phase randomization.
//!
//! ```rust
//! use ndarray::Array2;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let field = Array2::from_shape_fn((8, 8), |(_, x)| {
//!     (2.0 * std::f64::consts::PI * x as f64 / 8.0).sin()
//! });
//! let mut rng = StdRng::seed_from_u64(7);
//! let batch = rust_surrogate::generate(&field, 3, false, &mut rng).unwrap();
//!
//! assert_eq!(batch.samples.dim(), (3, 8, 8));
//! ```

pub mod config;
pub mod error;
pub mod preprocessing;
pub mod spectral;
pub mod surrogate;
pub mod utility;

pub use error::{DegenerateStage, SurrogateError};
pub use surrogate::{generate, SampleBatch, SurrogateGenerator};
