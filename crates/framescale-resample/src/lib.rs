#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// scale-driven resampling entry point.
pub mod upscale;

/// Error types for the resample module.
pub mod error;

pub use crate::error::ResampleError;
pub use crate::interpolation::Algorithm;
pub use crate::upscale::{output_size, upscale};
