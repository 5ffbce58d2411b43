#![deny(missing_docs)]
//! RGBA8 raster container shared by the framescale crates.

/// raster representation for resampling purposes.
pub mod raster;

/// Error types for the raster module.
pub mod error;

pub use crate::error::RasterError;
pub use crate::raster::{Raster, RasterSize, CHANNELS};
