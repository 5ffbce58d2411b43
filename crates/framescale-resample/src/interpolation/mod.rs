//! Pixel interpolation kernels for raster upscaling.
//!
//! This module provides the per-pixel resampling kernels used when computing
//! new pixel values at a higher sampling density.
//!
//! # Algorithms
//!
//! - **Nearest**: Fastest, copies the nearest source pixel (no smoothing)
//! - **Bicubic**: Separable cubic convolution over a 4x4 neighborhood
//! - **Lanczos**: Windowed-sinc interpolation with support radius 3
//!
//! Every kernel writes the output alpha as 255 and clamps color channels to
//! `[0, 255]`; the alpha channel of the source is never sampled.

mod bicubic;
mod lanczos;
mod nearest;

pub(crate) mod resample;

pub use resample::Algorithm;

pub(crate) use resample::resample_pixel;
