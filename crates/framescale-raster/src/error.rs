/// An error type for the raster module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Error when the pixel buffer length does not match the raster size.
    #[error("Buffer length ({0}) does not match the raster size ({1})")]
    InvalidBufferLength(usize, usize),

    /// Error when a raster with zero area is not allowed.
    #[error("Raster has zero area ({0} x {1})")]
    ZeroArea(usize, usize),
}
