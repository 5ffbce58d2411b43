/// An error type for the resample module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResampleError {
    /// Error when the source raster holds no pixels.
    #[error("Source raster is empty")]
    EmptySource,

    /// Error when the scale factor is not a positive finite number.
    #[error("Scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),

    /// Error when the computed output size has zero area.
    #[error("Output size has zero area ({0} x {1})")]
    ZeroSizedOutput(usize, usize),

    /// Error when the output raster cannot be created.
    #[error("Failed to create output raster. {0}")]
    RasterCreationError(#[from] framescale_raster::RasterError),
}
