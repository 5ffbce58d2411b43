/// An error type for the engine module.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Error when no source raster (or no previous result) is available.
    #[error("No source raster available")]
    MissingSource,

    /// Error when a resampling kernel fails.
    #[error("Kernel failed. {0}")]
    Kernel(#[from] framescale_resample::ResampleError),

    /// Error when JPEG encoding of the result fails.
    #[error("Error with Jpeg encoding. {0}")]
    JpegEncodingError(#[from] jpeg_encoder::EncodingError),
}
