use framescale_raster::Raster;
use jpeg_encoder::{ColorType, Encoder};

/// Encodes the given raster _(rgba8)_ into an in-memory JPEG.
///
/// The alpha channel is ignored by the encoder; enhanced rasters are always
/// opaque anyway.
///
/// # Arguments
///
/// - `raster` - The raster containing the RGBA8 pixel data.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn encode_rgba8(raster: &Raster, quality: u8) -> Result<Vec<u8>, jpeg_encoder::EncodingError> {
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder.encode(
        raster.as_slice(),
        raster.width() as u16,
        raster.height() as u16,
        ColorType::Rgba,
    )?;
    Ok(buf)
}
