use framescale_raster::{Raster, CHANNELS};

/// Kernel for nearest neighbor resampling
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `sx` - The continuous x coordinate in source space.
/// * `sy` - The continuous y coordinate in source space.
///
/// # Returns
///
/// The RGBA bytes of the nearest source pixel, alpha forced to 255.
pub(crate) fn nearest_pixel(src: &Raster, sx: f32, sy: f32) -> [u8; 4] {
    let (cols, rows) = (src.width(), src.height());

    let x = (sx.floor() as usize).min(cols - 1);
    let y = (sy.floor() as usize).min(rows - 1);

    let base = (y * cols + x) * CHANNELS;
    let data = src.as_slice();

    [data[base], data[base + 1], data[base + 2], 255]
}
