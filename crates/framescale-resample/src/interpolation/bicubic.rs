use framescale_raster::{Raster, CHANNELS};

/// 1-D cubic convolution through four samples at fractional offset `t`.
///
/// At `t = 0` the curve passes through `p1`, at `t = 1` through `p2`.
#[inline]
fn cubic(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    p1 + 0.5
        * t
        * (p2 - p0
            + t * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3 + t * (3.0 * (p1 - p2) + p3 - p0)))
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Kernel for bicubic resampling
///
/// Two-pass separable cubic convolution over the 4x4 neighborhood at
/// offsets `-1..=2` around `(floor(sx), floor(sy))`. Neighborhood
/// coordinates outside the source are clamped to the nearest edge pixel.
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `sx` - The continuous x coordinate in source space.
/// * `sy` - The continuous y coordinate in source space.
///
/// # Returns
///
/// The RGBA bytes of the resampled pixel, alpha forced to 255.
pub(crate) fn bicubic_pixel(src: &Raster, sx: f32, sy: f32) -> [u8; 4] {
    let (cols, rows) = (src.width(), src.height());
    let data = src.as_slice();

    let xi = sx.floor() as isize;
    let yi = sy.floor() as isize;
    let xf = sx - xi as f32;
    let yf = sy - yi as f32;

    let mut out = [255u8; 4];
    for (c, v) in out.iter_mut().take(3).enumerate() {
        let mut col = [0.0f32; 4];
        for (j, cv) in col.iter_mut().enumerate() {
            let y = clamp_index(yi + j as isize - 1, rows);
            let mut row = [0.0f32; 4];
            for (i, rv) in row.iter_mut().enumerate() {
                let x = clamp_index(xi + i as isize - 1, cols);
                *rv = data[(y * cols + x) * CHANNELS + c] as f32;
            }
            // horizontal pass
            *cv = cubic(row[0], row[1], row[2], row[3], xf);
        }
        // vertical pass
        let value = cubic(col[0], col[1], col[2], col[3], yf);
        *v = value.round().clamp(0.0, 255.0) as u8;
    }

    out
}
