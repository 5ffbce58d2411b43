use framescale_raster::{Raster, CHANNELS};

/// Fixed support radius of the windowed-sinc kernel.
const SUPPORT: isize = 3;

/// Windowed-sinc weight at distance `d` from the sampling point.
#[inline]
fn lanczos_weight(d: f32) -> f32 {
    if d == 0.0 {
        return 1.0;
    }
    let a = SUPPORT as f32;
    if d.abs() >= a {
        return 0.0;
    }
    let pd = std::f32::consts::PI * d;
    a * pd.sin() * (pd / a).sin() / (pd * pd)
}

/// Kernel for lanczos resampling
///
/// Accumulates windowed-sinc weighted samples over the window
/// `dx, dy in [-2, 2]` around `(floor(sx), floor(sy))`. Taps whose integer
/// coordinate falls outside the source are skipped entirely (not clamped)
/// and the result is normalized by the accumulated weight sum. This edge
/// policy intentionally differs from the bicubic kernel's edge replication.
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
pub(crate) fn lanczos_pixel(src: &Raster, sx: f32, sy: f32) -> [u8; 4] {
    let (cols, rows) = (src.width() as isize, src.height() as isize);
    let data = src.as_slice();

    let xi = sx.floor() as isize;
    let yi = sy.floor() as isize;

    let mut sums = [0.0f32; 3];
    let mut weight_sum = 0.0f32;

    for dy in (-SUPPORT + 1)..SUPPORT {
        let y = yi + dy;
        if y < 0 || y >= rows {
            continue;
        }
        let wy = lanczos_weight(sy - y as f32);
        for dx in (-SUPPORT + 1)..SUPPORT {
            let x = xi + dx;
            if x < 0 || x >= cols {
                continue;
            }
            let w = wy * lanczos_weight(sx - x as f32);
            let base = ((y * cols + x) as usize) * CHANNELS;
            for (sum, &sample) in sums.iter_mut().zip(&data[base..base + 3]) {
                *sum += w * sample as f32;
            }
            weight_sum += w;
        }
    }

    let mut out = [255u8; 4];
    for (c, v) in out.iter_mut().take(3).enumerate() {
        let value = if weight_sum > 0.0 {
            sums[c] / weight_sum
        } else {
            0.0
        };
        *v = value.round().clamp(0.0, 255.0) as u8;
    }

    out
}
