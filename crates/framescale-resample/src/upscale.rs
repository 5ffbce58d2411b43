use crate::error::ResampleError;
use crate::interpolation::{resample_pixel, Algorithm};
use crate::parallel;
use framescale_raster::{Raster, RasterSize, CHANNELS};

/// Compute the output size for a given source size and scale factor.
///
/// Both dimensions are `floor(src_dim * scale_factor)`.
pub fn output_size(src: RasterSize, scale_factor: f64) -> RasterSize {
    RasterSize {
        width: (src.width as f64 * scale_factor).floor() as usize,
        height: (src.height as f64 * scale_factor).floor() as usize,
    }
}

/// Upscale a raster by a scale factor using the given algorithm.
///
/// The function allocates a new output raster of size
/// `floor(src_dim * scale_factor)` per axis and fills it with the selected
/// per-pixel kernel, processing output rows in parallel. The source raster
/// is never mutated. Output alpha is always 255 and color channels are
/// clamped to `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `scale_factor` - Ratio of output to input linear dimension.
/// * `algorithm` - The resampling algorithm to use.
///
/// # Returns
///
/// The upscaled raster.
///
/// # Example
///
/// ```
/// use framescale_raster::{Raster, RasterSize};
/// use framescale_resample::{upscale, Algorithm};
///
/// let src = Raster::from_size_val(
///     RasterSize {
///         width: 4,
///         height: 3,
///     },
///     [255, 0, 0, 255],
/// )
/// .unwrap();
///
/// let dst = upscale(&src, 2.0, Algorithm::Bicubic).unwrap();
///
/// assert_eq!(dst.width(), 8);
/// assert_eq!(dst.height(), 6);
/// ```
pub fn upscale(
    src: &Raster,
    scale_factor: f64,
    algorithm: Algorithm,
) -> Result<Raster, ResampleError> {
    if src.is_empty() {
        return Err(ResampleError::EmptySource);
    }
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(ResampleError::InvalidScaleFactor(scale_factor));
    }

    let dst_size = output_size(src.size(), scale_factor);
    if dst_size.area() == 0 {
        return Err(ResampleError::ZeroSizedOutput(
            dst_size.width,
            dst_size.height,
        ));
    }

    let inv_scale = 1.0 / scale_factor;
    let mut pixels = vec![0u8; dst_size.area() * CHANNELS];

    parallel::for_each_output_row(&mut pixels, dst_size.width * CHANNELS, |y, row| {
        let sy = (y as f64 * inv_scale) as f32;
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let sx = (x as f64 * inv_scale) as f32;
            px.copy_from_slice(&resample_pixel(src, sx, sy, algorithm));
        }
    });

    Ok(Raster::new(dst_size, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::{output_size, upscale, Algorithm};
    use crate::error::ResampleError;
    use framescale_raster::{Raster, RasterError, RasterSize, CHANNELS};

    const ALGORITHMS: [Algorithm; 3] =
        [Algorithm::Bicubic, Algorithm::Lanczos, Algorithm::Nearest];

    fn checkerboard(size: RasterSize) -> Result<Raster, RasterError> {
        let mut pixels = Vec::with_capacity(size.area() * CHANNELS);
        for y in 0..size.height {
            for x in 0..size.width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Raster::new(size, pixels)
    }

    #[test]
    fn dimension_law() -> Result<(), ResampleError> {
        let src = checkerboard(RasterSize {
            width: 7,
            height: 5,
        })?;

        for algorithm in ALGORITHMS {
            for scale in [1.5, 2.0, 3.0, 4.0] {
                let dst = upscale(&src, scale, algorithm)?;
                assert_eq!(dst.width(), (7.0 * scale).floor() as usize);
                assert_eq!(dst.height(), (5.0 * scale).floor() as usize);
            }
        }

        Ok(())
    }

    #[test]
    fn alpha_law() -> Result<(), ResampleError> {
        // transparent source, opaque output
        let src = Raster::from_size_val(
            RasterSize {
                width: 6,
                height: 4,
            },
            [120, 60, 30, 0],
        )?;

        for algorithm in ALGORITHMS {
            let dst = upscale(&src, 1.5, algorithm)?;
            for px in dst.as_slice().chunks_exact(CHANNELS) {
                assert_eq!(px[3], 255);
            }
        }

        Ok(())
    }

    #[test]
    fn nearest_identity_at_scale_one() -> Result<(), ResampleError> {
        let src = checkerboard(RasterSize {
            width: 8,
            height: 6,
        })?;

        let dst = upscale(&src, 1.0, Algorithm::Nearest)?;
        assert_eq!(dst, src);

        Ok(())
    }

    #[test]
    fn nearest_block_replication() -> Result<(), ResampleError> {
        const RED: [u8; 4] = [255, 0, 0, 255];
        const GREEN: [u8; 4] = [0, 255, 0, 255];
        const BLUE: [u8; 4] = [0, 0, 255, 255];
        const WHITE: [u8; 4] = [255, 255, 255, 255];

        let mut pixels = Vec::new();
        for color in [RED, GREEN, BLUE, WHITE] {
            pixels.extend_from_slice(&color);
        }
        let src = Raster::new(
            RasterSize {
                width: 2,
                height: 2,
            },
            pixels,
        )?;

        let dst = upscale(&src, 2.0, Algorithm::Nearest)?;
        assert_eq!(dst.size().area(), 16);

        let expected = [[RED, GREEN], [BLUE, WHITE]];
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(
                    dst.pixel(x, y).unwrap(),
                    &expected[y / 2][x / 2],
                    "pixel ({x}, {y})"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn constant_preservation() -> Result<(), ResampleError> {
        let color = [173, 42, 219, 255];
        let src = Raster::from_size_val(
            RasterSize {
                width: 9,
                height: 7,
            },
            color,
        )?;

        for algorithm in [Algorithm::Bicubic, Algorithm::Lanczos] {
            for scale in [1.5, 2.0, 3.0, 4.0] {
                let dst = upscale(&src, scale, algorithm)?;
                for px in dst.as_slice().chunks_exact(CHANNELS) {
                    for c in 0..3 {
                        assert!(
                            px[c].abs_diff(color[c]) <= 1,
                            "{algorithm} at scale {scale}: channel {c} drifted to {}",
                            px[c]
                        );
                    }
                }
            }
        }

        Ok(())
    }

    #[test]
    fn output_size_floors() {
        let src = RasterSize {
            width: 3,
            height: 5,
        };
        let out = output_size(src, 1.5);
        assert_eq!(out.width, 4);
        assert_eq!(out.height, 7);
    }

    #[test]
    fn rejects_empty_source() {
        let src = Raster::new(
            RasterSize {
                width: 0,
                height: 0,
            },
            vec![],
        )
        .unwrap();
        let res = upscale(&src, 2.0, Algorithm::Nearest);
        assert_eq!(res, Err(ResampleError::EmptySource));
    }

    #[test]
    fn rejects_zero_width_source() {
        // a zero-width raster carries an empty buffer and must never reach
        // the kernels, whose neighborhood clamps assume at least one column
        let src = Raster::new(
            RasterSize {
                width: 0,
                height: 5,
            },
            vec![],
        )
        .unwrap();

        for algorithm in ALGORITHMS {
            let res = upscale(&src, 2.0, algorithm);
            assert_eq!(res, Err(ResampleError::EmptySource));
        }
    }

    #[test]
    fn rejects_invalid_scale_factor() -> Result<(), RasterError> {
        let src = Raster::from_size_val(
            RasterSize {
                width: 2,
                height: 2,
            },
            [0, 0, 0, 255],
        )?;

        for scale in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let res = upscale(&src, scale, Algorithm::Bicubic);
            assert!(matches!(res, Err(ResampleError::InvalidScaleFactor(_))));
        }

        Ok(())
    }

    #[test]
    fn rejects_zero_sized_output() -> Result<(), RasterError> {
        let src = Raster::from_size_val(
            RasterSize {
                width: 2,
                height: 2,
            },
            [0, 0, 0, 255],
        )?;

        let res = upscale(&src, 0.25, Algorithm::Nearest);
        assert_eq!(res, Err(ResampleError::ZeroSizedOutput(0, 0)));

        Ok(())
    }
}
