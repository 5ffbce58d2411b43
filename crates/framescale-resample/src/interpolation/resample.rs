use super::bicubic::bicubic_pixel;
use super::lanczos::lanczos_pixel;
use super::nearest::nearest_pixel;
use framescale_raster::Raster;

/// Resampling algorithm for the upscale operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Separable cubic convolution over a 4x4 neighborhood
    #[default]
    Bicubic,
    /// Windowed-sinc interpolation with support radius 3
    Lanczos,
    /// Nearest neighbor copy (no interpolation)
    Nearest,
}

impl Algorithm {
    /// Parse an algorithm name from a configuration string.
    ///
    /// Unknown names fall back to [`Algorithm::Nearest`] so that a stale or
    /// malformed configuration still produces an output raster.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bicubic" => Self::Bicubic,
            "lanczos" => Self::Lanczos,
            _ => Self::Nearest,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bicubic => write!(f, "bicubic"),
            Self::Lanczos => write!(f, "lanczos"),
            Self::Nearest => write!(f, "nearest"),
        }
    }
}

/// Kernel for resampling a single output pixel
///
/// The source raster must be non-empty; [`crate::upscale`] rejects empty
/// sources before dispatching here.
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `sx` - The continuous x coordinate in source space.
/// * `sy` - The continuous y coordinate in source space.
/// * `algorithm` - The resampling algorithm to use.
///
/// # Returns
///
/// The RGBA bytes of the resampled pixel, alpha forced to 255.
pub fn resample_pixel(src: &Raster, sx: f32, sy: f32, algorithm: Algorithm) -> [u8; 4] {
    match algorithm {
        Algorithm::Bicubic => bicubic_pixel(src, sx, sy),
        Algorithm::Lanczos => lanczos_pixel(src, sx, sy),
        Algorithm::Nearest => nearest_pixel(src, sx, sy),
    }
}

#[cfg(test)]
mod tests {
    use super::Algorithm;

    #[test]
    fn algorithm_from_name() {
        assert_eq!(Algorithm::from_name("bicubic"), Algorithm::Bicubic);
        assert_eq!(Algorithm::from_name("Lanczos"), Algorithm::Lanczos);
        assert_eq!(Algorithm::from_name(" nearest "), Algorithm::Nearest);
    }

    #[test]
    fn algorithm_fallback_to_nearest() {
        assert_eq!(Algorithm::from_name("bilinear"), Algorithm::Nearest);
        assert_eq!(Algorithm::from_name(""), Algorithm::Nearest);
    }
}
