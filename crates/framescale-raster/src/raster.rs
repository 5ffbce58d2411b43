use crate::error::RasterError;

/// Number of bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Raster size in pixels
///
/// A struct to represent the size of a raster in pixels.
///
/// # Examples
///
/// ```
/// use framescale_raster::RasterSize;
///
/// let size = RasterSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSize {
    /// Width of the raster in pixels
    pub width: usize,
    /// Height of the raster in pixels
    pub height: usize,
}

impl RasterSize {
    /// Number of pixels in the raster.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for RasterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "RasterSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for RasterSize {
    fn from(size: [usize; 2]) -> Self {
        RasterSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a raster with packed RGBA8 pixel data.
///
/// Pixels are stored row-major with a fixed 4-channel byte layout, so the
/// row stride is always `width * 4`. The buffer length invariant
/// `pixels.len() == width * height * 4` is checked at construction and
/// holds for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    size: RasterSize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a new raster from packed RGBA8 pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `pixels` - The packed RGBA8 pixel data, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the raster size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use framescale_raster::{Raster, RasterSize};
    ///
    /// let raster = Raster::new(
    ///     RasterSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 4],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(raster.width(), 10);
    /// assert_eq!(raster.height(), 20);
    /// ```
    pub fn new(size: RasterSize, pixels: Vec<u8>) -> Result<Self, RasterError> {
        let expected = size.area() * CHANNELS;
        if pixels.len() != expected {
            return Err(RasterError::InvalidBufferLength(pixels.len(), expected));
        }

        Ok(Self { size, pixels })
    }

    /// Create a new raster filled with a single RGBA color.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `rgba` - The fill color.
    pub fn from_size_val(size: RasterSize, rgba: [u8; CHANNELS]) -> Result<Self, RasterError> {
        let mut pixels = Vec::with_capacity(size.area() * CHANNELS);
        for _ in 0..size.area() {
            pixels.extend_from_slice(&rgba);
        }
        Raster::new(size, pixels)
    }

    /// Get the size of the raster in pixels.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// Get the width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Whether the raster holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the packed pixel data as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the packed pixel data as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the raster and return the pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the RGBA bytes of the pixel at the given coordinates.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        let base = (y * self.size.width + x) * CHANNELS;
        Some(&self.pixels[base..base + CHANNELS])
    }
}
