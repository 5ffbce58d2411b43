use rayon::prelude::*;

/// Apply a function to each output row of a packed pixel buffer in parallel.
///
/// # Arguments
///
/// * `pixels` - The packed output buffer, row-major.
/// * `row_stride` - The number of bytes per row (width * channels).
/// * `f` - The function to apply to each (row index, row slice) pair.
pub fn for_each_output_row(
    pixels: &mut [u8],
    row_stride: usize,
    f: impl Fn(usize, &mut [u8]) + Send + Sync,
) {
    pixels
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
