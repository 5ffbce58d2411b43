#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use framescale_raster as raster;

#[doc(inline)]
pub use framescale_resample as resample;

#[doc(inline)]
pub use framescale_engine as engine;
