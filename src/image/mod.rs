pub mod gray;
pub mod io;
pub mod raster;

pub use self::gray::GrayImageU8;
pub use self::raster::{RasterImage, Samples};
