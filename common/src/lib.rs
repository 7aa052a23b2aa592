pub mod log_setup;
pub mod raster;
pub mod test_utils;

pub use raster::Raster;
