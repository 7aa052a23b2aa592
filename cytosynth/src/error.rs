use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),
    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),
    #[error("Conversion error: {0}")]
    Conversion(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Mask format error: {0}")]
    MaskFormat(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Encoding(e.to_string())
    }
}

impl From<tiff::TiffError> for Error {
    fn from(e: tiff::TiffError) -> Self {
        Error::Encoding(e.to_string())
    }
}

impl From<bytemuck::PodCastError> for Error {
    fn from(e: bytemuck::PodCastError) -> Self {
        Error::Conversion(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
