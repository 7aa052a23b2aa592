//! Cell segmentation masks.

use std::path::Path;

use bytemuck::Pod;
use num_traits::ToPrimitive;

use common::Raster;

use crate::color_format::{ChannelCount, ChannelSize, ChannelType};
use crate::error::{Error, Result};
use crate::image::Image;

/// Segmentation mask for one field of view.
///
/// Each pixel holds the object number of the cell covering it, or 0 for
/// background. Samples are widened to u32 regardless of the stored bit depth.
#[derive(Debug, Clone)]
pub struct SegmentationMask {
    raster: Raster<u32>,
}

impl SegmentationMask {
    /// Reads a single-channel unsigned-integer TIFF mask.
    pub fn read_tiff<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = Image::read_file(path)?;
        Self::from_image(&image)
    }

    pub fn from_image(image: &Image) -> Result<Self> {
        let desc = *image.desc();

        if desc.color_format.channel_count != ChannelCount::L
            || desc.color_format.channel_type != ChannelType::UInt
        {
            return Err(Error::MaskFormat(format!(
                "expected single-channel unsigned-integer mask, got {}",
                desc.color_format
            )));
        }

        let packed = image.clone().packed();
        let values = match desc.color_format.channel_size {
            ChannelSize::_8bit => packed.bytes().iter().map(|&v| v as u32).collect(),
            ChannelSize::_16bit => widen::<u16>(packed.bytes()),
            ChannelSize::_32bit => widen::<u32>(packed.bytes()),
        };

        Ok(Self {
            raster: Raster::new(desc.width as usize, desc.height as usize, values),
        })
    }

    pub fn from_raster(raster: Raster<u32>) -> Self {
        Self { raster }
    }

    pub fn raster(&self) -> &Raster<u32> {
        &self.raster
    }

    pub fn width(&self) -> usize {
        self.raster.width()
    }

    pub fn height(&self) -> usize {
        self.raster.height()
    }
}

fn widen<T: Pod + ToPrimitive>(bytes: &[u8]) -> Vec<u32> {
    bytemuck::pod_collect_to_vec::<u8, T>(bytes)
        .iter()
        .map(|v| v.to_u32().unwrap_or(0))
        .collect()
}
